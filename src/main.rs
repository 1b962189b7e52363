fn main() -> std::io::Result<()> {
    clinica_lib::run()
}
