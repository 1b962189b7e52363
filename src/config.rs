/// Application-level constants
pub const APP_NAME: &str = "Clínica";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,clinica_lib=debug"
    } else {
        "warn,clinica_lib=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_clinica() {
        assert_eq!(APP_NAME, "Clínica");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_scopes_crate() {
        assert!(default_log_filter().contains("clinica_lib="));
    }
}
