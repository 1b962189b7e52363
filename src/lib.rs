pub mod appointment;
pub mod clock;
pub mod config;
pub mod models;
pub mod render;
pub mod terminal;
pub mod validation;

use std::io;

use tracing_subscriber::EnvFilter;

use crate::appointment::AppointmentForm;
use crate::terminal::JsonLines;

/// Mount one appointment form on stdin/stdout. Accepted appointments are
/// printed as JSON lines; logs go to stderr.
pub fn run() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let mut form = AppointmentForm::new(JsonLines::new(io::stdout()));
    terminal::run_session(&mut form, io::stdin().lock(), &mut io::stdout())
}
