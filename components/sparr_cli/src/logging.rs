//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SPARR_LOG";

/// Filter directive for a `-v` count
///
/// Returns `None` when no flag was given so `SPARR_LOG` decides.
pub fn verbosity_directive(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the stderr fmt subscriber
///
/// `-v` flags win over `SPARR_LOG`; with neither, only warnings are shown.
/// Calling this twice keeps the first subscriber.
pub fn init_logging(verbosity: u8) {
    let filter = match verbosity_directive(verbosity) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
