//! Tracing setup for the CLI. Diagnostics go to stderr so stdout stays
//! clean for tables and piped exports.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DEVFEST_SCHEDULE_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
