//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`; user-facing output does not.

use tracing_subscriber::EnvFilter;

/// Overrides the `-v` level with a full filter directive.
pub const LOG_ENV: &str = "VANILLAFY_LOG";

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
