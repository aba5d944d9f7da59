//! Diagnostic logging to stderr.
//!
//! Quiet by default so the wrapped build's output stays clean; raise the
//! level with e.g. `MVN_COLOR_LOG=debug`.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MVN_COLOR_LOG";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
