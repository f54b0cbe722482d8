//! Logging setup for the inspection CLI.
//!
//! Logs go to stderr so command output on stdout stays pipeable. Set
//! `DEBUG_LOGGING=1` to enable debug output for benchboard crates.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let filter_directive = if debug_logging {
        // debug for benchboard crates, info for dependencies
        "info,benchboard=debug,benchboard_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_env_filter(EnvFilter::new(filter_directive))
        .init();
}
