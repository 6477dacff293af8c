//! Tracing initialization.
//! Builds a compact stderr subscriber with EnvFilter.
//!
//! Behavior:
//! - Default level is `warn`; RUST_LOG overrides it.
//! - Diagnostics go to stderr so stdout stays reserved for the line-oriented
//!   progress/status output users may script against.

use chrono::Local;
use std::fmt as stdfmt;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::FormatTime;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> stdfmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%d/%m/%y %H:%M:%S"))
    }
}

/// Initialize tracing for the CLI binary.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_timer(LocalHumanTime)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
