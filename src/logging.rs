//! Diagnostics via `tracing`, written to stderr.
//!
//! Filter precedence: `GEARPLAN_LOG`, then `RUST_LOG`, then the `-v` count,
//! then `GEARPLAN_VERBOSITY`. Report and check output never goes through here.

use gearplan::config::{Config, Verbosity};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `tracing` directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    let verbosity = match verbose {
        0 => Config::default().with_env_overrides().output.verbosity,
        1 => Verbosity::Verbose,
        _ => Verbosity::Debug,
    };
    verbosity.log_filter()
}

pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env("GEARPLAN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
