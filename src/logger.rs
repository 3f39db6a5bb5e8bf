//! Logging setup using the `tracing` ecosystem
//!
//! Log lines go to stderr so that command output on stdout (completions,
//! version info) stays clean.
//!
//! The level is picked in this order:
//! 1. `--verbose`: debug
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`, if set and valid
//! 4. info

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "assetpack=debug";
const QUIET_FILTER: &str = "assetpack=error";
const DEFAULT_FILTER: &str = "assetpack=info";

/// Filter for the given verbosity flags
///
/// `verbose` wins over `quiet`.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber
///
/// Call once, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && console::colors_enabled_stderr())
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}
