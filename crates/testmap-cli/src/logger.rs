//! Logging for the testmap CLI.
//!
//! Logs go to stderr through `tracing-subscriber`; stdout carries only the
//! JSON result.
//!
//! ```rust,no_run
//! use testmap_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("discovering tests");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "testmap_core=debug,testmap_js=debug,testmap_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "testmap_core=info,testmap_js=info,testmap_cli=info";

/// Initialize the tracing subscriber.
///
/// The filter is picked in this order:
/// 1. `--verbose`: debug for testmap crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. info for testmap crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = match fixed_filter(verbose, quiet) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Filter forced by command-line flags, if any.
fn fixed_filter(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some(VERBOSE_FILTER)
    } else if quiet {
        Some(QUIET_FILTER)
    } else {
        None
    }
}
