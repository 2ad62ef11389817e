//! Logging setup
//!
//! Uses the `log` facade with `env_logger` writing to stderr, so printed
//! output on stdout stays clean. `RUST_LOG` overrides the default filter:
//!
//! - `RUST_LOG=warn` (default): skipped removals and other oddities
//! - `RUST_LOG=debug` (or `--verbose`): toast lifecycle and row edits

use env_logger::{Builder, Env};

/// Initialize the global logger; later calls are ignored
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .format_target(false)
        .try_init();
}
