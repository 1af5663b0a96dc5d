// SPDX-License-Identifier: MPL-2.0
//! Diagnostic logging setup.
//!
//! Events go to stderr through `tracing-subscriber`. `RUST_LOG` overrides the
//! level chosen on the command line.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor `--verbose` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "greeting_lens=debug,warn";

#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Installs the global subscriber. Calling it twice keeps the first one.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
