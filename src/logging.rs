// SPDX-License-Identifier: MPL-2.0
//! Log output for the sorter.
//!
//! Everything goes to stderr through a `tracing-subscriber` fmt layer. The
//! filter is read from `ICED_SORTER_LOG` using the usual `EnvFilter` syntax
//! (e.g. `iced_sorter=debug,wgpu=warn`) and defaults to `iced_sorter=info`.

use crate::config::{DEFAULT_LOG_FILTER, ENV_LOG};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Builds the filter from `ICED_SORTER_LOG`, falling back to the default on
/// a missing or malformed value.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber. Calling it twice is harmless: the second
/// install fails and is ignored.
pub fn init() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(env_filter())
        .with(console_layer)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("logging initialized");
    }
}
