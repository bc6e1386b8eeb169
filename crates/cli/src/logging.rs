// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! The filter comes from `PLANK_LOG`, then the config's `log_level`, and
//! defaults to warnings only so normal output stays clean.

use tracing_subscriber::EnvFilter;

use crate::env;

pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Picks the filter directive from the environment and config values.
pub fn directive(env_value: Option<String>, config_level: Option<&str>) -> String {
    env_value
        .or_else(|| {
            config_level
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Installs the stderr subscriber. Safe to call more than once.
pub fn init(config_level: Option<&str>) {
    let wanted = directive(env::log_filter(), config_level);
    let filter = EnvFilter::try_new(&wanted).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
