// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

pub fn directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "budget_tracker=warn",
        1 => "budget_tracker=info",
        _ => "budget_tracker=debug",
    }
}

/// `rust_log` replaces the default level; `-v` still raises ours on top of it.
pub fn filter(verbosity: u8, rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        None => EnvFilter::new(directive(verbosity)),
        Some(env) if verbosity == 0 => EnvFilter::new(env),
        Some(env) => match directive(verbosity).parse() {
            Ok(d) => EnvFilter::new(env).add_directive(d),
            Err(_) => EnvFilter::new(env),
        },
    }
}

/// Operator console: stderr, so page output on stdout stays clean.
pub fn init(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        fmt()
            .with_env_filter(filter(verbosity, rust_log.as_deref()))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn enabled(filter: EnvFilter, level: Level) -> bool {
        let subscriber = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            if level == Level::DEBUG {
                tracing::enabled!(target: "budget_tracker::page", Level::DEBUG)
            } else if level == Level::INFO {
                tracing::enabled!(target: "budget_tracker::page", Level::INFO)
            } else {
                tracing::enabled!(target: "budget_tracker::page", Level::WARN)
            }
        })
    }

    #[test]
    fn default_is_warn() {
        assert!(enabled(filter(0, None), Level::WARN));
        assert!(!enabled(filter(0, None), Level::INFO));
        assert!(!enabled(filter(0, Some("  ")), Level::INFO));
    }

    #[test]
    fn rust_log_is_not_clobbered_without_verbose() {
        assert!(enabled(filter(0, Some("budget_tracker=debug")), Level::DEBUG));
    }

    #[test]
    fn verbose_raises_the_level() {
        assert!(enabled(filter(1, None), Level::INFO));
        assert!(!enabled(filter(1, None), Level::DEBUG));
        assert!(enabled(filter(2, Some("budget_tracker=warn")), Level::DEBUG));
    }
}
