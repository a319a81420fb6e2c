//! Logging setup.
//!
//! Console output through `tracing-subscriber`'s fmt layer, filtered by
//! `RUST_LOG` when set and by the caller's default directive otherwise.
//!
//! ```bash
//! # Watch viewport latches and selection changes
//! RUST_LOG=sactifi_core=debug sactifi-desktop
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter: `RUST_LOG` wins, then `fallback`, then `info`.
pub fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(fallback: Option<&str>) {
    let result = tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    if result.is_ok() {
        tracing::debug!("logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fallback_degrades_to_default() {
        // Must not panic on a malformed directive.
        let _ = env_filter(Some("=[not a filter"));
    }

    #[test]
    fn init_twice_is_harmless() {
        init(Some("warn"));
        init(Some("debug"));
    }
}
