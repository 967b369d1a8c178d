//! Subscriber setup for the roster service.
//!
//! Every event is one JSON object per line with a wall-clock timestamp and no
//! module target, so request traces and write warnings can be grepped by field
//! (`operation`, `n`, `ok`). `RUST_LOG` wins over the default directive.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

fn filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the JSON subscriber. Later calls leave the first one in place.
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
