//! Telemetry helpers for applications embedding `chart-interact`.
//!
//! Interaction coordinators emit `tracing` spans/events for hover, drag and
//! selection transitions. Consumers can either call `init_default_tracing`
//! or wire their own `tracing` subscriber and filters.

/// Environment variable read before `RUST_LOG` when building the default filter.
pub const LOG_ENV_VAR: &str = "CHART_INTERACT_LOG";

/// Directive applied when neither environment variable is set.
pub const DEFAULT_DIRECTIVE: &str = "chart_interact=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or the host already installed
/// a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
