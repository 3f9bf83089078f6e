//! Tracing initialisation for binaries and tests that embed the client.

use tracing_subscriber::{
    fmt::format::Format,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

const DEFAULT_FILTER: &str = "roadwatch=info,roadwatch_api_client=info,roadwatch_processing=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install a compact console subscriber as the global default. Fails if one
/// is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );
    tracing_subscriber::registry()
        .with(env_filter())
        .with(console_fmt)
        .try_init()
}

/// Subscriber for test binaries: output goes through the test harness capture
/// and repeated calls are no-ops.
pub fn init_test_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init()
        .ok();
}
