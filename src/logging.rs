use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr subscriber
///
/// `RUST_LOG` wins over `default_filter`. Stdout stays reserved for
/// resolved references and listings.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // Ignore a second initialisation, e.g. from tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
