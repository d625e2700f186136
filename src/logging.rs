#[cfg(feature = "ssr")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[cfg(feature = "ssr")]
const DEFAULT_FILTER: &str = "portfolio=info,tower_http=debug";

/// Server logging. `RUST_LOG` overrides the default filter.
#[cfg(feature = "ssr")]
pub fn init_server_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

/// Browser logging goes to the devtools console.
#[cfg(feature = "hydrate")]
pub fn init_client_logging() {
    // a second call during hot reload would fail; the first logger stays
    _ = console_log::init_with_level(log::Level::Info);
}
