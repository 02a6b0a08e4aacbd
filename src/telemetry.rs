use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

static INIT: OnceLock<()> = OnceLock::new();

/// Default directives when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,veriface=info";

/// Installs a global fmt subscriber once per process.
///
/// The SDK only emits `tracing` events; applications that already install a
/// subscriber do not need to call this.
pub fn init_tracing() {
    init_tracing_with_filter(DEFAULT_FILTER);
}

pub fn init_tracing_with_filter(default_directives: &str) {
    let _ = INIT.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(env_filter)
            .try_init();
    });
}
