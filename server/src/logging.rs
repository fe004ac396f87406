use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter() -> String {
    format!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME"))
}

pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
