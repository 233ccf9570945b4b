use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directives used when `RUST_LOG` is unset. sqlx logs every statement at info.
const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Initialize JSON tracing on stdout. Call once at service startup.
///
/// Event fields are flattened into the top-level object and the current span
/// (the request span opened by `TraceLayer`) is attached to every line.
/// Later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false),
        )
        .try_init();
}
