//! Tracing initialization and subscriber setup.

use super::{tracer, SERVICE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `trace_level` is not configured.
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber with file-based OTLP export.
///
/// The pipeline is `tracing` macros → `EnvFilter` → OpenTelemetry layer →
/// [`tracer::create_tracer_provider`] → `jokebox-otlp.json`.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Does nothing if the directory cannot be created or the directive is
///   invalid (observability is optional)
/// - Only the first call installs a subscriber
///
/// # Example
///
/// ```rust,no_run
/// use jokebox::observability::init_tracing;
/// use jokebox::Config;
///
/// let config = Config {
///     trace_level: Some("jokebox=debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let Ok(filter) = EnvFilter::try_new(level) else {
        return;
    };

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(
        crate::infrastructure::trace_file_path(),
        resource,
        SERVICE_NAME,
    );
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
