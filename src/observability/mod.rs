//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `~/.local/share/zellij/jokebox/jokebox-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10 MiB with 3 numbered backups
//! - **OTLP Format**: One OpenTelemetry Protocol JSON document per line
//!
//! # Configuration
//!
//! The `trace_level` plugin option is an `EnvFilter` directive such as
//! `debug` or `jokebox=trace`. Default: `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider and file span exporter
//! - [`span_formatter`]: OTLP JSON serialization
//! - [`file_writer`]: Rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{RotatingFileWriter, RotationPolicy};
pub use init::init_tracing;

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "jokebox";
