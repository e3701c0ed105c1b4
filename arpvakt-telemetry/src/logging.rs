//! Structured logging with tracing.

use opentelemetry::KeyValue;
use tracing::info_span;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Initializes the fmt subscriber. `ansi` follows the no-color toggle;
    /// the filter defaults to `info` unless `RUST_LOG` overrides it.
    pub fn init(ansi: bool) {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(ansi)
            .init()
    }

    /// Emits one structured security-event record.
    pub fn log_event(event_type: &str, metadata: Vec<KeyValue>) {
        let span = info_span!("security_event", event_type = event_type);
        let _guard = span.enter();
        tracing::info!(metadata = ?metadata, "Security event occurred");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_logging() {
        EventLogger::log_event("test", vec![KeyValue::new("key", "value")]);
        assert!(logs_contain("Security event occurred"));
    }
}
