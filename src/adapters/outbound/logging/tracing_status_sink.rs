use crate::loading::domain::StatusLevel;
use crate::ports::outbound::StatusSink;

/// Tracing target used for every status event
pub const STATUS_TARGET: &str = "load_status";

/// TracingStatusSink adapter forwarding status messages as tracing events
///
/// Info messages become `INFO` events and failures `WARN` events on the
/// `load_status` target, so they can be filtered with `RUST_LOG`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingStatusSink;

impl TracingStatusSink {
    pub fn new() -> Self {
        Self
    }
}

impl StatusSink for TracingStatusSink {
    fn emit(&self, level: StatusLevel, message: &str) {
        match level {
            StatusLevel::Info => tracing::info!(target: STATUS_TARGET, "{}", message),
            StatusLevel::Warn => tracing::warn!(target: STATUS_TARGET, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_subscriber_does_not_panic() {
        let sink = TracingStatusSink::new();
        sink.emit(StatusLevel::Info, "Loading...");
        sink.emit(StatusLevel::Warn, "Loading... failed! ()");
    }

    #[test]
    fn test_emit_with_scoped_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            TracingStatusSink::new().emit(StatusLevel::Info, "Loading... 25 %");
        });
    }
}
