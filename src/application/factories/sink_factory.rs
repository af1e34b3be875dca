use crate::adapters::outbound::console::StderrStatusSink;
use crate::adapters::outbound::logging::TracingStatusSink;
use crate::application::dto::SinkKind;
use crate::ports::outbound::StatusSink;

/// Factory for creating status sinks
///
/// Selects the infrastructure adapter behind the StatusSink port from the
/// application-level `SinkKind`.
pub struct SinkFactory;

impl SinkFactory {
    /// Creates a sink for the given kind
    ///
    /// # Arguments
    /// * `kind` - Where messages should go
    /// * `color` - Whether the stderr sink may use ANSI colors
    pub fn create(kind: SinkKind, color: bool) -> Box<dyn StatusSink> {
        match kind {
            SinkKind::Stderr => Box::new(StderrStatusSink::new().with_color(color)),
            SinkKind::Tracing => Box::new(TracingStatusSink::new()),
        }
    }
}
