mod tracing_status_sink;

pub use tracing_status_sink::{TracingStatusSink, STATUS_TARGET};
