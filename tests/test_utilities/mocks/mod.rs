/// Mock implementations for testing
mod mock_resource_source;
mod mock_status_sink;

#[allow(unused_imports)]
pub use mock_resource_source::{FailingResourceSource, MockResourceSource};
pub use mock_status_sink::MockStatusSink;
