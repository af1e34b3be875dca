/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (console, log subscriber, file system).
pub mod resource_source;
pub mod status_sink;

pub use resource_source::{OpenedResource, ResourceSource};
pub use status_sink::StatusSink;
