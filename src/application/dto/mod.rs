/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod load_request;
mod load_response;
mod sink_kind;

pub use load_request::{LoadRequest, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
pub use load_response::LoadResponse;
pub use sink_kind::SinkKind;
