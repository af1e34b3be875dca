/// Default read size per progress notification (64 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Largest accepted read size (16 MiB)
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// LoadRequest - Request DTO for the load resource use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    /// Bytes read between two progress notifications
    pub chunk_size: usize,
}

impl LoadRequest {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }
}

impl Default for LoadRequest {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}
