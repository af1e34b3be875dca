use std::time::Duration;

/// LoadResponse - Result of a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResponse {
    /// What was loaded (e.g., the file path)
    pub resource: String,
    /// Total bytes read
    pub bytes_loaded: u64,
    /// Size announced by the source, if any
    pub size_hint: Option<u64>,
    /// Number of progress notifications sent
    pub progress_events: usize,
    /// Wall time between start and completion
    pub elapsed: Duration,
}
