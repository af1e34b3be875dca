/// A single progress notification from a loader.
///
/// `total` is optional: a loader that does not know the size of the
/// resource passes `None` (or `Some(0)`), in which case only the raw byte
/// count can be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Bytes transferred so far
    pub current: u64,
    /// Expected total bytes, if known
    pub total: Option<u64>,
}

impl ProgressEvent {
    pub fn new(current: u64, total: Option<u64>) -> Self {
        Self { current, total }
    }

    /// Returns the total only when it can be used as a divisor
    pub fn known_total(&self) -> Option<u64> {
        self.total.filter(|&total| total > 0)
    }

    /// Classifies the event into what can be shown to the user
    pub fn reading(&self) -> ProgressReading {
        match self.known_total() {
            Some(total) => ProgressReading::Percent(round_percent(self.current, total)),
            None => ProgressReading::Bytes(self.current),
        }
    }
}

/// What a progress event can tell the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressReading {
    /// Total unknown: raw bytes transferred
    Bytes(u64),
    /// Total known: rounded percentage, may exceed 100
    Percent(u64),
}

/// `round(current / total * 100)` with halves rounded up.
///
/// Computed exactly in integer arithmetic: `floor((200 * current + total) / (2 * total))`.
/// `total` must be non-zero.
fn round_percent(current: u64, total: u64) -> u64 {
    let numerator = 200 * current as u128 + total as u128;
    let denominator = 2 * total as u128;
    u64::try_from(numerator / denominator).unwrap_or(u64::MAX)
}
