use std::time::{Duration, Instant};

/// Default label for elapsed-time reports
pub const DEFAULT_TIMER_LABEL: &str = "initializer";

/// Scoped elapsed-time measurement started by `on_start`.
///
/// The timer is handed back to `on_complete`, which reports
/// `<label>: <millis>ms`. Dropping it without completion reports nothing.
#[derive(Debug, Clone)]
pub struct LoadTimer {
    label: String,
    started_at: Instant,
}

impl LoadTimer {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            started_at: Instant::now(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Stops the timer and returns the measured report
    pub fn finish(self) -> ElapsedReport {
        ElapsedReport {
            elapsed: self.elapsed(),
            label: self.label,
        }
    }
}

/// Result of a finished `LoadTimer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElapsedReport {
    pub label: String,
    pub elapsed: Duration,
}

impl std::fmt::Display for ElapsedReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.3}ms",
            self.label,
            self.elapsed.as_secs_f64() * 1000.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_keeps_label() {
        let timer = LoadTimer::start("assets");
        assert_eq!(timer.label(), "assets");
    }

    #[test]
    fn test_finish_reports_label() {
        let report = LoadTimer::start(DEFAULT_TIMER_LABEL).finish();
        assert_eq!(report.label, "initializer");
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let timer = LoadTimer::start("x");
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.elapsed() >= first);
    }

    #[test]
    fn test_report_display() {
        let report = ElapsedReport {
            label: "initializer".to_string(),
            elapsed: Duration::from_micros(12_345),
        };
        assert_eq!(report.to_string(), "initializer: 12.345ms");
    }
}
