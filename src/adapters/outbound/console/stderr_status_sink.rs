use crate::loading::domain::StatusLevel;
use crate::ports::outbound::StatusSink;
use owo_colors::OwoColorize;

/// StderrStatusSink adapter for writing status messages to stderr
///
/// This adapter implements the StatusSink port, writing one line per
/// message to stderr so it doesn't interfere with stdout output.
/// Warnings are highlighted in yellow when color is enabled.
pub struct StderrStatusSink {
    color: bool,
}

impl StderrStatusSink {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Renders the line exactly as it will appear on stderr
    pub fn render(&self, level: StatusLevel, message: &str) -> String {
        match (level, self.color) {
            (StatusLevel::Warn, true) => format!("{}", message.yellow()),
            _ => message.to_string(),
        }
    }
}

impl Default for StderrStatusSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for StderrStatusSink {
    fn emit(&self, level: StatusLevel, message: &str) {
        eprintln!("{}", self.render(level, message));
    }
}
