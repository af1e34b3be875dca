use super::{ElapsedReport, ProgressReading};
use std::fmt;

const PREFIX: &str = "Loading...";

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
}

/// Every message the status reporter can emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Started,
    Progress(ProgressReading),
    Done,
    Elapsed(ElapsedReport),
    Succeeded,
    /// Carries the rendered representation of the failure
    Failed(String),
}

impl StatusMessage {
    pub fn level(&self) -> StatusLevel {
        match self {
            StatusMessage::Failed(_) => StatusLevel::Warn,
            _ => StatusLevel::Info,
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Started => write!(f, "{}", PREFIX),
            StatusMessage::Progress(ProgressReading::Bytes(bytes)) => {
                write!(f, "{} {} bytes", PREFIX, bytes)
            }
            StatusMessage::Progress(ProgressReading::Percent(percent)) => {
                write!(f, "{} {} %", PREFIX, percent)
            }
            StatusMessage::Done => write!(f, "{} done!", PREFIX),
            StatusMessage::Elapsed(report) => write!(f, "{}", report),
            StatusMessage::Succeeded => write!(f, "{} successful!", PREFIX),
            StatusMessage::Failed(detail) => write!(f, "{} failed! {}", PREFIX, detail),
        }
    }
}
