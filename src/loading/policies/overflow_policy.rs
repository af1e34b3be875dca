use crate::loading::domain::ProgressReading;
use std::str::FromStr;

/// OverflowPolicy decides how a percentage above 100 is shown
///
/// Loaders sometimes report more bytes than the announced total (for
/// example when the size hint is a compressed length). `PassThrough`
/// shows the raw value, `Clamp` caps it at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    #[default]
    PassThrough,
    Clamp,
}

impl OverflowPolicy {
    pub fn apply(&self, reading: ProgressReading) -> ProgressReading {
        match (self, reading) {
            (OverflowPolicy::Clamp, ProgressReading::Percent(percent)) => {
                ProgressReading::Percent(percent.min(100))
            }
            _ => reading,
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pass-through" | "passthrough" | "raw" => Ok(OverflowPolicy::PassThrough),
            "clamp" => Ok(OverflowPolicy::Clamp),
            _ => Err(format!(
                "Invalid overflow policy: {}. Please specify 'pass-through' or 'clamp'",
                s
            )),
        }
    }
}
