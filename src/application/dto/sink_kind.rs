/// Status sink selection
///
/// Chooses where status messages go. Both the CLI (inbound adapter) and
/// the sink factory need to understand this, so it lives in the
/// application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    /// Plain lines on stderr (default)
    #[default]
    Stderr,
    /// Events on the installed tracing subscriber
    Tracing,
}

impl std::str::FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stderr" | "console" => Ok(SinkKind::Stderr),
            "tracing" | "log" => Ok(SinkKind::Tracing),
            _ => Err(format!(
                "Invalid sink: {}. Please specify 'stderr' or 'tracing'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkKind::Stderr => write!(f, "stderr"),
            SinkKind::Tracing => write!(f, "tracing"),
        }
    }
}
