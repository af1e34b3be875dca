use crate::ports::outbound::{OpenedResource, ResourceSource};
use crate::shared::Result;

/// StdinResourceSource adapter streaming standard input
///
/// Stdin has no known length, so progress is reported in raw bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinResourceSource;

impl StdinResourceSource {
    pub fn new() -> Self {
        Self
    }
}

impl ResourceSource for StdinResourceSource {
    fn describe(&self) -> String {
        "<stdin>".to_string()
    }

    fn open(&self) -> Result<OpenedResource> {
        Ok(OpenedResource::new(Box::new(std::io::stdin()), None))
    }
}
