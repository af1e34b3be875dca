use crate::shared::Result;
use std::io::Read;

/// An opened resource ready to be streamed
pub struct OpenedResource {
    /// Byte stream of the resource
    pub reader: Box<dyn Read + Send>,
    /// Expected size in bytes, if the source knows it
    pub size_hint: Option<u64>,
}

impl OpenedResource {
    pub fn new(reader: Box<dyn Read + Send>, size_hint: Option<u64>) -> Self {
        Self { reader, size_hint }
    }
}

/// ResourceSource port for opening the resource a loader streams
///
/// This port abstracts where bytes come from (a file, stdin, ...).
pub trait ResourceSource {
    /// Human-readable description of the resource (e.g., a path)
    fn describe(&self) -> String;

    /// Opens the resource for reading
    ///
    /// # Errors
    /// Returns an error if the resource cannot be opened
    fn open(&self) -> Result<OpenedResource>;
}

impl<R: ResourceSource + ?Sized> ResourceSource for Box<R> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn open(&self) -> Result<OpenedResource> {
        (**self).open()
    }
}
