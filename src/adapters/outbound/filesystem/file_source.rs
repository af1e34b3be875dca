use crate::ports::outbound::{OpenedResource, ResourceSource};
use crate::shared::error::LoadStatusError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs::File;
use std::path::PathBuf;

/// FileResourceSource adapter streaming a regular file
///
/// The size hint comes from the file metadata, so progress is reported
/// as a percentage. Symbolic links are rejected.
pub struct FileResourceSource {
    path: PathBuf,
}

impl FileResourceSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ResourceSource for FileResourceSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<OpenedResource> {
        let size = validate_regular_file(&self.path)?;
        let file = File::open(&self.path).map_err(|e| LoadStatusError::ResourceOpenError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(OpenedResource::new(Box::new(file), Some(size)))
    }
}
