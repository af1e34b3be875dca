use crate::shared::error::LoadStatusError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Returns
/// The file size in bytes
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadStatusError::ResourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadStatusError::ResourceOpenError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        }
    })?;

    if metadata.is_symlink() {
        return Err(LoadStatusError::SecurityError {
            path: path.to_path_buf(),
            reason: "Resource is a symbolic link".to_string(),
            hint: "Pass the path of the target file instead".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(LoadStatusError::ResourceOpenError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}
