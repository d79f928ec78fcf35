use crate::shared::error::AppError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a package list we are willing to load (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that an existing path is not a symbolic link
///
/// Missing paths are accepted; the caller creates them.
///
/// # Errors
/// Returns an error if the path is a symbolic link or its metadata cannot be read
pub fn validate_not_symlink(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(AppError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Failed to read file metadata: {}", e),
            }
            .into())
        }
    };

    if metadata.is_symlink() {
        return Err(AppError::SecurityError {
            path: path.to_path_buf(),
            reason: "Path is a symbolic link".to_string(),
            hint: "Point the option at a regular file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path exists and is a regular file of acceptable size
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than [`MAX_FILE_SIZE`]
pub fn validate_regular_file(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AppError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        }
    })?;

    if metadata.is_symlink() {
        return Err(AppError::SecurityError {
            path: path.to_path_buf(),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Pass the path of the file itself".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(AppError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(AppError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
            hint: "Split the package list into smaller files".to_string(),
        }
        .into());
    }
    Ok(())
}
