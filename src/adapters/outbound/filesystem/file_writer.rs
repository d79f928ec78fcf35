use crate::ports::outbound::OutputPresenter;
use crate::shared::error::AppError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the license page to a file
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(AppError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        validate_not_symlink(&self.output_path)?;

        fs::write(&self.output_path, content).map_err(|e| AppError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        tracing::debug!(path = %self.output_path.display(), bytes = content.len(), "wrote license page");
        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the license page to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("LICENSES.md");

        let writer = FileSystemWriter::new(output_path.clone());
        let result = writer.present("- a: [MIT](https://x)\n");

        assert!(result.is_ok());
        let written_content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(written_content, "- a: [MIT](https://x)\n");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/LICENSES.md");

        let writer = FileSystemWriter::new(output_path);
        let result = writer.present("content");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.md");
        fs::write(&target, "original").unwrap();
        let link = temp_dir.path().join("LICENSES.md");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemWriter::new(link).present("overwritten");

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn test_stdout_presenter_success() {
        let presenter = StdoutPresenter::new();
        let result = presenter.present("test output\n");
        assert!(result.is_ok());
    }
}
