//! Error types for hdrgen
//!
//! This module provides unified error handling across the tool,
//! covering input validation, directory resolution, and file IO.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for hdrgen
#[derive(Debug, Error)]
pub enum GenError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// The user never supplied a file name
    #[error("No file name given after {attempts} attempts")]
    EmptyName { attempts: u32 },

    // ========================================================================
    // Directory Errors
    // ========================================================================
    /// The requested output directory cannot be used
    #[error("Failed to change to directory '{path}': {message}")]
    Directory { path: PathBuf, message: String },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },
}

impl GenError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        GenError::Validation(msg.into())
    }

    /// Create a directory error
    pub fn directory(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        GenError::Directory {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        GenError::FileWrite {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, GenError::Validation(_) | GenError::EmptyName { .. })
    }

    /// Check if this error is a directory error
    pub fn is_directory(&self) -> bool {
        matches!(self, GenError::Directory { .. })
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, GenError::Io(_) | GenError::FileWrite { .. })
    }
}

/// Result type alias using GenError
pub type GenResult<T> = Result<T, GenError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = GenError::validation("File name is required");
        assert!(err.is_validation());
        assert!(!err.is_io());
        assert_eq!(err.to_string(), "Validation error: File name is required");
    }

    #[test]
    fn test_empty_name_error() {
        let err = GenError::EmptyName { attempts: 10 };
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "No file name given after 10 attempts");
    }

    #[test]
    fn test_directory_error() {
        let err = GenError::directory("/no/such/dir", "No such file or directory");
        assert!(err.is_directory());
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Failed to change to directory '/no/such/dir': No such file or directory"
        );
    }

    #[test]
    fn test_file_write_error() {
        let err = GenError::file_write("include/api.h", "Permission denied");
        assert!(err.is_io());
        assert_eq!(
            err.to_string(),
            "Failed to write file 'include/api.h': Permission denied"
        );
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GenError = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_directory());
    }
}
