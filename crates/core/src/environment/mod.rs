//! Execution environment validation.
//!
//! There are two flavors. [`validate_execution_path`] runs at launch time
//! and refuses anything that is not an existing, writable directory.
//! [`check_execution_path`] and [`check_descriptor_path`] run while a launch
//! configuration is being edited; they return a message for the user and
//! tolerate values that are momentarily invalid.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Launch-time execution path failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Execution path doesn't exist: {0}")]
    DoesNotExist(PathBuf),

    #[error("Execution path is a file, not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Execution path is not writable: {0}")]
    NotWritable(PathBuf),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that `path` is an existing directory the process can write to.
///
/// Writability is tested by creating (and immediately removing) a temporary
/// file in the directory, which also catches read-only mounts and ACLs that
/// permission bits do not show. This is the only write this function makes.
pub fn validate_execution_path(path: &Path) -> ValidationResult<()> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ValidationError::DoesNotExist(path.to_path_buf()));
        }
        Err(_) => return Err(ValidationError::NotWritable(path.to_path_buf())),
    };

    if !metadata.is_dir() {
        return Err(ValidationError::NotADirectory(path.to_path_buf()));
    }

    tempfile::Builder::new()
        .prefix(".dpu-write-check")
        .tempfile_in(path)
        .map_err(|_| ValidationError::NotWritable(path.to_path_buf()))?;

    Ok(())
}

/// Edit-time check of an execution path.
///
/// Returns the message to show, or `None` when there is nothing to report.
/// An empty value is not reported; the user simply has not entered one yet.
pub fn check_execution_path(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }

    let path = Path::new(path);
    if !path.exists() {
        return Some("Execution path doesn't exist.".to_string());
    }
    if !path.is_dir() {
        return Some("Execution path must be a directory.".to_string());
    }
    None
}

/// Edit-time check of a descriptor file path.
pub fn check_descriptor_path(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }

    let path = Path::new(path);
    if !path.exists() {
        return Some("DPU doesn't exist.".to_string());
    }
    if path.is_dir() {
        return Some("DPU must be a file.".to_string());
    }
    None
}
