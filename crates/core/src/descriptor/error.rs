//! Error types for locating and loading descriptors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or loading a DPU descriptor.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// The project name or the descriptor path was not configured.
    #[error("No {0} configured for the DPU")]
    MissingIdentifier(&'static str),

    /// No descriptor file exists at the project-relative path.
    #[error("DPU doesn't exist: {relative_path} in project {project} ({path})")]
    NotFound {
        project: String,
        relative_path: String,
        path: PathBuf,
    },

    /// Failed to read the descriptor file from disk.
    #[error("Failed to read DPU at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a YAML descriptor.
    #[error("Failed to parse YAML DPU at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Failed to parse a TOML descriptor.
    #[error("Failed to parse TOML DPU at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The descriptor parsed but violates the model's constraints.
    #[error("Invalid DPU at {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

impl DescriptorError {
    /// True for the "descriptor or project missing" category.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MissingIdentifier(_) | Self::NotFound { .. })
    }
}

/// Type alias for Result with DescriptorError.
pub type DescriptorResult<T> = Result<T, DescriptorError>;
