//! Error types for the launch pipeline.

use crate::descriptor::DescriptorError;
use crate::environment::ValidationError;
use crate::launch::LaunchError;
use thiserror::Error;

/// Fatal failures of a launch. Each aborts the pipeline at the step where it
/// occurs.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Descriptor missing (not found) or unreadable (load error).
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// The execution path is not a writable directory.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The launcher refused or failed to start the process.
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// A launch configuration attribute has the wrong type.
    #[error("Launch configuration attribute '{key}' must be {expected}")]
    InvalidAttribute { key: String, expected: &'static str },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
