//! Base launcher trait and supporting types.

use async_trait::async_trait;
use dpu_protocol::launch_models::LaunchConfiguration;
use std::path::PathBuf;
use thiserror::Error;

/// Context passed to a launcher alongside the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchContext {
    /// Name of the DPU being launched.
    pub dpu_name: String,

    /// Working directory of the launched process.
    pub execution_path: PathBuf,

    /// Absolute path of the generated configuration file.
    pub config_path: PathBuf,
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Launcher not available: {0}")]
    NotAvailable(String),
    #[error("Failed to spawn command '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("Command '{program}' exited with {status}")]
    Exit {
        program: String,
        status: std::process::ExitStatus,
    },
    #[error("Cannot split VM arguments '{arguments}': {source}")]
    InvalidArguments {
        arguments: String,
        source: shell_words::ParseError,
    },
    #[error("Launch failed: {0}")]
    Delegate(String),
}

/// The external mechanism that starts the DPU process.
///
/// Launchers read everything they need from the configuration they are
/// given; in particular the VM arguments already carry the configuration
/// file flag.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    async fn check_availability(&self) -> bool;
    async fn launch(
        &self,
        configuration: &LaunchConfiguration,
        context: &LaunchContext,
    ) -> Result<(), LaunchError>;
}
