//! Workspace settings models for `.dpu/config.toml`.
//!
//! These settings describe how the launched process is started; they are
//! shared by every launch configuration in the workspace.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

/// Represents workspace settings from `.dpu/config.toml`.
///
/// # Example
///
/// ```toml
/// # .dpu/config.toml
/// program = "java"
/// program-args = ["-jar", "knowing-launcher.jar"]
/// wait = true
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceSettings {
    /// Executable started for every launch.
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed after the VM arguments on the command line.
    #[serde(default)]
    pub program_args: Vec<String>,

    /// Wait for the launched process to exit and report its status.
    #[serde(default)]
    pub wait: bool,
}

fn default_program() -> String {
    "java".to_string()
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            program_args: Vec::new(),
            wait: false,
        }
    }
}
