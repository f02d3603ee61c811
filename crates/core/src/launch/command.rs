//! Subprocess launcher.
//!
//! Starts the DPU runtime as a child process:
//!
//! ```text
//! <program> <vm arguments...> <program args...>
//! ```
//!
//! with the execution path as working directory.

use crate::launch::base::{LaunchContext, LaunchError, ProcessLauncher};
use async_trait::async_trait;
use dpu_protocol::config_models::WorkspaceSettings;
use dpu_protocol::launch_models::{LaunchConfiguration, VM_ARGUMENTS};
use std::process::Stdio;
use tokio::process::Command;

/// Launches DPUs by spawning a local command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLauncher {
    program: String,
    program_args: Vec<String>,
    wait: bool,
}

impl CommandLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            program_args: Vec::new(),
            wait: false,
        }
    }

    pub fn from_settings(settings: &WorkspaceSettings) -> Self {
        Self {
            program: settings.program.clone(),
            program_args: settings.program_args.clone(),
            wait: settings.wait,
        }
    }

    /// Set arguments placed after the VM arguments.
    pub fn with_program_args(mut self, args: Vec<String>) -> Self {
        self.program_args = args;
        self
    }

    /// Wait for the process to exit and fail on a non-zero status.
    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    /// Full argument list for `configuration`, without the program itself.
    ///
    /// The VM argument string is split with shell quoting rules, so quoted
    /// arguments keep their whitespace.
    ///
    /// # Errors
    ///
    /// `InvalidArguments` if the VM arguments have an unterminated quote or
    /// a trailing escape.
    pub fn command_args(
        &self,
        configuration: &LaunchConfiguration,
    ) -> Result<Vec<String>, LaunchError> {
        let arguments = configuration.text(VM_ARGUMENTS).unwrap_or_default();
        let mut args =
            shell_words::split(arguments).map_err(|source| LaunchError::InvalidArguments {
                arguments: arguments.to_string(),
                source,
            })?;
        args.extend(self.program_args.iter().cloned());
        Ok(args)
    }
}

#[async_trait]
impl ProcessLauncher for CommandLauncher {
    async fn check_availability(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    async fn launch(
        &self,
        configuration: &LaunchConfiguration,
        context: &LaunchContext,
    ) -> Result<(), LaunchError> {
        let args = self.command_args(configuration)?;

        let mut cmd = Command::new(&self.program);
        cmd.args(&args);
        cmd.current_dir(&context.execution_path);
        cmd.stdin(Stdio::null());

        let mut child = cmd.spawn().map_err(|source| LaunchError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        tracing::info!(program = %self.program, pid = ?child.id(), "Started DPU process");

        if !self.wait {
            // Supervision of the process is up to the caller
            return Ok(());
        }

        let status = child.wait().await.map_err(|source| LaunchError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        if !status.success() {
            return Err(LaunchError::Exit {
                program: self.program.clone(),
                status,
            });
        }
        tracing::debug!(program = %self.program, %status, "DPU process finished");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::arguments::build_arguments;
    use std::path::{Path, PathBuf};

    fn context(dir: &Path) -> LaunchContext {
        LaunchContext {
            dpu_name: "Demo".to_string(),
            execution_path: dir.to_path_buf(),
            config_path: dir.join("application.conf"),
        }
    }

    fn configuration(vm_args: &str) -> LaunchConfiguration {
        let mut config = LaunchConfiguration::new("demo");
        config.set_text(VM_ARGUMENTS, vm_args);
        config
    }

    #[test]
    fn test_command_args_order() {
        let launcher = CommandLauncher::new("java")
            .with_program_args(vec!["-jar".to_string(), "launcher.jar".to_string()]);
        let args = launcher
            .command_args(&configuration(
                "-Xmx512m  -Dapplication.conf.path=/tmp/run/application.conf",
            ))
            .expect("Should split arguments");

        assert_eq!(
            args,
            vec![
                "-Xmx512m",
                "-Dapplication.conf.path=/tmp/run/application.conf",
                "-jar",
                "launcher.jar"
            ]
        );
    }

    #[test]
    fn test_command_args_without_vm_arguments() {
        let launcher = CommandLauncher::new("java");
        assert!(launcher
            .command_args(&LaunchConfiguration::new("demo"))
            .expect("Should split arguments")
            .is_empty());
    }

    #[test]
    fn test_command_args_keep_quoted_config_path_whole() {
        let vm_args = build_arguments(
            "-Xmx512m -Dx=\"a b\"",
            Path::new("/home/John Doe/application.conf"),
        );
        let args = CommandLauncher::new("java")
            .command_args(&configuration(&vm_args))
            .expect("Should split arguments");

        assert_eq!(
            args,
            vec![
                "-Xmx512m",
                "-Dx=a b",
                "-Dapplication.conf.path=/home/John Doe/application.conf"
            ]
        );
    }

    #[tokio::test]
    async fn test_launch_rejects_unterminated_quote() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let launcher = CommandLauncher::new("nonexistent-command-xyz");

        let err = launcher
            .launch(&configuration("-Dx=\"open"), &context(dir.path()))
            .await
            .unwrap_err();
        assert!(matches!(err, LaunchError::InvalidArguments { .. }));
    }

    #[test]
    fn test_from_settings() {
        let settings = WorkspaceSettings {
            program: "sh".to_string(),
            program_args: vec!["run.sh".to_string()],
            wait: true,
        };
        let launcher = CommandLauncher::from_settings(&settings);
        assert_eq!(
            launcher,
            CommandLauncher::new("sh")
                .with_program_args(vec!["run.sh".to_string()])
                .with_wait(true)
        );
    }

    #[tokio::test]
    async fn test_launch_invalid_command() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let launcher = CommandLauncher::new("nonexistent-command-xyz");

        assert!(!launcher.check_availability().await);

        let err = launcher
            .launch(&configuration(""), &context(dir.path()))
            .await
            .unwrap_err();
        if let LaunchError::Spawn { program, .. } = err {
            assert_eq!(program, "nonexistent-command-xyz");
        } else {
            panic!("Expected Spawn error");
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_runs_in_execution_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let launcher = CommandLauncher::new("sh")
            .with_program_args(vec!["-c".to_string(), "pwd > cwd.txt".to_string()])
            .with_wait(true);

        launcher
            .launch(&configuration(""), &context(dir.path()))
            .await
            .expect("sh should run");

        let cwd = std::fs::read_to_string(dir.path().join("cwd.txt")).expect("cwd.txt written");
        let expected: PathBuf = dir.path().canonicalize().expect("canonical temp dir");
        assert_eq!(PathBuf::from(cwd.trim()).canonicalize().ok(), Some(expected));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_reports_failed_exit() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let launcher = CommandLauncher::new("sh")
            .with_program_args(vec!["-c".to_string(), "exit 3".to_string()])
            .with_wait(true);

        let err = launcher
            .launch(&configuration(""), &context(dir.path()))
            .await
            .unwrap_err();
        assert!(matches!(err, LaunchError::Exit { .. }));
    }
}
