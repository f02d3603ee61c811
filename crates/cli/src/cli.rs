use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Launch Data Processing Units with a generated application.conf
#[derive(Parser, Debug)]
#[command(name = "dpu")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Workspace root containing `.dpu/` and the projects
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create `.dpu/` with a sample project and launch configuration
    Init {
        /// Overwrite an existing `.dpu/` directory
        #[arg(short, long)]
        force: bool,
    },
    /// Launch a stored launch configuration
    Launch {
        /// Name of the launch configuration under `.dpu/launches/`
        name: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Launch a DPU without storing a launch configuration
    Run {
        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Create or update a stored launch configuration
    Configure {
        /// Name of the launch configuration to write
        name: String,

        #[command(flatten)]
        target: TargetArgs,
    },
    /// Check an execution path and a DPU file without launching
    Check {
        /// Execution directory to check
        #[arg(long = "exec-path")]
        exec_path: Option<String>,

        /// DPU file to check
        #[arg(long)]
        descriptor: Option<String>,
    },
    /// Print the configuration a launch would write, without writing it
    Show {
        /// Name of the launch configuration under `.dpu/launches/`
        name: String,
    },
}

/// Which DPU to launch and how.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Project containing the DPU
    #[arg(long)]
    pub project: String,

    /// DPU file, relative to the project
    #[arg(long)]
    pub path: String,

    /// Directory for application.conf and the launched process
    #[arg(long = "exec-path")]
    pub exec_path: Option<String>,

    /// VM arguments passed before the generated property
    #[arg(long = "vm-args", allow_hyphen_values = true)]
    pub vm_args: Option<String>,

    /// Parameter override as key=value (repeatable)
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Write application.conf but do not start the process
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// Print the launch report as JSON
    #[arg(long)]
    pub json: bool,
}
