mod check;
mod configure;
mod init;
mod launch;
mod show;

pub use check::check_command;
pub use configure::configure_command;
pub use init::init_command;
pub use launch::{launch_command, run_command};
pub use show::show_command;

use crate::cli::{Cli, Commands, TargetArgs};
use color_eyre::Result;
use dpu_core::params::parse_assignment_tokens;
use dpu_protocol::dpu_models::ParameterMap;

/// Execute the parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    let root = cli.root;
    match cli.command {
        Commands::Init { force } => init_command(&root, force).await,
        Commands::Launch { name, output } => launch_command(&root, &name, output).await,
        Commands::Run { target, output } => run_command(&root, &target, output).await,
        Commands::Configure { name, target } => configure_command(&root, &name, &target).await,
        Commands::Check {
            exec_path,
            descriptor,
        } => check_command(exec_path.as_deref(), descriptor.as_deref()),
        Commands::Show { name } => show_command(&root, &name).await,
    }
}

/// Parses the repeated `-p key=value` flags.
fn parameter_overrides(target: &TargetArgs) -> Result<ParameterMap> {
    Ok(parse_assignment_tokens(&target.params)?)
}
