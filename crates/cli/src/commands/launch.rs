use super::parameter_overrides;
use crate::cli::{OutputArgs, TargetArgs};
use crate::display;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use dpu_core::config::{launches_dir, load_config};
use dpu_core::descriptor::WorkspaceStore;
use dpu_core::engine::LaunchPipeline;
use dpu_core::launch::{CommandLauncher, MockLauncher};
use dpu_protocol::config_models::WorkspaceSettings;
use dpu_protocol::launch_models::{
    LaunchConfiguration, DPU_EXECUTION_PATH, DPU_PARAMETERS, DPU_PATH, DPU_PROJECT,
    VM_ARGUMENTS,
};
use std::path::Path;
use std::sync::Arc;

/// Launches the stored configuration `name`.
pub async fn launch_command(root: &Path, name: &str, output: OutputArgs) -> Result<()> {
    let config = load_config(root)
        .await
        .wrap_err("Failed to load .dpu configuration")?;
    let launch = config.find_launch(name).ok_or_else(|| {
        eyre!(
            "No launch configuration named '{name}' in {}",
            launches_dir(root).display()
        )
    })?;

    execute(root, &config.settings, launch, output).await
}

/// Launches an ad-hoc configuration built from the command line.
pub async fn run_command(root: &Path, target: &TargetArgs, output: OutputArgs) -> Result<()> {
    let config = load_config(root)
        .await
        .wrap_err("Failed to load .dpu configuration")?;

    let mut launch = LaunchConfiguration::new("run");
    launch.set_text(DPU_PROJECT, target.project.as_str());
    launch.set_text(DPU_PATH, target.path.as_str());
    if let Some(exec_path) = &target.exec_path {
        launch.set_text(DPU_EXECUTION_PATH, exec_path.as_str());
    }
    if let Some(vm_args) = &target.vm_args {
        launch.set_text(VM_ARGUMENTS, vm_args.as_str());
    }
    launch.set_map(DPU_PARAMETERS, parameter_overrides(target)?);

    execute(root, &config.settings, &launch, output).await
}

async fn execute(
    root: &Path,
    settings: &WorkspaceSettings,
    launch: &LaunchConfiguration,
    output: OutputArgs,
) -> Result<()> {
    let store = Arc::new(WorkspaceStore::new(root));
    let command = CommandLauncher::from_settings(settings);

    if output.dry_run {
        let recorder = MockLauncher::success();
        let report = LaunchPipeline::new(store, Arc::new(recorder.clone()))
            .run(launch)
            .await?;

        if !output.json {
            for received in recorder.launched() {
                let args = command.command_args(&received)?;
                display::print_command(&settings.program, &args);
            }
        }
        return display::print_report(&report, output.json, true);
    }

    let report = LaunchPipeline::new(store, Arc::new(command)).run(launch).await?;
    display::print_report(&report, output.json, false)
}
