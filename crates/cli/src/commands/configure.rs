use super::parameter_overrides;
use crate::cli::TargetArgs;
use crate::display;
use colored::Colorize;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use dpu_core::config::{apply_form, load_config, save_launch, LaunchForm};
use dpu_core::descriptor::{load_descriptor, DescriptorStore, WorkspaceStore};
use dpu_core::environment::check_execution_path;
use dpu_protocol::launch_models::LaunchConfiguration;
use std::path::Path;

/// Creates or updates the stored launch configuration `name`.
///
/// The DPU must exist; its parameters decide which overrides are kept. An
/// unusable execution path is only reported, since it may be created later.
pub async fn configure_command(root: &Path, name: &str, target: &TargetArgs) -> Result<()> {
    let config = load_config(root)
        .await
        .wrap_err("Failed to load .dpu configuration")?;
    let mut launch = config
        .find_launch(name)
        .cloned()
        .unwrap_or_else(|| LaunchConfiguration::new(name));

    let store = WorkspaceStore::new(root);
    let reference = store.locate(Some(target.project.as_str()), Some(target.path.as_str()))?;
    let dpu = load_descriptor(&store, &reference)?;

    let form = LaunchForm {
        project: target.project.clone(),
        relative_path: target.path.clone(),
        execution_path: target.exec_path.clone(),
        vm_arguments: target.vm_args.clone(),
        overrides: parameter_overrides(target)?,
    };

    if let Some(message) = form.execution_path.as_deref().and_then(check_execution_path) {
        display::print_warning(&message);
    }

    apply_form(&dpu, &mut launch, &form);
    let path = save_launch(root, &launch)?;

    println!("{} {}", "Saved".green().bold(), path.display());
    Ok(())
}
