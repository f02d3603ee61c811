use colored::Colorize;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use dpu_core::config::load_config;
use dpu_core::descriptor::WorkspaceStore;
use dpu_core::engine::LaunchPipeline;
use dpu_core::launch::MockLauncher;
use dpu_core::materialize::render;
use std::path::Path;
use std::sync::Arc;

/// Prints the configuration and VM arguments a launch of `name` would use.
pub async fn show_command(root: &Path, name: &str) -> Result<()> {
    let config = load_config(root)
        .await
        .wrap_err("Failed to load .dpu configuration")?;
    let launch = config
        .find_launch(name)
        .ok_or_else(|| eyre!("No launch configuration named '{name}'"))?;

    let pipeline = LaunchPipeline::new(
        Arc::new(WorkspaceStore::new(root)),
        Arc::new(MockLauncher::success()),
    );
    let prepared = pipeline.prepare(launch)?;

    println!("{}", format!("# {}", prepared.config_path.display()).dimmed());
    print!("{}", render(&prepared.configuration));
    println!(
        "{}",
        format!("# VM arguments: {}", prepared.arguments()).dimmed()
    );

    Ok(())
}
