use colored::Colorize;
use color_eyre::Result;
use dpu_core::init::{generate_workspace, InitOptions};
use std::path::Path;

pub async fn init_command(root: &Path, force: bool) -> Result<()> {
    let written = generate_workspace(InitOptions {
        target_dir: root.to_path_buf(),
        force,
    })
    .await?;

    for path in &written {
        let shown = path.strip_prefix(root).unwrap_or(path);
        println!("  {} {}", "created".green(), shown.display());
    }
    println!(
        "{} Try `dpu launch demo --dry-run`.",
        "Workspace initialized.".green().bold()
    );

    Ok(())
}
