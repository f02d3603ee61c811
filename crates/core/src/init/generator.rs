//! Directory structure and file generation for `dpu init`.

use super::error::{InitError, InitResult};
use super::templates::{get_template, list_templates};
use crate::config::DPU_DIR;
use std::fs;
use std::path::{Path, PathBuf};

/// Template prefix whose files are written into the `.dpu/` directory.
const DPU_TEMPLATE_PREFIX: &str = "dpu/";

/// Options for initializing a workspace.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Workspace root where `.dpu/` and the sample project are created.
    pub target_dir: PathBuf,

    /// Overwrite an existing `.dpu/` directory.
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
        }
    }
}

/// Generate a workspace with a sample launch configuration.
///
/// This function creates the following structure:
/// ```text
/// .dpu/
/// ├── config.toml
/// └── launches/
///     └── demo.toml
/// demo/
/// └── dpus/
///     └── demo.dpu
/// ```
///
/// # Returns
/// The paths of all written files, or an `InitError` if:
/// - The `.dpu` directory already exists (without force flag)
/// - A template file cannot be found
/// - File system operations fail
pub async fn generate_workspace(options: InitOptions) -> InitResult<Vec<PathBuf>> {
    let dpu_dir = options.target_dir.join(DPU_DIR);

    if dpu_dir.exists() && !options.force {
        return Err(InitError::DirectoryExists(dpu_dir));
    }

    let mut written = Vec::new();
    for template_path in list_templates("") {
        let target = target_path(&options.target_dir, &template_path);
        write_template_file(&template_path, &target)?;
        written.push(target);
    }

    tracing::info!(
        root = %options.target_dir.display(),
        files = written.len(),
        "Initialized DPU workspace"
    );

    Ok(written)
}

/// Maps a template path to its location in the workspace.
fn target_path(root: &Path, template_path: &str) -> PathBuf {
    match template_path.strip_prefix(DPU_TEMPLATE_PREFIX) {
        Some(rest) => root.join(DPU_DIR).join(rest),
        None => root.join(template_path),
    }
}

fn write_template_file(template_path: &str, target: &Path) -> InitResult<()> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    // Ensure parent directory exists
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| InitError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(target, content).map_err(|source| InitError::FileWrite {
        path: target.to_path_buf(),
        source,
    })?;

    Ok(())
}
