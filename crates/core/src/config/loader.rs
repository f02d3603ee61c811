//! Configuration file loader for the `.dpu/` directory structure.
//!
//! This module provides functionality to load and save the files under
//! `.dpu/`, including:
//! - `config.toml`: Workspace settings
//! - `launches/*.toml`: Launch configurations

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use dpu_protocol::config_models::WorkspaceSettings;
use dpu_protocol::launch_models::LaunchConfiguration;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the workspace configuration directory.
pub const DPU_DIR: &str = ".dpu";

/// Directory holding launch configurations under `root`.
pub fn launches_dir(root: &Path) -> PathBuf {
    root.join(DPU_DIR).join("launches")
}

/// Loads all configuration from the `.dpu/` directory.
///
/// # Arguments
///
/// * `root` - Workspace root containing the `.dpu/` folder
///
/// # Returns
///
/// An `AppConfig` with the workspace settings and every launch
/// configuration. Missing files or directories yield defaults rather than
/// errors.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - Files exist but cannot be read
/// - Files have invalid TOML syntax
/// - Two launch configurations share a name
///
/// # Example
///
/// ```rust,no_run
/// use dpu_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} launch configurations", config.launches.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let dpu_dir = root.join(DPU_DIR);

    // If .dpu doesn't exist, return default config
    if !dpu_dir.exists() {
        return Ok(AppConfig::default());
    }

    let settings = load_settings(&dpu_dir)?;
    let launches = load_launches(&launches_dir(root))?;

    tracing::debug!(
        root = %root.display(),
        launches = launches.len(),
        program = %settings.program,
        "Loaded workspace configuration"
    );

    Ok(AppConfig { settings, launches })
}

/// Loads workspace settings from `config.toml`.
fn load_settings(dpu_dir: &Path) -> ConfigResult<WorkspaceSettings> {
    let config_path = dpu_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(WorkspaceSettings::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path,
        source,
    })
}

/// Loads all launch configurations from `launches/*.toml`.
fn load_launches(launches_dir: &Path) -> ConfigResult<Vec<LaunchConfiguration>> {
    if !launches_dir.exists() {
        return Ok(Vec::new());
    }

    let mut launches: Vec<LaunchConfiguration> = Vec::new();

    for entry in WalkDir::new(launches_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
    {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: launches_dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();

        // Only process .toml files
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut launch: LaunchConfiguration =
            toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
                path: path.to_path_buf(),
                source,
            })?;

        if launch.name.is_empty() {
            launch.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        if launches.iter().any(|l| l.name == launch.name) {
            return Err(ConfigError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("duplicate launch configuration name '{}'", launch.name),
            });
        }

        launches.push(launch);
    }

    launches.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(launches)
}

/// Writes `launch` to `.dpu/launches/<name>.toml`, replacing any previous
/// version.
///
/// # Errors
///
/// `InvalidConfig` if the name cannot be used as a file name, or an I/O or
/// serialization error.
pub fn save_launch(root: &Path, launch: &LaunchConfiguration) -> ConfigResult<PathBuf> {
    let dir = launches_dir(root);

    if !is_valid_name(&launch.name) {
        return Err(ConfigError::InvalidConfig {
            path: dir,
            reason: format!("'{}' is not a valid launch configuration name", launch.name),
        });
    }

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirectoryCreate {
        path: dir.clone(),
        source,
    })?;

    let content = toml::to_string(launch).map_err(|source| ConfigError::TomlSerialize {
        name: launch.name.clone(),
        source,
    })?;

    let path = dir.join(format!("{}.toml", launch.name));
    std::fs::write(&path, content).map_err(|source| ConfigError::FileWrite {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(name = %launch.name, path = %path.display(), "Saved launch configuration");
    Ok(path)
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
