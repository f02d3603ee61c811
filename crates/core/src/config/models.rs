//! Configuration models that aggregate all settings.

use dpu_protocol::config_models::WorkspaceSettings;
use dpu_protocol::launch_models::LaunchConfiguration;

/// Unified workspace configuration loaded from the `.dpu/` directory.
///
/// This structure aggregates all configuration sources:
/// - `config.toml`: Workspace settings
/// - `launches/*.toml`: Launch configurations, sorted by name
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
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Workspace settings from `config.toml`.
    pub settings: WorkspaceSettings,

    /// All launch configurations loaded from `launches/*.toml`.
    pub launches: Vec<LaunchConfiguration>,
}

impl AppConfig {
    /// Looks up a launch configuration by name.
    pub fn find_launch(&self, name: &str) -> Option<&LaunchConfiguration> {
        self.launches.iter().find(|l| l.name == name)
    }
}
