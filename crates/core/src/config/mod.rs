//! Launch configuration store.
//!
//! This module loads workspace settings and named launch configurations
//! from the `.dpu/` directory, and applies edits to launch configurations.

pub mod error;
pub mod form;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use form::{apply_form, LaunchForm};
pub use loader::{launches_dir, load_config, save_launch, DPU_DIR};
pub use models::AppConfig;
