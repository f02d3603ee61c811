//! Workspace initialization.
//!
//! `dpu init` scaffolds a workspace from embedded templates:
//! - Workspace settings (`.dpu/config.toml`)
//! - A sample launch configuration (`.dpu/launches/demo.toml`)
//! - A sample project with one descriptor (`demo/dpus/demo.dpu`)
//!
//! # Example
//!
//! ```no_run
//! use dpu_core::init::{generate_workspace, InitOptions};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//! };
//!
//! let written = generate_workspace(options).await?;
//! println!("Created {} files", written.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

pub use error::{InitError, InitResult};
pub use generator::{generate_workspace, InitOptions};
pub use templates::{get_template, list_templates};
