//! # dpu-protocol
//!
//! Core data models shared by the DPU launcher crates.
//!
//! This crate defines all shared data structures used for:
//! - Descriptor files (a named Data Processing Unit with ordered parameters)
//! - Launch configurations stored under `.dpu/launches/`
//! - Workspace settings from `.dpu/config.toml`
//! - Reports returned after a launch
//!
//! ## Modules
//!
//! - [`dpu_models`]: Descriptor model (`DataProcessingUnit`, `Parameter`)
//! - [`config_models`]: Workspace settings from config.toml
//! - [`launch_models`]: Launch configurations, attribute keys and requests
//! - [`report_models`]: Outcome of a launch
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, ts-rs, uuid and chrono
//! - TypeScript generation: All types derive `TS` for client compatibility
//! - Independent compilation: No dependencies on other dpu-launcher crates

pub mod config_models;
pub mod dpu_models;
pub mod launch_models;
pub mod report_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use dpu_models::*;
pub use launch_models::*;
pub use report_models::*;
