//! # dpu-core
//!
//! Launch pipeline for Data Processing Units.
//!
//! This crate provides:
//! - Parameter conversion between lists, string maps and `key=value` tokens
//! - Descriptor lookup and loading from a workspace
//! - Execution directory validation
//! - Generation of the `application.conf` handed to the launched process
//! - VM argument assembly and process launching
//! - Launch configuration storage under `.dpu/` and workspace scaffolding
//!
//! ## Modules
//!
//! - [`params`]: Parameter codec
//! - [`descriptor`]: Descriptor store and loader
//! - [`environment`]: Execution path validation
//! - [`materialize`]: Configuration generation and writing
//! - [`launch`]: Launch argument builder and launchers
//! - [`engine`]: The launch pipeline
//! - [`config`]: Workspace settings and launch configurations
//! - [`init`]: Workspace initialization

pub mod config;
pub mod descriptor;
pub mod engine;
pub mod environment;
pub mod init;
pub mod launch;
pub mod materialize;
pub mod params;
