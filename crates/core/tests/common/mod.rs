//! Common test utilities for the integration tests.
//!
//! This module provides shared functionality across all integration tests:
//! - Test workspaces with a project and descriptors
//! - Launch configuration builders

pub mod fixtures;

pub use fixtures::*;
