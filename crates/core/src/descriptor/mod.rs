//! Descriptor location and loading.
//!
//! This module resolves a `(project, relative path)` pair to a descriptor
//! file and loads it into a [`DataProcessingUnit`](dpu_protocol::DataProcessingUnit)
//! the caller owns outright.

pub mod error;
pub mod loader;
pub mod store;

pub use error::{DescriptorError, DescriptorResult};
pub use loader::load_descriptor;
pub use store::{parse_descriptor, DescriptorRef, DescriptorStore, WorkspaceStore};
