//! Launch command building and process launchers.

pub mod arguments;
pub mod base;
pub mod command;
pub mod mock;

pub use arguments::{build_arguments, launch_with};
pub use base::{LaunchContext, LaunchError, ProcessLauncher};
pub use command::CommandLauncher;
pub use mock::MockLauncher;
