//! Command line augmentation and launch delegation.

use crate::launch::base::{LaunchContext, LaunchError, ProcessLauncher};
use dpu_protocol::launch_models::{LaunchConfiguration, APPLICATION_CONF_PROPERTY, VM_ARGUMENTS};
use std::path::Path;

/// Appends `-Dapplication.conf.path=<config_path>` to `base`.
///
/// The base arguments are passed through unchanged. A blank base yields the
/// flag on its own. The flag is shell-quoted when the path contains
/// whitespace, quotes or backslashes, so that it survives splitting.
///
/// # Example
///
/// ```
/// use dpu_core::launch::build_arguments;
/// use std::path::Path;
///
/// assert_eq!(
///     build_arguments("-Xmx512m", Path::new("/tmp/run/application.conf")),
///     "-Xmx512m -Dapplication.conf.path=/tmp/run/application.conf"
/// );
/// ```
pub fn build_arguments(base: &str, config_path: &Path) -> String {
    let flag = format!("-D{APPLICATION_CONF_PROPERTY}={}", config_path.display());
    let flag = if needs_quoting(&flag) {
        shell_words::quote(&flag).into_owned()
    } else {
        flag
    };
    if base.trim().is_empty() {
        flag
    } else {
        format!("{base} {flag}")
    }
}

fn needs_quoting(arg: &str) -> bool {
    arg.chars()
        .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\'))
}

/// Hands a working copy of `configuration`, carrying `arguments` as its VM
/// arguments, to `launcher`.
///
/// `configuration` itself is never modified. Errors from the launcher are
/// returned unchanged.
pub async fn launch_with(
    launcher: &dyn ProcessLauncher,
    configuration: &LaunchConfiguration,
    arguments: &str,
    context: &LaunchContext,
) -> Result<(), LaunchError> {
    if !launcher.check_availability().await {
        return Err(LaunchError::NotAvailable(format!(
            "cannot launch '{}'",
            configuration.name
        )));
    }

    let mut copy = configuration.working_copy();
    copy.set_text(VM_ARGUMENTS, arguments);

    tracing::info!(
        configuration = %configuration.name,
        dpu = %context.dpu_name,
        arguments,
        "Launching DPU"
    );
    launcher.launch(&copy, context).await
}
