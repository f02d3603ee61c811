//! DPU launch pipeline.
//!
//! The LaunchPipeline runs one launch as a strict sequence:
//! locate → load → validate → merge → materialize → write → launch.
//! Validation failures abort before anything is written or started. A failed
//! configuration write is logged and the launch goes ahead anyway; the
//! launched process notices the missing file itself.

pub mod error;
pub mod request;

pub use error::{PipelineError, PipelineResult};
pub use request::{home_dir, resolve_request};

use crate::descriptor::{load_descriptor, DescriptorRef, DescriptorStore};
use crate::environment::validate_execution_path;
use crate::launch::{build_arguments, launch_with, LaunchContext, ProcessLauncher};
use crate::materialize::{config_file_path, materialize, render, write_configuration, GeneratedConfiguration};
use crate::params::merge_overrides;
use chrono::Utc;
use dpu_protocol::dpu_models::{DataProcessingUnit, Parameter};
use dpu_protocol::launch_models::{LaunchConfiguration, LaunchRequest};
use dpu_protocol::report_models::LaunchReport;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Everything a launch needs, computed before `application.conf` is written.
///
/// Building one reads the descriptor and creates, then removes, a temporary
/// file in the execution directory to check that it is writable.
#[derive(Debug, Clone)]
pub struct PreparedLaunch {
    pub request: LaunchRequest,
    pub descriptor: DescriptorRef,
    /// Private copy of the descriptor.
    pub dpu: DataProcessingUnit,
    /// Descriptor parameters with overrides applied.
    pub parameters: Vec<Parameter>,
    pub configuration: GeneratedConfiguration,
    /// `<execution path>/application.conf`
    pub config_path: PathBuf,
}

impl PreparedLaunch {
    /// The VM argument string the launcher will receive.
    pub fn arguments(&self) -> String {
        build_arguments(&self.request.vm_arguments, &self.config_path)
    }
}

/// The launch pipeline.
///
/// Descriptor storage and process launching are injected so each can be
/// replaced independently.
pub struct LaunchPipeline {
    store: Arc<dyn DescriptorStore>,
    launcher: Arc<dyn ProcessLauncher>,
}

impl LaunchPipeline {
    pub fn new(store: Arc<dyn DescriptorStore>, launcher: Arc<dyn ProcessLauncher>) -> Self {
        Self { store, launcher }
    }

    /// Runs every step up to, but not including, writing the configuration.
    ///
    /// The execution path check writes and removes a temporary file; the
    /// directory is otherwise left as it was.
    ///
    /// # Errors
    ///
    /// - `InvalidAttribute` if the launch configuration is malformed
    /// - `Descriptor` if the DPU cannot be located or loaded
    /// - `Validation` if the execution path is unusable
    pub fn prepare(&self, configuration: &LaunchConfiguration) -> PipelineResult<PreparedLaunch> {
        let request = resolve_request(configuration)?;

        let descriptor = self.store.locate(
            request.project_name.as_deref(),
            request.relative_path.as_deref(),
        )?;
        let dpu = load_descriptor(self.store.as_ref(), &descriptor)?;

        validate_execution_path(&request.execution_path)?;

        let uri = descriptor.uri()?;
        let parameters = merge_overrides(&dpu.parameters, &request.parameter_overrides);
        let generated = materialize(
            &dpu.name,
            &uri,
            &request.execution_path,
            &parameters,
        );
        let config_path = config_file_path(&request.execution_path);

        tracing::debug!(
            dpu = %dpu.name,
            parameters = parameters.len(),
            config = %config_path.display(),
            "Prepared launch"
        );

        Ok(PreparedLaunch {
            request,
            descriptor,
            dpu,
            parameters,
            configuration: generated,
            config_path,
        })
    }

    /// Prepares, writes `application.conf` and launches.
    ///
    /// # Errors
    ///
    /// Everything [`prepare`](Self::prepare) reports, plus `Launch` when the
    /// launcher fails. A failed configuration write is not an error; it is
    /// logged and reflected in [`LaunchReport::config_written`].
    pub async fn run(&self, configuration: &LaunchConfiguration) -> PipelineResult<LaunchReport> {
        let id = Uuid::new_v4();
        let started_at = Utc::now();

        let prepared = self.prepare(configuration)?;

        let text = render(&prepared.configuration);
        let config_written = match write_configuration(&text, &prepared.config_path) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Could not write application.conf, launching anyway");
                false
            }
        };

        let arguments = prepared.arguments();
        let context = LaunchContext {
            dpu_name: prepared.dpu.name.clone(),
            execution_path: prepared.request.execution_path.clone(),
            config_path: prepared.config_path.clone(),
        };
        launch_with(self.launcher.as_ref(), configuration, &arguments, &context).await?;

        Ok(LaunchReport {
            id,
            started_at,
            dpu_name: prepared.dpu.name,
            config_path: prepared.config_path,
            config_written,
            vm_arguments: arguments,
        })
    }
}
