//! Applying edited values to a launch configuration.

use crate::params::{mapping_from_parameters, merge_overrides};
use dpu_protocol::dpu_models::{DataProcessingUnit, ParameterMap};
use dpu_protocol::launch_models::{
    LaunchConfiguration, DPU_EXECUTION_PATH, DPU_PARAMETERS, DPU_PATH, DPU_PROJECT,
    VM_ARGUMENTS,
};

/// Values entered for a launch configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchForm {
    pub project: String,
    pub relative_path: String,
    /// Left unchanged when `None`.
    pub execution_path: Option<String>,
    /// Left unchanged when `None`.
    pub vm_arguments: Option<String>,
    /// Parameter values to change.
    pub overrides: ParameterMap,
}

/// Stores `form` into `configuration`.
///
/// The stored parameter map always mirrors the descriptor's parameters: the
/// previously stored values and the form's overrides are layered onto them,
/// and keys the descriptor does not declare are dropped.
pub fn apply_form(
    descriptor: &DataProcessingUnit,
    configuration: &mut LaunchConfiguration,
    form: &LaunchForm,
) {
    configuration.set_text(DPU_PROJECT, form.project.as_str());
    configuration.set_text(DPU_PATH, form.relative_path.as_str());

    if let Some(execution_path) = &form.execution_path {
        configuration.set_text(DPU_EXECUTION_PATH, execution_path.as_str());
    }
    if let Some(vm_arguments) = &form.vm_arguments {
        configuration.set_text(VM_ARGUMENTS, vm_arguments.as_str());
    }

    let mut overrides = configuration
        .map(DPU_PARAMETERS)
        .cloned()
        .unwrap_or_default();
    overrides.extend(form.overrides.iter().map(|(k, v)| (k.clone(), v.clone())));

    let synchronized = merge_overrides(&descriptor.parameters, &overrides);
    configuration.set_map(DPU_PARAMETERS, mapping_from_parameters(Some(&synchronized)));
}
