//! Resolution of launch configuration attributes into a [`LaunchRequest`].

use crate::engine::error::{PipelineError, PipelineResult};
use dpu_protocol::dpu_models::ParameterMap;
use dpu_protocol::launch_models::{
    AttributeValue, LaunchConfiguration, LaunchRequest, DPU_EXECUTION_PATH, DPU_PARAMETERS,
    DPU_PATH, DPU_PROJECT, VM_ARGUMENTS,
};
use std::path::PathBuf;

/// Reads the launcher's attributes from `configuration`.
///
/// Absent attributes fall back to their defaults: no project or path, the
/// user's home directory as execution path, no VM arguments and no
/// overrides. The execution path is made absolute against the current
/// directory.
///
/// # Errors
///
/// `InvalidAttribute` when an attribute is present with the wrong type.
pub fn resolve_request(configuration: &LaunchConfiguration) -> PipelineResult<LaunchRequest> {
    let project_name = text_attribute(configuration, DPU_PROJECT)?.map(str::to_string);
    let relative_path = text_attribute(configuration, DPU_PATH)?.map(str::to_string);
    let vm_arguments = text_attribute(configuration, VM_ARGUMENTS)?
        .unwrap_or_default()
        .to_string();
    let parameter_overrides = map_attribute(configuration, DPU_PARAMETERS)?
        .cloned()
        .unwrap_or_default();

    let execution_path = match text_attribute(configuration, DPU_EXECUTION_PATH)? {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => home_dir(),
    };
    let execution_path = std::path::absolute(&execution_path).unwrap_or(execution_path);

    Ok(LaunchRequest {
        project_name,
        relative_path,
        execution_path,
        vm_arguments,
        parameter_overrides,
    })
}

/// The user's home directory, or the current directory if none is known.
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn text_attribute<'a>(
    configuration: &'a LaunchConfiguration,
    key: &str,
) -> PipelineResult<Option<&'a str>> {
    match configuration.attribute(key) {
        None => Ok(None),
        Some(AttributeValue::Text(value)) => Ok(Some(value)),
        Some(AttributeValue::Map(_)) => Err(PipelineError::InvalidAttribute {
            key: key.to_string(),
            expected: "a string",
        }),
    }
}

fn map_attribute<'a>(
    configuration: &'a LaunchConfiguration,
    key: &str,
) -> PipelineResult<Option<&'a ParameterMap>> {
    match configuration.attribute(key) {
        None => Ok(None),
        Some(AttributeValue::Map(value)) => Ok(Some(value)),
        Some(AttributeValue::Text(_)) => Err(PipelineError::InvalidAttribute {
            key: key.to_string(),
            expected: "a table of strings",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_configuration() {
        let mut config = LaunchConfiguration::new("demo");
        config.set_text(DPU_PROJECT, "proj");
        config.set_text(DPU_PATH, "dpus/demo.dpu");
        config.set_text(DPU_EXECUTION_PATH, "/tmp/run");
        config.set_text(VM_ARGUMENTS, "-Xmx512m");
        config.set_map(
            DPU_PARAMETERS,
            [("threshold".to_string(), "0.9".to_string())].into(),
        );

        let request = resolve_request(&config).expect("Should resolve request");

        assert_eq!(request.project_name.as_deref(), Some("proj"));
        assert_eq!(request.relative_path.as_deref(), Some("dpus/demo.dpu"));
        assert_eq!(request.execution_path, PathBuf::from("/tmp/run"));
        assert_eq!(request.vm_arguments, "-Xmx512m");
        assert_eq!(
            request.parameter_overrides.get("threshold").map(String::as_str),
            Some("0.9")
        );
    }

    #[test]
    fn test_resolve_defaults() {
        let request =
            resolve_request(&LaunchConfiguration::new("empty")).expect("Should resolve request");

        assert!(request.project_name.is_none());
        assert!(request.relative_path.is_none());
        assert!(request.vm_arguments.is_empty());
        assert!(request.parameter_overrides.is_empty());
        assert!(request.execution_path.is_absolute());
        assert_eq!(
            request.execution_path,
            std::path::absolute(home_dir()).expect("absolute home")
        );
    }

    #[test]
    fn test_resolve_empty_execution_path_uses_home() {
        let mut config = LaunchConfiguration::new("demo");
        config.set_text(DPU_EXECUTION_PATH, "");

        let request = resolve_request(&config).expect("Should resolve request");
        assert_eq!(
            request.execution_path,
            std::path::absolute(home_dir()).expect("absolute home")
        );
    }

    #[test]
    fn test_home_dir_is_platform_home() {
        let home = home_dir();

        assert!(!home.as_os_str().is_empty());
        match dirs::home_dir() {
            Some(expected) => assert_eq!(home, expected),
            None => assert_eq!(home, PathBuf::from(".")),
        }
    }

    #[test]
    fn test_resolve_wrong_attribute_types() {
        let mut config = LaunchConfiguration::new("demo");
        config.set_map(DPU_PROJECT, ParameterMap::new());
        let err = resolve_request(&config).unwrap_err();
        assert!(
            matches!(err, PipelineError::InvalidAttribute { ref key, .. } if key == DPU_PROJECT)
        );

        let mut config = LaunchConfiguration::new("demo");
        config.set_text(DPU_PARAMETERS, "threshold=0.9");
        let err = resolve_request(&config).unwrap_err();
        assert!(err.to_string().contains("knowing.dpu.parameters"));
    }
}
