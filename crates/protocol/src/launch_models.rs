//! Launch configuration models for `.dpu/launches/*.toml`.
//!
//! A launch configuration is a named bag of typed attributes, the same shape
//! an IDE launch-configuration store persists. The attribute keys below are
//! the only ones the launcher reads or writes.

use crate::dpu_models::ParameterMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use ts_rs::TS;

/// Name of the project containing the descriptor.
pub const DPU_PROJECT: &str = "knowing.dpu.project";

/// Descriptor location, relative to the project.
pub const DPU_PATH: &str = "knowing.dpu.path";

/// Directory the configuration file is written to and the process runs in.
pub const DPU_EXECUTION_PATH: &str = "knowing.dpu.executionpath";

/// Parameter overrides, stored as a string map.
pub const DPU_PARAMETERS: &str = "knowing.dpu.parameters";

/// Base VM argument string.
pub const VM_ARGUMENTS: &str = "knowing.dpu.vmarguments";

/// System property the launched process reads the configuration path from.
pub const APPLICATION_CONF_PROPERTY: &str = "application.conf.path";

/// File name of the generated configuration.
pub const APPLICATION_CONF_FILE: &str = "application.conf";

/// A typed launch configuration attribute.
///
/// Serialized untagged so that a TOML file reads naturally: strings stay
/// strings and maps become sub-tables.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Map(ParameterMap),
}

/// A named launch configuration.
///
/// # Example
///
/// ```toml
/// name = "demo"
///
/// [attributes]
/// "knowing.dpu.project" = "demo"
/// "knowing.dpu.path" = "dpus/demo.dpu"
/// "knowing.dpu.executionpath" = "/tmp/run"
/// "knowing.dpu.vmarguments" = "-Xmx512m"
///
/// [attributes."knowing.dpu.parameters"]
/// threshold = "0.7"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct LaunchConfiguration {
    /// Unique name; also the file stem under `.dpu/launches/`. Taken from
    /// the file name when omitted.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl LaunchConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Returns the attribute as text, or `None` if it is absent or a map.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.attributes.get(key) {
            Some(AttributeValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the attribute as a map, or `None` if it is absent or text.
    pub fn map(&self, key: &str) -> Option<&ParameterMap> {
        match self.attributes.get(key) {
            Some(AttributeValue::Map(value)) => Some(value),
            _ => None,
        }
    }

    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes
            .insert(key.into(), AttributeValue::Text(value.into()));
    }

    pub fn set_map(&mut self, key: impl Into<String>, value: ParameterMap) {
        self.attributes.insert(key.into(), AttributeValue::Map(value));
    }

    /// Returns an independent copy that can be modified before handing it to
    /// a launcher. The receiver is left untouched.
    pub fn working_copy(&self) -> Self {
        self.clone()
    }
}

/// The launcher's primary input, resolved from a [`LaunchConfiguration`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct LaunchRequest {
    pub project_name: Option<String>,

    /// Descriptor location, relative to the project.
    pub relative_path: Option<String>,

    /// Target directory; the user's home directory when not configured.
    #[ts(type = "string")]
    pub execution_path: PathBuf,

    /// Base argument string to augment. May be empty.
    pub vm_arguments: String,

    /// Replaces descriptor values for matching keys only.
    pub parameter_overrides: ParameterMap,
}
