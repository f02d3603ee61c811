//! Descriptor models for DPU files (`*.dpu`, `*.yaml`, `*.toml`).
//!
//! A Data Processing Unit is a named unit of work with an ordered list of
//! string parameters. The launcher only ever reads descriptors; editing them
//! is left to whatever tool produced the file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Flat string-keyed view of a parameter list.
///
/// Sorted so that converting a mapping back into a list yields the same order
/// on every call.
pub type ParameterMap = BTreeMap<String, String>;

/// A single key/value parameter of a DPU.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Parameter {
    /// Parameter name. Must not be empty.
    pub key: String,

    /// Parameter value. May be empty.
    #[serde(default)]
    pub value: String,
}

impl Parameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Represents a Data Processing Unit descriptor.
///
/// # Example
///
/// ```yaml
/// name: Demo
/// description: Clusters the input with a fixed threshold
/// parameters:
///   - key: threshold
///     value: "0.5"
///   - key: input
///     value: data/points.csv
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct DataProcessingUnit {
    /// Human-readable identifier, written to `dpu.name`.
    pub name: String,

    /// Optional free text. Not part of the generated configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered parameters. Keys are not required to be unique; later
    /// duplicates win when the list is flattened.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl DataProcessingUnit {
    /// Returns the value of the last parameter named `key`.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .rev()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}
