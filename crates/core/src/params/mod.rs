//! Parameter codec.
//!
//! Converts between the ordered parameter list of a descriptor and the flat
//! string map stored in launch configurations, parses `key=value` command
//! tokens, and layers overrides onto descriptor parameters.

use dpu_protocol::dpu_models::{Parameter, ParameterMap};
use std::collections::HashMap;
use thiserror::Error;

/// Errors produced while decoding parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// A token did not have the form `key=value` with exactly one `=`.
    #[error("Malformed parameter '{token}': expected key=value")]
    Malformed { token: String },
}

pub type ParameterResult<T> = Result<T, ParameterError>;

/// Builds a parameter list from a mapping.
///
/// An absent or empty mapping yields an empty list. Entries come out in the
/// mapping's key order, so repeated calls on equal maps agree.
pub fn parameters_from_mapping(mapping: Option<&ParameterMap>) -> Vec<Parameter> {
    match mapping {
        Some(mapping) => mapping
            .iter()
            .map(|(key, value)| Parameter::new(key.as_str(), value.as_str()))
            .collect(),
        None => Vec::new(),
    }
}

/// Flattens a parameter list into a mapping. Later duplicates win.
pub fn mapping_from_parameters(parameters: Option<&[Parameter]>) -> ParameterMap {
    parameters
        .unwrap_or_default()
        .iter()
        .map(|p| (p.key.clone(), p.value.clone()))
        .collect()
}

/// Parses `key=value` tokens into a mapping.
///
/// The first malformed token aborts the whole parse. A token is malformed
/// when it has no `=`, more than one `=`, or an empty key.
///
/// # Example
///
/// ```
/// use dpu_core::params::parse_assignment_tokens;
///
/// let map = parse_assignment_tokens(["a=1", "b="]).unwrap();
/// assert_eq!(map.get("a").map(String::as_str), Some("1"));
/// assert_eq!(map.get("b").map(String::as_str), Some(""));
/// assert!(parse_assignment_tokens(["a"]).is_err());
/// ```
pub fn parse_assignment_tokens<I, S>(tokens: I) -> ParameterResult<ParameterMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = ParameterMap::new();
    for token in tokens {
        let token = token.as_ref();
        let (key, value) = parse_assignment(token)?;
        result.insert(key.to_string(), value.to_string());
    }
    Ok(result)
}

/// Splits a single `key=value` token.
pub fn parse_assignment(token: &str) -> ParameterResult<(&str, &str)> {
    let malformed = || ParameterError::Malformed {
        token: token.to_string(),
    };

    let (key, value) = token.split_once('=').ok_or_else(malformed)?;
    if key.is_empty() || value.contains('=') {
        return Err(malformed());
    }
    Ok((key, value))
}

/// Layers `overrides` onto descriptor parameters.
///
/// The result has one entry per distinct descriptor key, at the position the
/// key first appears. Its value is the override when one exists, otherwise
/// the last descriptor value for that key. Override keys the descriptor does
/// not declare are dropped.
pub fn merge_overrides(parameters: &[Parameter], overrides: &ParameterMap) -> Vec<Parameter> {
    let mut merged: Vec<Parameter> = Vec::with_capacity(parameters.len());
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for p in parameters {
        match positions.get(p.key.as_str()) {
            Some(&index) => merged[index].value = p.value.clone(),
            None => {
                positions.insert(p.key.as_str(), merged.len());
                merged.push(p.clone());
            }
        }
    }

    for p in &mut merged {
        if let Some(value) = overrides.get(&p.key) {
            p.value = value.clone();
        }
    }

    for key in overrides.keys() {
        if !positions.contains_key(key.as_str()) {
            tracing::warn!(key = %key, "Ignoring override for parameter the DPU does not declare");
        }
    }

    merged
}
