//! Configuration materializer.
//!
//! Builds the `dpu.*` configuration handed to the launched process and
//! writes it to `<execution path>/application.conf`. The file is a flat
//! list of fully qualified keys with quoted values:
//!
//! ```text
//! dpu.name = "Demo"
//! dpu.uri = "file:///proj/demo.dpu"
//! dpu.executionpath = "/tmp/run"
//! dpu.parameters.threshold = "0.5"
//! ```

use dpu_protocol::dpu_models::Parameter;
use dpu_protocol::launch_models::APPLICATION_CONF_FILE;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const KEY_NAME: &str = "dpu.name";
pub const KEY_URI: &str = "dpu.uri";
pub const KEY_EXECUTION_PATH: &str = "dpu.executionpath";
pub const PARAMETERS_PREFIX: &str = "dpu.parameters.";

/// Failure writing the configuration artifact.
#[derive(Error, Debug)]
#[error("Failed to write configuration to {path}: {source}")]
pub struct ConfigWriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Ordered key/value entries of a generated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedConfiguration {
    entries: Vec<(String, String)>,
}

impl GeneratedConfiguration {
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets `key`, replacing an existing entry in place.
    fn set(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

/// Builds the configuration for one launch.
///
/// `parameters` should already have overrides merged in; a key that still
/// appears twice keeps its first position and its last value.
pub fn materialize(
    name: &str,
    uri: &str,
    execution_path: &Path,
    parameters: &[Parameter],
) -> GeneratedConfiguration {
    let mut config = GeneratedConfiguration::default();
    config.set(KEY_NAME.to_string(), name.to_string());
    config.set(KEY_URI.to_string(), uri.to_string());
    config.set(
        KEY_EXECUTION_PATH.to_string(),
        execution_path.to_string_lossy().into_owned(),
    );
    for p in parameters {
        config.set(format!("{PARAMETERS_PREFIX}{}", p.key), p.value.clone());
    }
    config
}

/// Renders one `key = "value"` line per entry, in insertion order.
///
/// Values are quoted as JSON strings, which HOCON readers accept verbatim.
/// Keys keep their dotted path; a segment that is not a plain unquoted
/// token is JSON-quoted the same way, so no key can break out of its line.
pub fn render(config: &GeneratedConfiguration) -> String {
    let mut out = String::new();
    for (key, value) in config.entries() {
        out.push_str(&render_key(key));
        out.push_str(" = ");
        out.push_str(&json_string(value));
        out.push('\n');
    }
    out
}

fn render_key(key: &str) -> String {
    key.split('.')
        .map(|segment| {
            if is_plain_segment(segment) {
                segment.to_string()
            } else {
                json_string(segment)
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn json_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Location of the configuration file inside an execution directory.
pub fn config_file_path(execution_path: &Path) -> PathBuf {
    execution_path.join(APPLICATION_CONF_FILE)
}

/// Writes `text` to `target`, replacing previous contents.
///
/// The writer is flushed explicitly so that buffered write errors surface
/// here; the file is closed when this function returns, on every path.
pub fn write_configuration(text: &str, target: &Path) -> Result<(), ConfigWriteError> {
    let to_error = |source| ConfigWriteError {
        path: target.to_path_buf(),
        source,
    };

    let file = File::create(target).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn demo() -> GeneratedConfiguration {
        materialize(
            "Demo",
            "file:///proj/demo.dpu",
            Path::new("/tmp/run"),
            &[Parameter::new("threshold", "0.5")],
        )
    }

    #[test]
    fn test_materialize_demo() {
        let config = demo();

        assert_eq!(
            config.keys().collect::<Vec<_>>(),
            vec![
                "dpu.name",
                "dpu.uri",
                "dpu.executionpath",
                "dpu.parameters.threshold"
            ]
        );
        assert_eq!(config.get("dpu.name"), Some("Demo"));
        assert_eq!(config.get("dpu.uri"), Some("file:///proj/demo.dpu"));
        assert_eq!(config.get("dpu.executionpath"), Some("/tmp/run"));
        assert_eq!(config.get("dpu.parameters.threshold"), Some("0.5"));
    }

    #[test]
    fn test_materialize_without_parameters() {
        let config = materialize("Demo", "file:///d.dpu", Path::new("/tmp/run"), &[]);
        assert_eq!(config.len(), 3);
        assert!(!config.is_empty());
    }

    #[test]
    fn test_materialize_duplicate_keys_keep_single_entry() {
        let config = materialize(
            "Demo",
            "file:///d.dpu",
            Path::new("/tmp/run"),
            &[
                Parameter::new("a", "1"),
                Parameter::new("b", "2"),
                Parameter::new("a", "3"),
            ],
        );

        assert_eq!(config.len(), 5);
        assert_eq!(config.entries()[3], ("dpu.parameters.a".to_string(), "3".to_string()));
        assert_eq!(config.entries()[4].0, "dpu.parameters.b");
    }

    #[test]
    fn test_render_demo() {
        insta::assert_snapshot!(render(&demo()).trim_end(), @r###"
        dpu.name = "Demo"
        dpu.uri = "file:///proj/demo.dpu"
        dpu.executionpath = "/tmp/run"
        dpu.parameters.threshold = "0.5"
        "###);
    }

    #[test]
    fn test_render_escapes_values() {
        let config = materialize(
            "Quote \"me\"",
            "file:///d.dpu",
            Path::new("/tmp/run"),
            &[Parameter::new("path", "C:\\data"), Parameter::new("empty", "")],
        );
        let text = render(&config);

        assert!(text.contains(r#"dpu.name = "Quote \"me\"""#));
        assert!(text.contains(r#"dpu.parameters.path = "C:\\data""#));
        assert!(text.contains(r#"dpu.parameters.empty = """#));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_render_key_cannot_inject_entries() {
        let config = materialize(
            "Demo",
            "file:///d.dpu",
            Path::new("/tmp/run"),
            &[Parameter::new("x = \"1\"\ndpu.name", "Evil")],
        );
        let text = render(&config);

        assert_eq!(text.lines().count(), config.len());
        assert_eq!(text.lines().filter(|l| l.starts_with("dpu.name ")).count(), 1);
        assert!(text.contains("dpu.name = \"Demo\"\n"));
        assert!(text.contains(r#"dpu.parameters."x = \"1\"\ndpu".name = "Evil""#));
    }

    #[test]
    fn test_render_quotes_unusual_key_segments() {
        let config = materialize(
            "Demo",
            "file:///d.dpu",
            Path::new("/tmp/run"),
            &[
                Parameter::new("my key", "1"),
                Parameter::new("say \"hi\"", "2"),
                Parameter::new("two\nlines", "3"),
                Parameter::new("tab\there", "4"),
                Parameter::new("plain-key_2", "5"),
                Parameter::new("nested.level", "6"),
                Parameter::new("trailing.", "7"),
            ],
        );

        insta::assert_snapshot!(render(&config).trim_end(), @r###"
        dpu.name = "Demo"
        dpu.uri = "file:///d.dpu"
        dpu.executionpath = "/tmp/run"
        dpu.parameters."my key" = "1"
        dpu.parameters."say \"hi\"" = "2"
        dpu.parameters."two\nlines" = "3"
        dpu.parameters."tab\there" = "4"
        dpu.parameters.plain-key_2 = "5"
        dpu.parameters.nested.level = "6"
        dpu.parameters.trailing."" = "7"
        "###);
        // Raw keys are kept for lookups
        assert_eq!(config.get("dpu.parameters.my key"), Some("1"));
    }

    #[test]
    fn test_config_file_path() {
        assert_eq!(
            config_file_path(Path::new("/tmp/run")),
            PathBuf::from("/tmp/run/application.conf")
        );
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let dir = tempdir().expect("Failed to create temp dir");
        let target = config_file_path(dir.path());
        fs::write(&target, "stale = \"content that is much longer than the new one\"\n")
            .expect("Failed to write stale file");

        write_configuration("dpu.name = \"Demo\"\n", &target).expect("Should write config");

        let written = fs::read_to_string(&target).expect("Failed to read config");
        assert_eq!(written, "dpu.name = \"Demo\"\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("missing").join("application.conf");

        let err = write_configuration("x = \"y\"\n", &target).unwrap_err();
        assert_eq!(err.path, target);
        assert!(err.to_string().contains("Failed to write configuration"));
    }
}
