//! Test fixtures for creating sample workspaces and launch configurations.

use dpu_protocol::dpu_models::ParameterMap;
use dpu_protocol::launch_models::{
    LaunchConfiguration, DPU_EXECUTION_PATH, DPU_PARAMETERS, DPU_PATH, DPU_PROJECT,
    VM_ARGUMENTS,
};
use std::path::Path;
use tempfile::TempDir;

/// A workspace and a separate execution directory.
///
/// Both directories are removed when the value is dropped.
pub struct TestWorkspace {
    pub root: TempDir,
    pub run_dir: TempDir,
}

impl TestWorkspace {
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn run_dir(&self) -> &Path {
        self.run_dir.path()
    }
}

/// Create a workspace holding project `proj` with a YAML and a TOML descriptor.
///
/// This creates:
/// - `proj/dpus/demo.dpu`: `Demo` with parameters `threshold=0.5`, `k=3`
/// - `proj/dpus/cluster.toml`: `Cluster` with parameter `k=5`
/// - `.dpu/launches/demo.toml`: a launch configuration for `demo.dpu`
pub fn create_test_workspace() -> std::io::Result<TestWorkspace> {
    let root = tempfile::tempdir()?;
    let run_dir = tempfile::tempdir()?;

    std::fs::create_dir_all(root.path().join("proj/dpus"))?;
    std::fs::create_dir_all(root.path().join(".dpu/launches"))?;

    let demo_yaml = r#"
name: Demo
description: Thresholding demo
parameters:
  - key: threshold
    value: "0.5"
  - key: k
    value: "3"
"#;
    std::fs::write(root.path().join("proj/dpus/demo.dpu"), demo_yaml)?;

    let cluster_toml = r#"
name = "Cluster"

[[parameters]]
key = "k"
value = "5"
"#;
    std::fs::write(root.path().join("proj/dpus/cluster.toml"), cluster_toml)?;

    let launch = format!(
        r#"name = "demo"

[attributes]
"knowing.dpu.project" = "proj"
"knowing.dpu.path" = "dpus/demo.dpu"
"knowing.dpu.executionpath" = {exec:?}
"knowing.dpu.vmarguments" = "-Xmx512m"

[attributes."knowing.dpu.parameters"]
threshold = "0.9"
"#,
        exec = run_dir.path().to_string_lossy()
    );
    std::fs::write(root.path().join(".dpu/launches/demo.toml"), launch)?;

    Ok(TestWorkspace { root, run_dir })
}

/// Build a launch configuration for `relative_path` inside project `proj`.
#[allow(dead_code)]
pub fn launch_configuration(
    relative_path: &str,
    execution_path: &Path,
    vm_arguments: &str,
    overrides: &[(&str, &str)],
) -> LaunchConfiguration {
    let mut config = LaunchConfiguration::new("test");
    config.set_text(DPU_PROJECT, "proj");
    config.set_text(DPU_PATH, relative_path);
    config.set_text(DPU_EXECUTION_PATH, execution_path.to_string_lossy());
    config.set_text(VM_ARGUMENTS, vm_arguments);

    let overrides: ParameterMap = overrides
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    config.set_map(DPU_PARAMETERS, overrides);
    config
}

/// Read `application.conf` from `dir` as `(key, raw value)` pairs.
#[allow(dead_code)]
pub fn read_generated_config(dir: &Path) -> Vec<(String, String)> {
    let content = std::fs::read_to_string(dir.join("application.conf"))
        .expect("application.conf should exist");
    content
        .lines()
        .filter_map(|line| line.split_once(" = "))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
