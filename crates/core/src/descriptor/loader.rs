//! Descriptor loading.

use crate::descriptor::error::DescriptorResult;
use crate::descriptor::store::{DescriptorRef, DescriptorStore};
use dpu_protocol::dpu_models::DataProcessingUnit;

/// Loads a located descriptor into a value owned by the caller.
///
/// The store may keep a shared parsed instance around; this always returns a
/// deep copy of it, so edits made by the caller never reach the store or any
/// other caller.
///
/// # Errors
///
/// Returns the store's `DescriptorError` when the file cannot be read or
/// parsed.
pub fn load_descriptor(
    store: &dyn DescriptorStore,
    descriptor: &DescriptorRef,
) -> DescriptorResult<DataProcessingUnit> {
    let original = store.read_document(descriptor)?;
    let dpu = DataProcessingUnit::clone(&original);

    tracing::debug!(
        name = %dpu.name,
        parameters = dpu.parameters.len(),
        path = %descriptor.path().display(),
        "Loaded DPU"
    );

    Ok(dpu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::store::WorkspaceStore;
    use dpu_protocol::dpu_models::Parameter;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loaded_descriptors_are_independent() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("proj")).expect("Failed to create project");
        fs::write(
            dir.path().join("proj/demo.dpu"),
            "name: Demo\nparameters:\n  - key: threshold\n    value: \"0.5\"\n",
        )
        .expect("Failed to write DPU");

        let store = WorkspaceStore::new(dir.path());
        let found = store
            .locate(Some("proj"), Some("demo.dpu"))
            .expect("Should locate DPU");

        let mut first = load_descriptor(&store, &found).expect("Should load DPU");
        let second = load_descriptor(&store, &found).expect("Should load DPU");

        first.parameters[0].value = "0.9".to_string();
        first.parameters.push(Parameter::new("extra", "1"));
        first.name = "Changed".to_string();

        assert_eq!(second.name, "Demo");
        assert_eq!(second.parameters, vec![Parameter::new("threshold", "0.5")]);

        // The store's shared instance is untouched as well
        let third = load_descriptor(&store, &found).expect("Should load DPU");
        assert_eq!(third, second);
    }
}
