//! Descriptor storage.
//!
//! [`DescriptorStore`] is the narrow contract the launcher needs from
//! whatever owns descriptor files: find one by project and relative path,
//! and read it into the typed model. [`WorkspaceStore`] implements it on a
//! plain directory tree where every project is a subdirectory of the
//! workspace root.

use crate::descriptor::error::{DescriptorError, DescriptorResult};
use dpu_protocol::dpu_models::DataProcessingUnit;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use url::Url;

/// Reference to a located descriptor file. Nothing has been read yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorRef {
    project: String,
    relative_path: String,
    path: PathBuf,
}

impl DescriptorRef {
    pub fn new(project: impl Into<String>, relative_path: impl Into<String>, path: PathBuf) -> Self {
        Self {
            project: project.into(),
            relative_path: relative_path.into(),
            path,
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Absolute location of the descriptor file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute `file://` URI of the descriptor, percent-encoded.
    ///
    /// # Errors
    ///
    /// `Invalid` if the path is not absolute.
    pub fn uri(&self) -> DescriptorResult<String> {
        Url::from_file_path(&self.path)
            .map(String::from)
            .map_err(|()| DescriptorError::Invalid {
                path: self.path.clone(),
                reason: "path is not absolute, no file URI can be formed".to_string(),
            })
    }
}

/// Access to persisted descriptors.
pub trait DescriptorStore: Send + Sync {
    /// Resolves a project-relative path to a descriptor file.
    ///
    /// # Errors
    ///
    /// `MissingIdentifier` if either identifier is absent, `NotFound` if no
    /// file exists there.
    fn locate(
        &self,
        project: Option<&str>,
        relative_path: Option<&str>,
    ) -> DescriptorResult<DescriptorRef>;

    /// Reads and parses a descriptor.
    ///
    /// Implementations may hand out a shared, cached instance. Callers that
    /// need a value of their own go through
    /// [`load_descriptor`](crate::descriptor::load_descriptor).
    fn read_document(&self, descriptor: &DescriptorRef) -> DescriptorResult<Arc<DataProcessingUnit>>;
}

struct CachedDocument {
    modified: Option<SystemTime>,
    dpu: Arc<DataProcessingUnit>,
}

/// Filesystem-backed descriptor store.
///
/// ```text
/// <root>/
/// ├── <project>/
/// │   └── dpus/demo.dpu
/// └── <other-project>/
/// ```
///
/// Parsed documents are cached per path and reparsed when the file's
/// modification time changes.
pub struct WorkspaceStore {
    root: PathBuf,
    cache: Mutex<HashMap<PathBuf, CachedDocument>>,
}

impl WorkspaceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DescriptorStore for WorkspaceStore {
    fn locate(
        &self,
        project: Option<&str>,
        relative_path: Option<&str>,
    ) -> DescriptorResult<DescriptorRef> {
        let project = project
            .filter(|p| !p.is_empty())
            .ok_or(DescriptorError::MissingIdentifier("project"))?;
        let relative_path = relative_path
            .filter(|p| !p.is_empty())
            .ok_or(DescriptorError::MissingIdentifier("DPU path"))?;

        let candidate = self.root.join(project).join(relative_path);
        let not_found = || DescriptorError::NotFound {
            project: project.to_string(),
            relative_path: relative_path.to_string(),
            path: candidate.clone(),
        };

        // Both identifiers must stay inside the workspace
        if !is_contained(Path::new(project)) || !is_contained(Path::new(relative_path)) {
            return Err(not_found());
        }

        if !candidate.is_file() {
            return Err(not_found());
        }

        let path = candidate.canonicalize().map_err(|_| not_found())?;
        tracing::debug!(project, relative_path, path = %path.display(), "Located DPU");

        Ok(DescriptorRef::new(project, relative_path, path))
    }

    fn read_document(&self, descriptor: &DescriptorRef) -> DescriptorResult<Arc<DataProcessingUnit>> {
        let path = descriptor.path();
        let modified = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .ok();

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = cache.get(path) {
            if modified.is_some() && cached.modified == modified {
                return Ok(Arc::clone(&cached.dpu));
            }
        }

        let content = std::fs::read_to_string(path).map_err(|source| DescriptorError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let dpu = Arc::new(parse_descriptor(path, &content)?);

        cache.insert(
            path.to_path_buf(),
            CachedDocument {
                modified,
                dpu: Arc::clone(&dpu),
            },
        );

        Ok(dpu)
    }
}

/// Parses descriptor text, choosing the format from the file extension.
///
/// `.toml` files are TOML; `.dpu`, `.yaml`, `.yml` and anything else are
/// YAML.
pub fn parse_descriptor(path: &Path, content: &str) -> DescriptorResult<DataProcessingUnit> {
    let dpu: DataProcessingUnit = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(content).map_err(|source| DescriptorError::TomlParse {
            path: path.to_path_buf(),
            source,
        })?,
        _ => serde_yaml::from_str(content).map_err(|source| DescriptorError::YamlParse {
            path: path.to_path_buf(),
            source,
        })?,
    };

    if dpu.name.trim().is_empty() {
        return Err(DescriptorError::Invalid {
            path: path.to_path_buf(),
            reason: "name must not be empty".to_string(),
        });
    }
    if let Some(index) = dpu.parameters.iter().position(|p| p.key.is_empty()) {
        return Err(DescriptorError::Invalid {
            path: path.to_path_buf(),
            reason: format!("parameter #{} has an empty key", index + 1),
        });
    }

    Ok(dpu)
}

fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
