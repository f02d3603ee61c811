//! Embedded template files for `dpu init`.
//!
//! Templates live in the repository's `templates/` directory and are
//! embedded with `rust-embed`, so the CLI can scaffold a workspace without
//! any files next to the binary. Paths under `dpu/` end up in the `.dpu/`
//! directory; everything else is written relative to the workspace root.

use rust_embed::RustEmbed;

/// Embedded template files from the `templates/` directory.
///
/// The path is relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = repository root `templates/`
///
/// With the `debug-embed` feature the files are embedded in debug builds
/// as well.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Example
/// ```
/// use dpu_core::init::templates::get_template;
///
/// let config = get_template("dpu/config.toml").expect("config.toml should exist");
/// assert!(config.contains("program ="));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// List all template files whose path starts with `prefix`, sorted.
pub fn list_templates(prefix: &str) -> Vec<String> {
    let mut paths: Vec<String> = TemplateAssets::iter()
        .filter(|path| path.starts_with(prefix))
        .map(|path| path.to_string())
        .collect();
    paths.sort();
    paths
}
