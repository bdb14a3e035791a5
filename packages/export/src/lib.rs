//! Bundle assembly: pair each visible tab with its export file name and
//! write the result through the [`FileSystem`] abstraction.
//!
//! The artifact core only supplies strings; this package is the
//! "download" side effect the core stays free of. I/O failures surface
//! as [`HandoffError::Download`].

use handoff_artifact::{file_name, visible_tabs, ContentBag};
use handoff_common::{FileSystem, HandoffError, HandoffResult};
use std::path::{Path, PathBuf};

/// Fallback when the caller has no component name
pub const DEFAULT_COMPONENT_NAME: &str = "Component";

/// One file of the export bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

/// Assemble the downloadable bundle: one file per visible tab, named
/// after the component. An empty bag yields an empty bundle.
pub fn build_bundle(
    bag: &ContentBag,
    has_typescript: bool,
    component_name: &str,
) -> Vec<ExportFile> {
    let name = effective_name(component_name);

    visible_tabs(bag, has_typescript)
        .into_iter()
        .map(|tab| ExportFile {
            file_name: file_name(Some(tab.kind), name),
            content: tab.content,
        })
        .collect()
}

fn effective_name(component_name: &str) -> &str {
    let trimmed = component_name.trim();
    if trimmed.is_empty() {
        DEFAULT_COMPONENT_NAME
    } else {
        trimmed
    }
}

/// Write every bundle file into `out_dir`, creating it if needed.
/// Returns the written paths in bundle order.
pub fn write_bundle(
    files: &[ExportFile],
    out_dir: &Path,
    fs: &dyn FileSystem,
) -> HandoffResult<Vec<PathBuf>> {
    fs.create_dir_all(out_dir).map_err(|err| {
        HandoffError::Download(format!("cannot create {}: {}", out_dir.display(), err))
    })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = out_dir.join(&file.file_name);
        fs.write_file(&path, &file.content).map_err(|err| {
            HandoffError::Download(format!("cannot write {}: {}", path.display(), err))
        })?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use handoff_common::MockFileSystem;

    fn sample_bag() -> ContentBag {
        let mut bag = ContentBag::new();
        bag.jsx = Some("const Button = () => <button/>;".to_string());
        bag.css = Some(".button { cursor: pointer; }".to_string());
        bag.html = Some("<button></button>".to_string());
        bag
    }

    #[test]
    fn test_build_bundle_names_files_after_component() {
        let files = build_bundle(&sample_bag(), false, "Button");
        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();

        assert_eq!(names, vec!["Button.jsx", "Button.css", "Button.html"]);
    }

    #[test]
    fn test_build_bundle_defaults_blank_component_name() {
        let files = build_bundle(&sample_bag(), false, "   ");
        assert_eq!(files[0].file_name, "Component.jsx");
    }

    #[test]
    fn test_build_bundle_respects_typescript_gate() {
        let mut bag = sample_bag();
        bag.tsx = Some("const Button = (): JSX.Element => <button/>;".to_string());

        let names: Vec<_> = build_bundle(&bag, true, "Button")
            .into_iter()
            .map(|f| f.file_name)
            .collect();

        assert!(names.contains(&"Button.tsx".to_string()));
        assert!(!names.contains(&"Button.jsx".to_string()));
    }

    #[test]
    fn test_empty_bag_builds_empty_bundle() {
        assert!(build_bundle(&ContentBag::new(), false, "Button").is_empty());
    }

    #[test]
    fn test_write_bundle_through_mock() {
        let fs = MockFileSystem::new();
        let files = build_bundle(&sample_bag(), false, "Button");

        let written = write_bundle(&files, Path::new("/out"), &fs).unwrap();
        assert_eq!(written.len(), 3);

        assert_eq!(
            fs.read_written(Path::new("/out/Button.css")).as_deref(),
            Some(".button { cursor: pointer; }")
        );
        assert_eq!(
            fs.read_written(Path::new("/out/Button.jsx")).as_deref(),
            Some("const Button = () => <button/>;")
        );
    }
}
