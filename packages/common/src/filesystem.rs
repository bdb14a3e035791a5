use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File system abstraction so the export writer is testable without
/// touching disk
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Canonicalize a path (resolve symlinks, make absolute)
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, std::io::Error>;

    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error>;

    /// Write text content to a file, replacing any previous content
    fn write_file(&self, path: &Path, contents: &str) -> Result<(), std::io::Error>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, std::io::Error> {
        std::fs::canonicalize(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        std::fs::write(path, contents)
    }
}

/// Mock file system for testing; records every write in memory
pub struct MockFileSystem {
    written: RefCell<BTreeMap<PathBuf, String>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            written: RefCell::new(BTreeMap::new()),
        }
    }

    /// Snapshot of everything written so far, ordered by path
    pub fn written_files(&self) -> Vec<(PathBuf, String)> {
        self.written
            .borrow()
            .iter()
            .map(|(path, contents)| (path.clone(), contents.clone()))
            .collect()
    }

    pub fn read_written(&self, path: &Path) -> Option<String> {
        self.written.borrow().get(path).cloned()
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.written.borrow().contains_key(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, std::io::Error> {
        // For mock, just return the path as-is
        Ok(path.to_path_buf())
    }

    fn create_dir_all(&self, _path: &Path) -> Result<(), std::io::Error> {
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        self.written
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_writes() {
        let fs = MockFileSystem::new();
        let path = PathBuf::from("/out/Button.css");

        assert!(!fs.exists(&path));
        fs.write_file(&path, ".button { color: red; }").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(
            fs.read_written(&path).as_deref(),
            Some(".button { color: red; }")
        );
    }
}
