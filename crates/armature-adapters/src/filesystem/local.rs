//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use armature_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ArmatureError, ArmatureResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ArmatureResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ArmatureResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ArmatureError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("calc/include");
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));

        let file = nested.join("calc.h");
        fs.write_file(&file, "first").unwrap();
        fs.write_file(&file, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "second");
    }

    #[test]
    fn missing_parent_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs
            .write_file(&dir.path().join("nope/file.txt"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            ArmatureError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert!(err.to_string().contains("Failed to write file"));
    }
}
