//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `armature-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Substitutions;
use crate::error::ArmatureResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `armature_adapters::filesystem::LocalFilesystem` (production)
/// - `armature_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_file` never creates missing parent directories; the generator
///   creates every directory explicitly first
/// - Writing an existing file replaces it
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ArmatureResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ArmatureResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `armature_adapters::template_store::InMemoryStore`
///
/// A store is loaded once and read-only afterwards.
pub trait TemplateStore: Send + Sync {
    /// Raw template text. Unknown keys are an error, never a default.
    fn get(&self, key: &str) -> ArmatureResult<String>;

    fn contains(&self, key: &str) -> bool;

    /// Available keys in sorted order.
    fn keys(&self) -> Vec<String>;

    /// Template text with every known `{{placeholder}}` expanded once.
    fn get_and_substitute(&self, key: &str, substitutions: &Substitutions) -> ArmatureResult<String> {
        Ok(substitutions.apply(&self.get(key)?))
    }
}

