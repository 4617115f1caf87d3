//! Infrastructure adapters for Armature.
//!
//! This crate implements the ports defined in `armature-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_loader::{
    ParsedTemplates, RecordError, SqlTemplateLoader, TemplateRecord, TemplateSourceWarning,
};
pub use template_store::InMemoryStore;
