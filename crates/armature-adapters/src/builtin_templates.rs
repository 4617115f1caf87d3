//! Built-in template pack and template source selection.
//!
//! The pack is compiled into the binary from `templates/templates.sql`, so a
//! fresh install can generate projects without any files on disk. A
//! user-supplied source replaces the pack entirely.

use std::path::Path;

use tracing::{info, instrument};

use armature_core::error::ArmatureResult;

use crate::{
    template_loader::{self, ParsedTemplates, SqlTemplateLoader, TemplateSourceWarning},
    template_store::InMemoryStore,
};

/// Origin reported for statements of the compiled-in pack.
pub const BUILTIN_ORIGIN: &str = "<builtin>";

const BUILTIN_SOURCE: &str = include_str!("../templates/templates.sql");

/// Parse the compiled-in pack.
pub fn builtin() -> ParsedTemplates {
    template_loader::parse_source(BUILTIN_ORIGIN, BUILTIN_SOURCE)
}

/// Load the store from `source`, or from the built-in pack when `None`.
///
/// # Errors
///
/// Only when `source` is given and cannot be read.
#[instrument(skip_all, fields(source = %source.map_or(BUILTIN_ORIGIN.into(), |p| p.display().to_string())))]
pub fn load(source: Option<&Path>) -> ArmatureResult<(InMemoryStore, Vec<TemplateSourceWarning>)> {
    let parsed = match source {
        Some(path) => SqlTemplateLoader::new(path).load()?,
        None => builtin(),
    };
    let store = InMemoryStore::from_records(parsed.records);
    info!(templates = store.len(), "Template store ready");
    Ok((store, parsed.warnings))
}
