//! In-memory template store.

use std::collections::BTreeMap;

use armature_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::ArmatureResult,
};

use crate::template_loader::TemplateRecord;

/// Read-only key to template map, filled once at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    templates: BTreeMap<String, String>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from parsed records. Later records with the same key replace
    /// earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = TemplateRecord>) -> Self {
        Self {
            templates: records
                .into_iter()
                .map(|record| (record.path, record.content))
                .collect(),
        }
    }

    pub fn with_template(mut self, key: impl Into<String>, content: impl Into<String>) -> Self {
        self.templates.insert(key.into(), content.into());
        self
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, key: &str) -> ArmatureResult<String> {
        self.templates.get(key).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                key: key.to_string(),
            }
            .into()
        })
    }

    fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }
}
