// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Armature.
//!
//! This module contains pure business logic with no I/O. Templates, the
//! filesystem and logging are reached through ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: content builders return `String`s, they never write
//! - **No logging**: observability belongs to the application layer
//! - **Immutable entities**: `ProjectSpec` cannot change once built
//! - **Validated at construction**: an invalid spec cannot exist
//!
// Public API - what the world sees
pub mod content;
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    generation_report::{EntryKind, GenerationFailure, GenerationReport, ReportEntry},
    project_spec::{
        DEFAULT_AUTHOR, DEFAULT_VERSION, FeatureFlags, HasName, NoName, ProjectSpec,
        ProjectSpecBuilder,
    },
    substitution::Substitutions,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Archetype, ArchetypeFamily, BuildSystem};

pub use validation::{DomainValidator, MAX_NAME_LEN};
