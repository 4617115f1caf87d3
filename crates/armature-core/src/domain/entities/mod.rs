pub mod generation_report;
pub mod project_spec;
pub mod substitution;

pub use crate::domain::DomainError;
pub use generation_report::{EntryKind, GenerationFailure, GenerationReport, ReportEntry};
pub use project_spec::{FeatureFlags, HasName, NoName, ProjectSpec, ProjectSpecBuilder};
pub use substitution::Substitutions;
