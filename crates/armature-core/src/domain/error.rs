// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports and CLI summaries keep copies)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Unknown project archetype '{0}'")]
    UnknownArchetype(String),

    #[error("Unknown build system '{0}'")]
    UnknownBuildSystem(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Use letters, digits and underscores; start with a letter or '_'".into(),
                "Examples: graph_analyzer, json_parser, calc".into(),
            ],
            Self::InvalidVersion { .. } => vec![
                "Versions use 1 to 4 numeric components".into(),
                "Examples: 1, 1.0, 1.0.0, 2.3.1.4".into(),
            ],
            Self::InvalidField { field, .. } => {
                vec![format!("Keep the {} on a single line", field)]
            }
            Self::UnknownArchetype(_) => vec![
                "Supported archetypes:".into(),
                "  • console      - Console application".into(),
                "  • static       - Static library".into(),
                "  • shared       - Shared library".into(),
                "  • header-only  - Header-only library".into(),
                "  • gui          - GUI application stub".into(),
                "  • test-harness - Unit test harness".into(),
            ],
            Self::UnknownBuildSystem(_) => vec!["Supported build systems: cmake, make".into()],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::UnknownArchetype(_) | Self::UnknownBuildSystem(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
