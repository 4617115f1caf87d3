//! The `ProjectSpec` aggregate root and its typestate builder.
//!
//! A `ProjectSpec` is the validated, immutable description of one C++
//! project to generate. Everything the content builders need (class name,
//! include guard, utils namespace) is derived from it, never stored twice.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoName` / `HasName`) so the
//! name must be set before anything else. The name is checked when it is
//! set; cross-field rules (entry-point and survey collisions) run in
//! `build()`.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;
use std::marker::PhantomData;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    validation::DomainValidator,
    value_objects::{Archetype, BuildSystem},
};

pub const DEFAULT_AUTHOR: &str = "Unknown Author";
pub const DEFAULT_VERSION: &str = "1.0.0";

// ── Feature flags ─────────────────────────────────────────────────────────────

/// Independent optional outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub tests: bool,
    pub gitignore: bool,
    pub survey_module: bool,
    pub data_dictionary: bool,
    pub privacy_policy: bool,
    /// Create `build/` for CMake projects.
    pub build_dir: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            tests: false,
            gitignore: true,
            survey_module: false,
            data_dictionary: false,
            privacy_policy: false,
            build_dir: true,
        }
    }
}

// ── Aggregate root ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectSpec {
    name: String,
    description: String,
    goal: String,
    author: String,
    version: String,
    archetype: Archetype,
    build_system: BuildSystem,
    features: FeatureFlags,
    copyright_year: i32,
}

impl ProjectSpec {
    pub fn builder() -> ProjectSpecBuilder<NoName> {
        ProjectSpecBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn goal(&self) -> &str {
        &self.goal
    }
    pub fn author(&self) -> &str {
        &self.author
    }
    pub fn version(&self) -> &str {
        &self.version
    }
    pub const fn archetype(&self) -> Archetype {
        self.archetype
    }
    pub const fn build_system(&self) -> BuildSystem {
        self.build_system
    }
    pub const fn features(&self) -> FeatureFlags {
        self.features
    }
    pub const fn copyright_year(&self) -> i32 {
        self.copyright_year
    }

    /// `name` with its first character upper-cased. Used as the class name.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Include guard of the main header, e.g. `CALC_H`.
    pub fn guard(&self) -> String {
        format!("{}_H", self.name.to_ascii_uppercase())
    }

    /// Lower-cased class name, used for test functions and the utils namespace.
    pub fn lower_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    pub fn utils_namespace(&self) -> String {
        format!("{}_utils", self.lower_name())
    }

    /// Whether the test source `tests/test_<name>.cpp` is emitted.
    pub fn emits_test_file(&self) -> bool {
        self.features.tests && self.archetype != Archetype::UnitTestHarness
    }

    /// Whether `build/` is created.
    pub fn emits_build_dir(&self) -> bool {
        self.build_system == BuildSystem::CMake && self.features.build_dir
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_project_spec(self)
    }
}

impl fmt::Display for ProjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} ({}, {})",
            self.name, self.version, self.archetype, self.build_system
        )
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: name has not yet been set.
pub struct NoName;
/// Marker: name has been set and checked.
pub struct HasName;

// ── Builder ───────────────────────────────────────────────────────────────────

pub struct ProjectSpecBuilder<N> {
    name: Option<String>,
    description: String,
    goal: String,
    author: Option<String>,
    version: Option<String>,
    archetype: Archetype,
    build_system: BuildSystem,
    features: FeatureFlags,
    copyright_year: Option<i32>,
    _marker: PhantomData<N>,
}

impl ProjectSpecBuilder<NoName> {
    pub fn new() -> Self {
        Self {
            name: None,
            description: String::new(),
            goal: String::new(),
            author: None,
            version: None,
            archetype: Archetype::ConsoleApp,
            build_system: BuildSystem::default(),
            features: FeatureFlags::default(),
            copyright_year: None,
            _marker: PhantomData,
        }
    }

    /// Set the project name. Rejects immediately if it is not a usable
    /// C++ identifier.
    pub fn name(self, name: impl Into<String>) -> Result<ProjectSpecBuilder<HasName>, DomainError> {
        let name = name.into();
        DomainValidator::validate_name(&name)?;
        Ok(ProjectSpecBuilder {
            name: Some(name),
            description: self.description,
            goal: self.goal,
            author: self.author,
            version: self.version,
            archetype: self.archetype,
            build_system: self.build_system,
            features: self.features,
            copyright_year: self.copyright_year,
            _marker: PhantomData,
        })
    }
}

impl Default for ProjectSpecBuilder<NoName> {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectSpecBuilder<HasName> {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    /// Empty input falls back to [`DEFAULT_AUTHOR`].
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Empty input falls back to [`DEFAULT_VERSION`].
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = archetype;
        self
    }

    pub fn build_system(mut self, build_system: BuildSystem) -> Self {
        self.build_system = build_system;
        self
    }

    pub fn features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }

    pub fn copyright_year(mut self, year: i32) -> Self {
        self.copyright_year = Some(year);
        self
    }

    /// Apply defaults, then check every rule that spans fields.
    pub fn build(self) -> Result<ProjectSpec, DomainError> {
        let Some(name) = self.name else {
            return Err(DomainError::MissingRequiredField { field: "name" });
        };

        let author = non_empty_or(self.author, DEFAULT_AUTHOR);
        let version = non_empty_or(self.version, DEFAULT_VERSION);
        let copyright_year = self
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year());

        let spec = ProjectSpec {
            name,
            description: self.description.trim().to_string(),
            goal: self.goal.trim().to_string(),
            author,
            version,
            archetype: self.archetype,
            build_system: self.build_system,
            features: self.features,
            copyright_year,
        };

        spec.validate()?;
        Ok(spec)
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> ProjectSpecBuilder<HasName> {
        ProjectSpec::builder().name("calc").unwrap()
    }

    #[test]
    fn defaults_are_applied() {
        let spec = calc().author("").version("  ").build().unwrap();
        assert_eq!(spec.author(), DEFAULT_AUTHOR);
        assert_eq!(spec.version(), DEFAULT_VERSION);
        assert_eq!(spec.archetype(), Archetype::ConsoleApp);
        assert_eq!(spec.build_system(), BuildSystem::Make);
        assert!(spec.features().gitignore);
        assert!(!spec.features().tests);
    }

    #[test]
    fn derived_names() {
        let spec = ProjectSpec::builder()
            .name("graphLib")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(spec.display_name(), "GraphLib");
        assert_eq!(spec.guard(), "GRAPHLIB_H");
        assert_eq!(spec.lower_name(), "graphlib");
        assert_eq!(spec.utils_namespace(), "graphlib_utils");
    }

    #[test]
    fn invalid_name_is_rejected_immediately() {
        let err = ProjectSpec::builder().name("my app").err().unwrap();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));
    }

    #[test]
    fn build_target_names_are_rejected() {
        for name in ["all", "clean", "install", "test", "debug", "release", "src", "obj"] {
            let err = ProjectSpec::builder().name(name).err().unwrap();
            assert!(matches!(err, DomainError::InvalidProjectName { .. }), "{name}");
        }
    }

    #[test]
    fn main_is_rejected_only_with_an_entry_point() {
        let builder = || ProjectSpec::builder().name("main").unwrap();
        assert!(builder().archetype(Archetype::ConsoleApp).build().is_err());
        assert!(builder().archetype(Archetype::StaticLibrary).build().is_ok());
    }

    #[test]
    fn survey_collision_is_rejected() {
        let features = FeatureFlags {
            survey_module: true,
            ..FeatureFlags::default()
        };
        let err = ProjectSpec::builder()
            .name("LikertScale")
            .unwrap()
            .features(features)
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));

        let err = ProjectSpec::builder()
            .name("likert_scale")
            .unwrap()
            .features(features)
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));

        assert!(
            ProjectSpec::builder()
                .name("likert_scale")
                .unwrap()
                .build()
                .is_ok()
        );
    }

    #[test]
    fn bad_version_and_multiline_fields_are_rejected() {
        assert!(matches!(
            calc().version("one").build(),
            Err(DomainError::InvalidVersion { .. })
        ));
        assert!(matches!(
            calc().description("line\nbreak").build(),
            Err(DomainError::InvalidField { field: "description", .. })
        ));
    }

    #[test]
    fn test_file_and_build_dir_rules() {
        let with_tests = FeatureFlags {
            tests: true,
            ..FeatureFlags::default()
        };
        let harness = calc()
            .archetype(Archetype::UnitTestHarness)
            .features(with_tests)
            .build()
            .unwrap();
        assert!(!harness.emits_test_file());

        let console = calc().features(with_tests).build().unwrap();
        assert!(console.emits_test_file());
        assert!(!console.emits_build_dir());

        let cmake = calc().build_system(BuildSystem::CMake).build().unwrap();
        assert!(cmake.emits_build_dir());
    }

    #[test]
    fn display_summarises_spec() {
        let spec = calc().version("2.0").build().unwrap();
        assert_eq!(spec.to_string(), "calc v2.0 (console, make)");
    }
}
