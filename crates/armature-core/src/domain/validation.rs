use crate::domain::{entities::ProjectSpec, error::DomainError};

/// Longest accepted project name.
pub const MAX_NAME_LEN: usize = 64;

/// Reserved words of C++20 plus the alternative operator tokens.
const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Names the generated build files or directory layout already use:
/// Make phony targets and directory variables, CMake's reserved target
/// names (policy CMP0037) and the project's own subdirectories.
const RESERVED_TARGETS: &[&str] = &[
    "all", "clean", "debug", "release", "install", "test", "help", "package",
    "package_source", "edit_cache", "rebuild_cache", "list_install_components",
    "install_strip", "install_local", "ALL_BUILD", "ZERO_CHECK", "INSTALL", "RUN_TESTS",
    "PACKAGE", "src", "obj", "include", "tests", "build",
];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Rules that depend on the name alone.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(invalid(&format!(
                "name is longer than {} characters",
                MAX_NAME_LEN
            )));
        }

        if name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid("must start with a letter or underscore"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(invalid(&format!("contains invalid character '{}'", bad)));
        }

        if CPP_KEYWORDS.contains(&name) {
            return Err(invalid("is a reserved C++ keyword"));
        }
        if RESERVED_TARGETS.contains(&name) {
            return Err(invalid("is reserved by the generated build files"));
        }

        Ok(())
    }

    /// `MAJOR[.MINOR[.PATCH[.TWEAK]]]`, all numeric.
    pub fn validate_version(version: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidVersion {
            version: version.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() > 4 {
            return Err(invalid("at most four components are allowed"));
        }
        if parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(invalid("every component must be a non-empty number"));
        }
        Ok(())
    }

    /// Free text ends up inside one-line comments and string literals.
    pub fn validate_single_line(field: &'static str, value: &str) -> Result<(), DomainError> {
        if value.contains(['\n', '\r']) {
            return Err(DomainError::InvalidField {
                field,
                reason: "line breaks are not allowed".into(),
            });
        }
        Ok(())
    }

    /// Cross-field rules checked once every field is known.
    pub fn validate_project_spec(spec: &ProjectSpec) -> Result<(), DomainError> {
        Self::validate_name(spec.name())?;
        Self::validate_version(spec.version())?;
        Self::validate_single_line("description", spec.description())?;
        Self::validate_single_line("goal", spec.goal())?;
        Self::validate_single_line("author", spec.author())?;

        let name = spec.name();
        if spec.archetype().has_entry_point() && name == "main" {
            return Err(DomainError::InvalidProjectName {
                name: name.to_string(),
                reason: "collides with src/main.cpp".into(),
            });
        }
        if spec.features().survey_module
            && (name == "LikertScale" || spec.guard() == "LIKERT_SCALE_H")
        {
            return Err(DomainError::InvalidProjectName {
                name: name.to_string(),
                reason: "collides with the LikertScale survey module".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        for name in ["calc", "mathlib", "_private", "Graph2D", "a"] {
            assert!(DomainValidator::validate_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_bad_identifiers() {
        for name in ["", "my app", "my-app", "9lives", "../etc", "a.b", "caf\u{e9}"] {
            assert!(DomainValidator::validate_name(name).is_err(), "{name:?}");
        }
    }

    #[test]
    fn rejects_keywords_and_long_names() {
        assert!(DomainValidator::validate_name("class").is_err());
        assert!(DomainValidator::validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
        assert!(DomainValidator::validate_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn rejects_names_reserved_by_build_files() {
        for name in RESERVED_TARGETS {
            let err = DomainValidator::validate_name(name).unwrap_err();
            assert!(
                err.to_string().contains("reserved by the generated build files"),
                "{name}: {err}"
            );
        }
        assert!(DomainValidator::validate_name("tester").is_ok());
        assert!(DomainValidator::validate_name("Build").is_ok());
    }

    #[test]
    fn version_grammar() {
        for v in ["1", "1.0", "1.0.0", "2.3.1.4", "10.20"] {
            assert!(DomainValidator::validate_version(v).is_ok(), "{v}");
        }
        for v in ["", "1.", "v1.0", "1.0.0-beta", "1.2.3.4.5", "1..2"] {
            assert!(DomainValidator::validate_version(v).is_err(), "{v}");
        }
    }

    #[test]
    fn single_line_fields() {
        assert!(DomainValidator::validate_single_line("goal", "ship it").is_ok());
        let err = DomainValidator::validate_single_line("goal", "a\nb").unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "goal", .. }));
    }
}
