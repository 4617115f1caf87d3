//! Pure content builders for the generated C++ project.
//!
//! Code skeletons (sources, headers, build descriptors, the survey module)
//! are derived entirely from a [`ProjectSpec`]. Prose documents (README,
//! LICENSE, .gitignore, data dictionary, privacy policy) come from the
//! template store; this module only names their keys and assembles the
//! substitution set they share.

pub mod build;
pub mod sources;
pub mod survey;

use crate::domain::entities::{ProjectSpec, Substitutions};

// ── Stored template keys ──────────────────────────────────────────────────────

pub const README_KEY: &str = "README.md";
pub const LICENSE_KEY: &str = "LICENSE";
pub const GITIGNORE_KEY: &str = ".gitignore";
pub const DATA_DICTIONARY_KEY: &str = "data_dictionary.md";
pub const PRIVACY_POLICY_KEY: &str = "PRIVACY_POLICY.md";

/// Placeholder replaced by the rendered directory tree in the README.
pub const STRUCTURE_PLACEHOLDER: &str = "project_structure";

/// Values every stored document can reference.
pub fn base_substitutions(spec: &ProjectSpec) -> Substitutions {
    Substitutions::new()
        .with("name", spec.name())
        .with("project_name", spec.display_name())
        .with("description", spec.description())
        .with("goal", spec.goal())
        .with("author", spec.author())
        .with("version", spec.version())
        .with("year", spec.copyright_year().to_string())
}

/// Stored ignore rules followed by the project's own binaries.
pub fn project_gitignore(base: &str, spec: &ProjectSpec) -> String {
    let mut content = base.trim_end().to_string();
    content.push_str("\n\n# Project specific\n");
    content.push_str(spec.name());
    content.push('\n');
    content.push_str(spec.name());
    content.push_str("_tests\n");
    content
}

/// Escape text for a C++ string literal.
pub(crate) fn cpp_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Keep text from closing a `/* */` block early.
pub(crate) fn cpp_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> ProjectSpec {
        ProjectSpec::builder()
            .name("calc")
            .unwrap()
            .description("A \"tiny\" calculator")
            .author("Ada")
            .copyright_year(2026)
            .build()
            .unwrap()
    }

    #[test]
    fn base_set_has_every_key() {
        let subs = base_substitutions(&spec());
        for key in [
            "name",
            "project_name",
            "description",
            "goal",
            "author",
            "version",
            "year",
        ] {
            assert!(subs.contains(key), "{key}");
        }
        assert_eq!(subs.get("project_name"), Some("Calc"));
        assert_eq!(subs.get("year"), Some("2026"));
    }

    #[test]
    fn gitignore_appends_project_block() {
        let content = project_gitignore("*.o\n\n", &spec());
        assert_eq!(content, "*.o\n\n# Project specific\ncalc\ncalc_tests\n");
    }

    #[test]
    fn escaping() {
        assert_eq!(cpp_string(r#"say "hi" \o/"#), r#"say \"hi\" \\o/"#);
        assert_eq!(cpp_comment("a */ b"), "a *\\/ b");
    }
}
