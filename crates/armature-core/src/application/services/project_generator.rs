//! Project Generator - main application orchestrator.
//!
//! Turns one [`ProjectSpec`] into a project tree on disk:
//! 0. Pre-flight: README and LICENSE templates must exist
//! 1. Create directories
//! 2. Emit code skeletons (entry point, header, implementation)
//! 3. Emit the build descriptor and the test file
//! 4. Emit stored documents and optional modules
//! 5. Emit README (with the structure diagram) and LICENSE last
//!
//! Per-file failures are recorded in the [`GenerationReport`] and do not stop
//! the remaining files. Only the pre-flight check aborts.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateStore},
    domain::{
        Archetype, EntryKind, GenerationReport, ProjectSpec, Substitutions,
        content::{self, build, sources, survey},
    },
    error::{ArmatureError, ArmatureResult},
};

const STRUCTURE_HEADING: &str = "## Project Structure";

/// Generates C++ project skeletons.
pub struct ProjectGenerator {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectGenerator {
    /// Create a generator over a loaded template store and a filesystem sink.
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Generate `spec` under `output_dir/<name>/`.
    ///
    /// Existing files are overwritten. Returns `Err` only when a mandatory
    /// template is missing, in which case nothing has been written.
    #[instrument(
        skip_all,
        fields(
            project = %spec.name(),
            archetype = %spec.archetype(),
            build_system = %spec.build_system(),
            output = %output_dir.display()
        )
    )]
    pub fn generate(&self, spec: &ProjectSpec, output_dir: &Path) -> ArmatureResult<GenerationReport> {
        info!("Generating project");

        // 0. Pre-flight
        let readme_template = self.store.get(content::README_KEY)?;
        let license_template = self.store.get(content::LICENSE_KEY)?;

        let root = output_dir.join(spec.name());
        let mut out = Emitter {
            filesystem: self.filesystem.as_ref(),
            report: GenerationReport::new(&root),
            root,
        };
        let archetype = spec.archetype();
        let features = spec.features();

        // 1. Directories
        out.root_dir();
        out.dir("include");
        if archetype.has_sources() {
            out.dir("src");
        }
        if features.tests {
            out.dir("tests");
        }
        if spec.emits_build_dir() {
            out.dir("build");
        }

        // 2-4. Code skeletons
        if let Some(main) = sources::entry_point(spec) {
            out.file(&sources::entry_point_path(), &main, Some("Entry point"));
        }
        out.file(&sources::header_path(spec), &sources::header(spec), None);
        if let Some(body) = sources::implementation(spec) {
            out.file(&sources::implementation_path(spec), &body, None);
        }

        // 5. Build descriptor
        out.file(
            spec.build_system().descriptor(),
            &build::descriptor(spec),
            Some("Build configuration"),
        );

        // 6. Tests
        if let Some(tests) = sources::test_file(spec).filter(|_| spec.emits_test_file()) {
            out.file(&sources::test_file_path(spec), &tests, Some("Unit tests"));
        }

        // 7. .gitignore
        let subs = content::base_substitutions(spec);
        if features.gitignore {
            match self.store.get(content::GITIGNORE_KEY) {
                Ok(base) => out.file(
                    content::GITIGNORE_KEY,
                    &content::project_gitignore(&base, spec),
                    None,
                ),
                Err(e) => out.fail(content::GITIGNORE_KEY, EntryKind::File, &e),
            }
        }

        // 8. Optional modules
        if features.survey_module {
            if archetype == Archetype::HeaderOnly {
                out.file(survey::HEADER_PATH, &survey::inline_header(), Some("Survey module"));
            } else {
                out.file(survey::HEADER_PATH, &survey::header(), Some("Survey module"));
                out.file(survey::SOURCE_PATH, &survey::implementation(), None);
            }
        }
        if features.data_dictionary {
            match self.store.get_and_substitute(content::DATA_DICTIONARY_KEY, &subs) {
                Ok(text) => out.file(content::DATA_DICTIONARY_KEY, &text, None),
                Err(e) => out.fail(content::DATA_DICTIONARY_KEY, EntryKind::File, &e),
            }
        }
        if features.privacy_policy {
            match self.store.get_and_substitute(content::PRIVACY_POLICY_KEY, &subs) {
                Ok(text) => out.file(content::PRIVACY_POLICY_KEY, &text, None),
                Err(e) => out.fail(content::PRIVACY_POLICY_KEY, EntryKind::File, &e),
            }
        }

        // 9. README, then LICENSE
        let tree = out.report.render_tree(
            spec.name(),
            &[(content::README_KEY, None), (content::LICENSE_KEY, None)],
        );
        let readme_subs = subs
            .clone()
            .with(content::STRUCTURE_PLACEHOLDER, tree.as_str());
        let readme = render_readme(&readme_template, &readme_subs, &tree);
        out.file(content::README_KEY, &readme, None);
        out.file(content::LICENSE_KEY, &subs.apply(&license_template), None);

        let report = out.report;
        if report.is_success() {
            info!(files = report.files().count(), "Project generated");
        } else {
            warn!(
                files = report.files().count(),
                failures = report.failures().len(),
                "Project generated with failures"
            );
        }
        Ok(report)
    }
}

/// Expand the README; append the tree when the template has no slot for it.
fn render_readme(template: &str, subs: &Substitutions, tree: &str) -> String {
    let placeholder = format!("{{{{{}}}}}", content::STRUCTURE_PLACEHOLDER);
    let mut readme = subs.apply(template);
    if !template.contains(&placeholder) {
        if !readme.ends_with('\n') {
            readme.push('\n');
        }
        readme.push_str(&format!("\n{STRUCTURE_HEADING}\n\n```\n{tree}```\n"));
    }
    readme
}

/// Writes relative paths under one project root and records the outcome.
struct Emitter<'a> {
    filesystem: &'a dyn Filesystem,
    root: PathBuf,
    report: GenerationReport,
}

impl Emitter<'_> {
    fn root_dir(&mut self) {
        if let Err(e) = self.filesystem.create_dir_all(&self.root) {
            self.fail(".", EntryKind::Directory, &e);
        }
    }

    fn dir(&mut self, rel: &str) {
        match self.filesystem.create_dir_all(&self.root.join(rel)) {
            Ok(()) => {
                debug!(path = rel, "Created directory");
                self.report.record_directory(rel);
            }
            Err(e) => self.fail(rel, EntryKind::Directory, &e),
        }
    }

    fn file(&mut self, rel: &str, content: &str, note: Option<&str>) {
        match self.filesystem.write_file(&self.root.join(rel), content) {
            Ok(()) => {
                debug!(path = rel, bytes = content.len(), "Wrote file");
                self.report.record_file(rel, note);
            }
            Err(e) => self.fail(rel, EntryKind::File, &e),
        }
    }

    fn fail(&mut self, rel: &str, kind: EntryKind, error: &ArmatureError) {
        warn!(path = rel, error = %error, "Generation step failed");
        self.report.record_failure(rel, kind, error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::application::{ApplicationError, ports::output::MockFilesystem};
    use crate::domain::{BuildSystem, FeatureFlags};

    struct MapStore(BTreeMap<String, String>);

    impl MapStore {
        fn standard() -> Self {
            Self(
                [
                    ("README.md", "# {{project_name}}\n\n{{description}}\n\n{{project_structure}}"),
                    ("LICENSE", "Copyright (c) {{year}} {{author}}\n"),
                    (".gitignore", "*.o\n"),
                ]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            )
        }

        fn without(mut self, key: &str) -> Self {
            self.0.remove(key);
            self
        }
    }

    impl TemplateStore for MapStore {
        fn get(&self, key: &str) -> ArmatureResult<String> {
            self.0.get(key).cloned().ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    key: key.to_string(),
                }
                .into()
            })
        }
        fn contains(&self, key: &str) -> bool {
            self.0.contains_key(key)
        }
        fn keys(&self) -> Vec<String> {
            self.0.keys().cloned().collect()
        }
    }

    fn calc(archetype: Archetype) -> ProjectSpec {
        ProjectSpec::builder()
            .name("calc")
            .unwrap()
            .description("A calculator")
            .author("Ada")
            .archetype(archetype)
            .build_system(BuildSystem::CMake)
            .copyright_year(2026)
            .build()
            .unwrap()
    }

    fn accepting_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    #[test]
    fn missing_readme_aborts_before_touching_disk() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let generator = ProjectGenerator::new(
            Box::new(MapStore::standard().without("README.md")),
            Box::new(fs),
        );
        let err = generator
            .generate(&calc(Archetype::ConsoleApp), Path::new("/out"))
            .unwrap_err();
        assert!(matches!(
            err,
            ArmatureError::Application(ApplicationError::TemplateNotFound { ref key }) if key == "README.md"
        ));
    }

    #[test]
    fn missing_license_aborts_too() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(0);
        let generator = ProjectGenerator::new(
            Box::new(MapStore::standard().without("LICENSE")),
            Box::new(fs),
        );
        assert!(
            generator
                .generate(&calc(Archetype::ConsoleApp), Path::new("/out"))
                .is_err()
        );
    }

    #[test]
    fn write_failure_is_recorded_and_generation_continues() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            if path.ends_with("CMakeLists.txt") {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        let generator = ProjectGenerator::new(Box::new(MapStore::standard()), Box::new(fs));
        let report = generator
            .generate(&calc(Archetype::ConsoleApp), Path::new("/out"))
            .unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].path, "CMakeLists.txt");
        assert!(report.contains_file("README.md"));
        assert!(report.contains_file("LICENSE"));
    }

    #[test]
    fn failed_directory_is_recorded_as_a_directory() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            if path.ends_with("build") {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "read-only".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_write_file().returning(|_, _| Ok(()));

        let generator = ProjectGenerator::new(Box::new(MapStore::standard()), Box::new(fs));
        let report = generator
            .generate(&calc(Archetype::ConsoleApp), Path::new("/out"))
            .unwrap();

        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].path, "build");
        assert_eq!(report.failures()[0].kind, EntryKind::Directory);
        assert_eq!(
            report.attempted(),
            report.files().count() + report.directories().count() + 1
        );
    }

    #[test]
    fn files_are_written_under_project_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path.starts_with("/out/calc"))
            .returning(|_, _| Ok(()));

        let generator = ProjectGenerator::new(Box::new(MapStore::standard()), Box::new(fs));
        let report = generator
            .generate(&calc(Archetype::StaticLibrary), Path::new("/out"))
            .unwrap();
        assert_eq!(report.root(), Path::new("/out/calc"));
        assert!(!report.contains_file("src/main.cpp"));
    }

    #[test]
    fn missing_optional_template_fails_only_its_file() {
        let spec = ProjectSpec::builder()
            .name("calc")
            .unwrap()
            .features(FeatureFlags {
                data_dictionary: true,
                ..FeatureFlags::default()
            })
            .build()
            .unwrap();
        let generator = ProjectGenerator::new(Box::new(MapStore::standard()), Box::new(accepting_fs()));
        let report = generator.generate(&spec, Path::new("/out")).unwrap();

        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].path, "data_dictionary.md");
        assert!(report.contains_file(".gitignore"));
        assert!(report.contains_file("README.md"));
    }

    #[test]
    fn readme_without_slot_gets_structure_section() {
        let subs = Substitutions::new().with("project_name", "Calc");
        let readme = render_readme("# {{project_name}}", &subs, "calc/\n└── LICENSE\n");
        assert_eq!(
            readme,
            "# Calc\n\n## Project Structure\n\n```\ncalc/\n└── LICENSE\n```\n"
        );
    }
}
