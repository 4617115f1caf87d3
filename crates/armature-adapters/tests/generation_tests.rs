//! End-to-end generation against a real directory with the built-in pack.

use std::fs;
use std::path::Path;

use armature_adapters::{LocalFilesystem, MemoryFilesystem, builtin_templates};
use armature_core::prelude::*;
use tempfile::TempDir;

fn generator(fs: impl Filesystem + 'static) -> ProjectGenerator {
    let (store, warnings) = builtin_templates::load(None).unwrap();
    assert!(warnings.is_empty());
    ProjectGenerator::new(Box::new(store), Box::new(fs))
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap_or_else(|e| panic!("{rel}: {e}"))
}

#[test]
fn console_app_on_disk() {
    let dir = TempDir::new().unwrap();
    let spec = ProjectSpec::builder()
        .name("calc")
        .unwrap()
        .description("Calculator")
        .goal("Add numbers")
        .author("Ada")
        .archetype(Archetype::ConsoleApp)
        .build_system(BuildSystem::CMake)
        .copyright_year(2030)
        .build()
        .unwrap();

    let report = generator(LocalFilesystem::new())
        .generate(&spec, dir.path())
        .unwrap();
    assert!(report.is_success());

    let root = dir.path().join("calc");
    for rel in [
        "src/main.cpp",
        "src/calc.cpp",
        "include/calc.h",
        "CMakeLists.txt",
        ".gitignore",
        "README.md",
        "LICENSE",
    ] {
        assert!(root.join(rel).is_file(), "missing {rel}");
    }
    assert!(root.join("build").is_dir());
    assert!(!root.join("Makefile").exists());

    let readme = read(&root, "README.md");
    assert!(readme.starts_with("# Calc\n\n## Description\nCalculator"));
    assert!(readme.contains("calc/\n"));
    assert!(readme.contains("main.cpp"));
    assert!(readme.contains("# Entry point"));
    assert!(!readme.contains("{{"));

    let license = read(&root, "LICENSE");
    assert!(license.contains("Copyright (c) 2030 Ada"));

    let gitignore = read(&root, ".gitignore");
    assert!(gitignore.contains("*.o"));
    assert!(gitignore.ends_with("# Project specific\ncalc\ncalc_tests\n"));
}

#[test]
fn header_only_library_with_tests_and_make() {
    let dir = TempDir::new().unwrap();
    let spec = ProjectSpec::builder()
        .name("mathlib")
        .unwrap()
        .archetype(Archetype::HeaderOnly)
        .build_system(BuildSystem::Make)
        .features(FeatureFlags {
            tests: true,
            ..FeatureFlags::default()
        })
        .build()
        .unwrap();

    let report = generator(LocalFilesystem::new())
        .generate(&spec, dir.path())
        .unwrap();
    assert!(report.is_success());

    let root = dir.path().join("mathlib");
    assert!(root.join("include/mathlib.h").is_file());
    assert!(root.join("tests/test_mathlib.cpp").is_file());
    assert!(root.join("Makefile").is_file());
    assert!(!root.join("src").exists());

    let readme = read(&root, "README.md");
    assert!(!readme.contains("src/\n"));
    assert!(readme.contains("test_mathlib.cpp"));
}

#[test]
fn research_documents_come_from_the_pack() {
    let fs = MemoryFilesystem::new();
    let spec = ProjectSpec::builder()
        .name("study")
        .unwrap()
        .author("Grace")
        .features(FeatureFlags {
            survey_module: true,
            data_dictionary: true,
            privacy_policy: true,
            ..FeatureFlags::default()
        })
        .build()
        .unwrap();

    let report = generator(fs.clone()).generate(&spec, Path::new("/w")).unwrap();
    assert!(report.is_success());

    let dictionary = fs
        .read_file(Path::new("/w/study/data_dictionary.md"))
        .unwrap();
    assert!(dictionary.starts_with("# Data Dictionary for study"));
    let privacy = fs.read_file(Path::new("/w/study/PRIVACY_POLICY.md")).unwrap();
    assert!(privacy.contains("how Grace collects"));
    assert!(fs.exists(Path::new("/w/study/include/LikertScale.h")));
    assert!(fs.exists(Path::new("/w/study/src/LikertScale.cpp")));
}

#[test]
fn a_failed_write_is_reported_not_fatal() {
    let fs = MemoryFilesystem::new();
    fs.fail_on("/w/calc/Makefile");
    let spec = ProjectSpec::builder().name("calc").unwrap().build().unwrap();

    let report = generator(fs.clone()).generate(&spec, Path::new("/w")).unwrap();
    assert!(!report.is_success());
    assert_eq!(report.failures()[0].path, "Makefile");
    assert!(fs.exists(Path::new("/w/calc/LICENSE")));

    let readme = fs.read_file(Path::new("/w/calc/README.md")).unwrap();
    assert!(!readme.contains("Makefile"));
}

#[test]
fn regenerating_overwrites_in_place() {
    let dir = TempDir::new().unwrap();
    let build = |author: &str| {
        ProjectSpec::builder()
            .name("calc")
            .unwrap()
            .author(author)
            .build()
            .unwrap()
    };

    generator(LocalFilesystem::new())
        .generate(&build("First"), dir.path())
        .unwrap();
    generator(LocalFilesystem::new())
        .generate(&build("Second"), dir.path())
        .unwrap();

    let license = read(&dir.path().join("calc"), "LICENSE");
    assert!(license.contains("Second"));
    assert!(!license.contains("First"));
}

#[test]
fn missing_mandatory_template_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let store = armature_adapters::InMemoryStore::new().with_template("LICENSE", "MIT");
    let generator = ProjectGenerator::new(Box::new(store), Box::new(fs.clone()));
    let spec = ProjectSpec::builder().name("calc").unwrap().build().unwrap();

    let err = generator.generate(&spec, Path::new("/w")).unwrap_err();
    assert!(err.to_string().contains("README.md"));
    assert!(fs.list_files().is_empty());
    assert!(fs.list_directories().is_empty());
}
