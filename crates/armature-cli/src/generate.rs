//! The single Armature command: collect answers, generate, report.
//!
//! Responsibility: wire adapters to the core generator and talk to the user.
//! No generation logic lives here.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use armature_adapters::{LocalFilesystem, builtin_templates};
use armature_core::{
    application::{ProjectGenerator, ports::Filesystem},
    domain::{BuildSystem, GenerationReport, ProjectSpec},
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{self, Prompter},
};

/// `--output-format json` document.
#[derive(Serialize)]
struct JsonResult<'a> {
    project: &'a str,
    version: &'a str,
    archetype: String,
    build_system: String,
    template_warnings: Vec<String>,
    report: &'a GenerationReport,
}

/// Run one generation.
///
/// 1. Load templates (a bad `--templates` path fails before any question)
/// 2. Collect answers from prompts or, with `--no-input`, from config
/// 3. Show the summary and confirm unless `--yes`
/// 4. Generate and print per-file failures
/// 5. Print next steps, or fail with [`CliError::PartialGeneration`]
#[instrument(skip_all, fields(no_input = args.no_input))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    // 1. Templates
    let source = config.template_source(args.templates.as_deref());
    let (store, warnings) = builtin_templates::load(source.as_deref())?;

    let output_dir = config.output_dir(args.output.as_deref());

    // 2-3. Answers
    let spec = if args.no_input {
        let spec = prompt::spec_from_config(&config)?;
        show_summary(&spec, &output_dir, output)?;
        spec
    } else {
        let mut prompter = terminal_prompter()?;
        output.header("=== Armature: C++ project generator ===")?;
        let spec = prompt::collect_spec(prompter.as_mut(), &config, output)?;
        show_summary(&spec, &output_dir, output)?;
        if !args.yes && !prompter.confirm("Generate this project?", true)? {
            return Err(CliError::Cancelled);
        }
        spec
    };

    // 4. Generate
    let filesystem = LocalFilesystem::new();
    let project_path = output_dir.join(spec.name());
    if let Some(warning) = overwrite_warning(&filesystem, &project_path) {
        output.warning(&warning)?;
    }

    let generator = ProjectGenerator::new(Box::new(store), Box::new(filesystem));
    output.header(&format!("Creating '{}'...", spec.name()))?;
    let report = generator.generate(&spec, &output_dir)?;

    for failure in report.failures() {
        output.error(&format!("{}: {}", failure.path, failure.reason))?;
    }

    output.json(&JsonResult {
        project: spec.name(),
        version: spec.version(),
        archetype: spec.archetype().to_string(),
        build_system: spec.build_system().to_string(),
        template_warnings: warnings.iter().map(ToString::to_string).collect(),
        report: &report,
    })?;

    if !report.is_success() {
        return Err(CliError::PartialGeneration {
            failed: report.failures().len(),
            total: report.attempted(),
        });
    }

    // 5. Next steps
    info!(project = %spec.name(), files = report.files().count(), "Generation completed");
    output.success(&format!(
        "Project '{}' created at {}",
        spec.name(),
        project_path.display()
    ))?;
    print_next_steps(&spec, output)?;

    Ok(())
}

#[cfg(feature = "interactive")]
fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    Ok(Box::new(prompt::DialoguerPrompter::new()))
}

#[cfg(not(feature = "interactive"))]
fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

fn show_summary(spec: &ProjectSpec, output_dir: &Path, output: &OutputManager) -> CliResult<()> {
    let features = spec.features();
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    output.print("")?;
    output.header("Project summary")?;
    output.field("Name", spec.name())?;
    if !spec.description().is_empty() {
        output.field("Description", spec.description())?;
    }
    if !spec.goal().is_empty() {
        output.field("Goal", spec.goal())?;
    }
    output.field("Author", spec.author())?;
    output.field("Version", spec.version())?;
    output.field("Type", spec.archetype().label())?;
    output.field("Build system", spec.build_system().descriptor())?;
    output.field("Unit tests", yes_no(features.tests))?;
    output.field(".gitignore", yes_no(features.gitignore))?;
    output.field("Survey module", yes_no(features.survey_module))?;
    output.field("Data dictionary", yes_no(features.data_dictionary))?;
    output.field("Privacy policy", yes_no(features.privacy_policy))?;
    output.field(
        "Location",
        &output_dir.join(spec.name()).display().to_string(),
    )?;
    output.print("")?;
    Ok(())
}

fn next_steps(spec: &ProjectSpec) -> Vec<String> {
    let mut steps = vec![format!("cd {}", spec.name())];
    match spec.build_system() {
        BuildSystem::CMake => {
            steps.push("mkdir -p build && cd build".into());
            steps.push("cmake ..".into());
            steps.push("make".into());
        }
        BuildSystem::Make => steps.push("make".into()),
    }
    if spec.archetype().is_executable() {
        steps.push(format!("./{}", spec.name()));
    }
    steps
}

fn print_next_steps(spec: &ProjectSpec, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.print("Next steps:")?;
    for (i, step) in next_steps(spec).iter().enumerate() {
        output.print(&format!("  {}. {}", i + 1, step))?;
    }
    Ok(())
}

/// Regeneration overwrites in place; say so before it happens.
fn overwrite_warning(filesystem: &dyn Filesystem, project_path: &Path) -> Option<String> {
    filesystem.exists(project_path).then(|| {
        format!(
            "{} already exists; generated files will be overwritten",
            project_path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_adapters::MemoryFilesystem;
    use armature_core::domain::Archetype;

    fn spec(archetype: Archetype, build_system: BuildSystem) -> ProjectSpec {
        ProjectSpec::builder()
            .name("calc")
            .unwrap()
            .archetype(archetype)
            .build_system(build_system)
            .build()
            .unwrap()
    }

    #[test]
    fn existing_project_directory_is_announced() {
        let fs = MemoryFilesystem::new();
        let project = Path::new("/work/calc");
        assert!(overwrite_warning(&fs, project).is_none());

        fs.create_dir_all(project).unwrap();
        let warning = overwrite_warning(&fs, project).unwrap();
        assert!(warning.starts_with("/work/calc already exists"));
    }

    #[test]
    fn cmake_console_steps() {
        assert_eq!(
            next_steps(&spec(Archetype::ConsoleApp, BuildSystem::CMake)),
            ["cd calc", "mkdir -p build && cd build", "cmake ..", "make", "./calc"]
        );
    }

    #[test]
    fn make_library_steps_have_no_run_command() {
        assert_eq!(
            next_steps(&spec(Archetype::StaticLibrary, BuildSystem::Make)),
            ["cd calc", "make"]
        );
    }
}
