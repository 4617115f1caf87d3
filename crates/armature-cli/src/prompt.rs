//! Question flow that turns answers into a [`ProjectSpec`].
//!
//! The flow talks to a [`Prompter`] so it can run against the terminal
//! (`dialoguer`, behind the `interactive` feature) or a scripted list of
//! answers in tests. `--no-input` skips the flow and reads the configuration
//! instead.

use std::str::FromStr;

use tracing::debug;

use armature_core::domain::{
    Archetype, BuildSystem, DEFAULT_AUTHOR, DEFAULT_VERSION, DomainError, DomainValidator,
    FeatureFlags, ProjectSpec,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Source of answers.
pub trait Prompter {
    /// Free text. An empty answer returns `default`, or `""` without one.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> CliResult<String>;

    fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool>;

    /// Index into `items`.
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> CliResult<usize>;
}

#[cfg(feature = "interactive")]
pub use terminal::DialoguerPrompter;

#[cfg(feature = "interactive")]
mod terminal {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    use super::Prompter;
    use crate::error::CliResult;

    /// Prompts on the controlling terminal.
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }
    }

    impl Default for DialoguerPrompter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Prompter for DialoguerPrompter {
        fn input(&mut self, prompt: &str, default: Option<&str>) -> CliResult<String> {
            let mut input = Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true);
            if let Some(default) = default {
                input = input.default(default.to_string());
            }
            Ok(input.interact_text()?)
        }

        fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool> {
            Ok(Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(default)
                .interact()?)
        }

        fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> CliResult<usize> {
            Ok(Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(default)
                .interact()?)
        }
    }
}

/// Ask every question, re-asking name and version until they are valid.
///
/// A name that only clashes with a later answer (`main` for an application,
/// `LikertScale` with the survey module) is asked for again at the end.
pub fn collect_spec(
    prompter: &mut dyn Prompter,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<ProjectSpec> {
    let defaults = &config.defaults;

    let mut name = ask_name(prompter, config.project.name.as_deref(), output)?;

    let description = prompter.input("Project description", config.project.description.as_deref())?;
    let goal = prompter.input("Project goal", config.project.goal.as_deref())?;
    let author = prompter.input(
        "Author name",
        Some(defaults.author.as_deref().unwrap_or(DEFAULT_AUTHOR)),
    )?;

    let version = loop {
        let version = prompter.input(
            "Version",
            Some(defaults.version.as_deref().unwrap_or(DEFAULT_VERSION)),
        )?;
        let version = version.trim().to_string();
        if version.is_empty() {
            break version;
        }
        match DomainValidator::validate_version(&version) {
            Ok(()) => break version,
            Err(e) => output.warning(&e.to_string())?,
        }
    };

    let labels: Vec<&str> = Archetype::ALL.iter().map(|a| a.label()).collect();
    let default_archetype = default_archetype(config)?;
    let index = prompter.select(
        "Project type",
        &labels,
        Archetype::ALL
            .iter()
            .position(|a| *a == default_archetype)
            .unwrap_or(0),
    )?;
    let archetype = Archetype::ALL
        .get(index)
        .copied()
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("no project type at position {}", index + 1),
        })?;

    let use_cmake = prompter.confirm("Use CMake?", default_build_system(config)? == BuildSystem::CMake)?;

    let preset = defaults.features;
    let features = FeatureFlags {
        tests: prompter.confirm("Include unit tests?", preset.tests)?,
        gitignore: prompter.confirm("Include .gitignore?", preset.gitignore)?,
        survey_module: prompter.confirm("Include Likert Scale module for surveys?", preset.survey_module)?,
        data_dictionary: prompter.confirm("Include a Data Dictionary file?", preset.data_dictionary)?,
        privacy_policy: prompter.confirm("Include a PRIVACY_POLICY.md file?", preset.privacy_policy)?,
        build_dir: preset.build_dir,
    };

    let build_system = if use_cmake { BuildSystem::CMake } else { BuildSystem::Make };
    loop {
        let built = ProjectSpec::builder()
            .name(name.as_str())?
            .description(description.as_str())
            .goal(goal.as_str())
            .author(author.as_str())
            .version(version.as_str())
            .archetype(archetype)
            .build_system(build_system)
            .features(features)
            .build();
        match built {
            Ok(spec) => {
                debug!(%spec, "Answers collected");
                return Ok(spec);
            }
            Err(e @ DomainError::InvalidProjectName { .. }) => {
                output.warning(&e.to_string())?;
                name = ask_name(prompter, None, output)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// A name that passes the rules that need no other answer.
fn ask_name(
    prompter: &mut dyn Prompter,
    default: Option<&str>,
    output: &OutputManager,
) -> CliResult<String> {
    loop {
        let name = prompter.input("Project name (e.g. graph_analyzer, json_parser)", default)?;
        let name = name.trim();
        match DomainValidator::validate_name(name) {
            Ok(()) => return Ok(name.to_string()),
            Err(e) => output.warning(&e.to_string())?,
        }
    }
}

/// Build the spec from configuration alone (`--no-input`).
pub fn spec_from_config(config: &AppConfig) -> CliResult<ProjectSpec> {
    let defaults = &config.defaults;
    let name = config.project.name.as_deref().ok_or_else(|| CliError::InvalidInput {
        message: "--no-input needs [project] name in the configuration".into(),
    })?;

    let spec = ProjectSpec::builder()
        .name(name.trim())?
        .description(config.project.description.clone().unwrap_or_default())
        .goal(config.project.goal.clone().unwrap_or_default())
        .author(defaults.author.clone().unwrap_or_default())
        .version(defaults.version.clone().unwrap_or_default())
        .archetype(default_archetype(config)?)
        .build_system(default_build_system(config)?)
        .features(defaults.features)
        .build()?;
    debug!(%spec, "Answers taken from configuration");
    Ok(spec)
}

fn default_archetype(config: &AppConfig) -> CliResult<Archetype> {
    match config.defaults.archetype.as_deref() {
        Some(value) => Ok(Archetype::from_str(value)?),
        None => Ok(Archetype::ConsoleApp),
    }
}

fn default_build_system(config: &AppConfig) -> CliResult<BuildSystem> {
    match config.defaults.build_system.as_deref() {
        Some(value) => Ok(BuildSystem::from_str(value)?),
        None => Ok(BuildSystem::default()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    /// Replays answers in order; `None` means "press enter".
    enum Answer {
        Text(Option<&'static str>),
        Yes,
        No,
        Default,
        Pick(usize),
    }

    struct Scripted(VecDeque<Answer>);

    impl Scripted {
        fn next(&mut self) -> Answer {
            self.0.pop_front().expect("script ran out of answers")
        }
    }

    impl Prompter for Scripted {
        fn input(&mut self, _: &str, default: Option<&str>) -> CliResult<String> {
            match self.next() {
                Answer::Text(Some(text)) => Ok(text.to_string()),
                Answer::Text(None) | Answer::Default => Ok(default.unwrap_or("").to_string()),
                _ => panic!("expected a text answer"),
            }
        }

        fn confirm(&mut self, _: &str, default: bool) -> CliResult<bool> {
            match self.next() {
                Answer::Yes => Ok(true),
                Answer::No => Ok(false),
                Answer::Default => Ok(default),
                _ => panic!("expected a yes/no answer"),
            }
        }

        fn select(&mut self, _: &str, items: &[&str], default: usize) -> CliResult<usize> {
            assert_eq!(items.len(), 6);
            match self.next() {
                Answer::Pick(i) => Ok(i),
                Answer::Default => Ok(default),
                _ => panic!("expected a menu answer"),
            }
        }
    }

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn full_question_sequence() {
        use Answer::*;
        let mut prompter = Scripted(VecDeque::from([
            Text(Some("calc")),
            Text(Some("Calculator")),
            Text(Some("Add numbers")),
            Text(Some("Ada")),
            Text(None),
            Pick(1),
            Yes,
            Yes,
            No,
            No,
            No,
            Yes,
        ]));

        let spec = collect_spec(&mut prompter, &AppConfig::default(), &quiet_output()).unwrap();
        assert_eq!(spec.name(), "calc");
        assert_eq!(spec.author(), "Ada");
        assert_eq!(spec.version(), DEFAULT_VERSION);
        assert_eq!(spec.archetype(), Archetype::StaticLibrary);
        assert_eq!(spec.build_system(), BuildSystem::CMake);
        let features = spec.features();
        assert!(features.tests);
        assert!(!features.gitignore);
        assert!(features.privacy_policy);
        assert!(prompter.0.is_empty());
    }

    #[test]
    fn invalid_name_and_version_are_asked_again() {
        use Answer::*;
        let mut prompter = Scripted(VecDeque::from([
            Text(Some("9lives")),
            Text(Some("class")),
            Text(Some("calc")),
            Default,
            Default,
            Default,
            Text(Some("one.two")),
            Text(Some("2.1")),
            Default,
            Default,
            Default,
            Default,
            Default,
            Default,
            Default,
        ]));

        let spec = collect_spec(&mut prompter, &AppConfig::default(), &quiet_output()).unwrap();
        assert_eq!(spec.name(), "calc");
        assert_eq!(spec.version(), "2.1");
        assert_eq!(spec.author(), DEFAULT_AUTHOR);
        assert_eq!(spec.archetype(), Archetype::ConsoleApp);
        assert_eq!(spec.build_system(), BuildSystem::Make);
        assert_eq!(spec.features(), FeatureFlags::default());
        assert!(prompter.0.is_empty());
    }

    #[test]
    fn name_clashing_with_later_answers_is_asked_again() {
        use Answer::*;
        let mut prompter = Scripted(VecDeque::from([
            Text(Some("LikertScale")),
            Default,
            Default,
            Default,
            Default,
            Default,
            Default,
            Default,
            Default,
            Yes,
            Default,
            Default,
            Text(Some("main")),
            Text(Some("survey")),
        ]));

        let spec = collect_spec(&mut prompter, &AppConfig::default(), &quiet_output()).unwrap();
        assert_eq!(spec.name(), "survey");
        assert!(spec.features().survey_module);
        assert_eq!(spec.archetype(), Archetype::ConsoleApp);
        assert!(prompter.0.is_empty());
    }

    #[test]
    fn config_supplies_prompt_defaults() {
        let mut config = AppConfig::default();
        config.defaults.author = Some("Grace".into());
        config.defaults.archetype = Some("header-only".into());
        config.defaults.build_system = Some("cmake".into());
        config.defaults.features.tests = true;
        config.project.name = Some("mathlib".into());

        let mut prompter = Scripted((0..12).map(|_| Answer::Default).collect());
        let spec = collect_spec(&mut prompter, &config, &quiet_output()).unwrap();
        assert_eq!(spec.name(), "mathlib");
        assert_eq!(spec.author(), "Grace");
        assert_eq!(spec.archetype(), Archetype::HeaderOnly);
        assert_eq!(spec.build_system(), BuildSystem::CMake);
        assert!(spec.features().tests);
    }

    #[test]
    fn no_input_reads_everything_from_config() {
        let mut config = AppConfig::default();
        config.project.name = Some("calc".into());
        config.project.description = Some("Calculator".into());
        config.defaults.archetype = Some("gui".into());

        let spec = spec_from_config(&config).unwrap();
        assert_eq!(spec.name(), "calc");
        assert_eq!(spec.description(), "Calculator");
        assert_eq!(spec.archetype(), Archetype::GuiApp);
        assert_eq!(spec.author(), DEFAULT_AUTHOR);
    }

    #[test]
    fn no_input_without_a_name_is_rejected() {
        let err = spec_from_config(&AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn unknown_archetype_in_config_is_an_error() {
        let mut config = AppConfig::default();
        config.project.name = Some("calc".into());
        config.defaults.archetype = Some("plugin".into());
        assert!(matches!(spec_from_config(&config), Err(CliError::Core(_))));
    }
}
