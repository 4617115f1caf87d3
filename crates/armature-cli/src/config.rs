//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables: `ARMATURE_<SECTION>__<KEY>`, e.g.
//!    `ARMATURE_DEFAULTS__AUTHOR=Ada` or `ARMATURE_DEFAULTS__FEATURES__TESTS=true`
//! 3. Config file: `--config FILE` (must exist) or the per-user default
//!    location (optional)
//! 4. Built-in defaults
//!
//! ```toml
//! [defaults]
//! author = "Ada Lovelace"
//! archetype = "static"
//! build_system = "cmake"
//!
//! [defaults.features]
//! tests = true
//!
//! [project]          # only read with --no-input
//! name = "calc"
//! description = "A tiny calculator"
//!
//! [output]
//! directory = "~/src"
//!
//! [templates]
//! path = "./SQL"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use armature_core::domain::FeatureFlags;

const ENV_PREFIX: &str = "ARMATURE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults offered by the prompts.
    pub defaults: Defaults,
    /// Answers used verbatim by `--no-input`.
    pub project: ProjectAnswers,
    pub output: OutputConfig,
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: Option<String>,
    pub version: Option<String>,
    /// Any spelling `Archetype::from_str` accepts.
    pub archetype: Option<String>,
    /// `cmake` or `make`.
    pub build_system: Option<String>,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectAnswers {
    pub name: Option<String>,
    pub description: Option<String>,
    pub goal: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Parent directory for generated projects.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// `.sql` file or directory replacing the built-in pack.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    /// Missing keys keep their `Default` value.
    ///
    /// An explicit `config_file` must exist; the default location is skipped
    /// silently when absent.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;

        config
            .try_deserialize()
            .context("configuration has an invalid value")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.armature.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "armature", "armature")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".armature.toml"))
    }

    /// `--output` wins over `[output] directory`, which wins over `.`.
    pub fn output_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.output.directory.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// `--templates` wins over `[templates] path`; `None` means built-in.
    pub fn template_source(&self, flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.templates.path.clone())
    }
}
