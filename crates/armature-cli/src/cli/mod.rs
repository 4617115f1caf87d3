//! CLI argument definitions using the clap derive API.
//!
//! Armature has no subcommands: one invocation runs one question sequence and
//! generates one project. This module only knows flag names and help text.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "armature",
    bin_name = "armature",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "C++ project skeleton generator",
    long_about = "Armature asks a few questions about a C++ project and writes a \
                  ready-to-build skeleton: header, sources, tests, a CMake or Make \
                  build and the usual documents.",
    after_help = "EXAMPLES:\n\
        \x20 armature                                  # ask everything interactively\n\
        \x20 armature -o ~/src -t ./SQL                # custom output dir and templates\n\
        \x20 armature --no-input -c calc.toml --yes    # answers from a config file",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Where to generate and how to collect answers.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory the project folder is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory for the project (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Template source: a single `.sql` file or a directory of them.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "PATH",
        help = "Template source file or directory (default: built-in pack)"
    )]
    pub templates: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Generate without asking for confirmation")]
    pub yes: bool,

    /// Take every answer from configuration.
    #[arg(
        long = "no-input",
        help = "Never prompt; read answers from the configuration file and environment"
    )]
    pub no_input: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
