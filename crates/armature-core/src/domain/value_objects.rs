//! Domain value objects: Archetype, ArchetypeFamily, BuildSystem.
//!
//! # Design
//!
//! These are pure `Copy` value types compared by value.
//! Everything that depends only on the archetype (which structural files are
//! mandatory, which CMake target kind it produces) lives here as a `const fn`
//! so the generator never re-derives it.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Place it in a family in `family()`
//! 4. Add its content arms in `content/`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Archetype ────────────────────────────────────────────────────────────────

/// A supported project shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    ConsoleApp,
    StaticLibrary,
    SharedLibrary,
    HeaderOnly,
    GuiApp,
    UnitTestHarness,
}

impl Archetype {
    /// All archetypes in menu order.
    pub const ALL: [Archetype; 6] = [
        Self::ConsoleApp,
        Self::StaticLibrary,
        Self::SharedLibrary,
        Self::HeaderOnly,
        Self::GuiApp,
        Self::UnitTestHarness,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConsoleApp => "console",
            Self::StaticLibrary => "static",
            Self::SharedLibrary => "shared",
            Self::HeaderOnly => "header-only",
            Self::GuiApp => "gui",
            Self::UnitTestHarness => "test-harness",
        }
    }

    /// Human label used by menus and summaries.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ConsoleApp => "Console Application",
            Self::StaticLibrary => "Static Library",
            Self::SharedLibrary => "Shared Library",
            Self::HeaderOnly => "Header-Only Library",
            Self::GuiApp => "GUI Application",
            Self::UnitTestHarness => "Unit Test Framework",
        }
    }

    pub const fn family(&self) -> ArchetypeFamily {
        match self {
            Self::ConsoleApp | Self::GuiApp => ArchetypeFamily::App,
            Self::StaticLibrary | Self::SharedLibrary | Self::HeaderOnly => {
                ArchetypeFamily::Library
            }
            Self::UnitTestHarness => ArchetypeFamily::TestHarness,
        }
    }

    /// Libraries never get `src/main.cpp`.
    pub const fn has_entry_point(&self) -> bool {
        !matches!(self.family(), ArchetypeFamily::Library)
    }

    /// Header-only projects never get a `src/` directory.
    pub const fn has_sources(&self) -> bool {
        !matches!(self, Self::HeaderOnly)
    }

    /// Whether the build descriptor produces a runnable program.
    pub const fn is_executable(&self) -> bool {
        self.has_entry_point()
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" | "console-app" | "app" => Ok(Self::ConsoleApp),
            "static" | "static-library" | "static-lib" => Ok(Self::StaticLibrary),
            "shared" | "shared-library" | "shared-lib" | "dynamic" => Ok(Self::SharedLibrary),
            "header-only" | "header" | "headeronly" => Ok(Self::HeaderOnly),
            "gui" | "gui-app" => Ok(Self::GuiApp),
            "test-harness" | "unit-test-harness" | "test" | "unit-test" | "tests" => Ok(Self::UnitTestHarness),
            _ => Err(DomainError::UnknownArchetype(s.to_string())),
        }
    }
}

// ── ArchetypeFamily ──────────────────────────────────────────────────────────

/// Archetypes grouped by the class body their header declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchetypeFamily {
    /// `run/shutdown/initialize/update/cleanup` plus `appName`/`isRunning`.
    App,
    /// `process()`/`getVersion()` plus a free-function utils namespace.
    Library,
    /// Pass/fail counters and the `runAllTests` suite.
    TestHarness,
}

// ── BuildSystem ──────────────────────────────────────────────────────────────

/// Which build descriptor a project gets. Exactly one is ever emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    CMake,
    #[default]
    Make,
}

impl BuildSystem {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CMake => "cmake",
            Self::Make => "make",
        }
    }

    /// File name of the descriptor at the project root.
    pub const fn descriptor(&self) -> &'static str {
        match self {
            Self::CMake => "CMakeLists.txt",
            Self::Make => "Makefile",
        }
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cmake" => Ok(Self::CMake),
            "make" | "makefile" => Ok(Self::Make),
            _ => Err(DomainError::UnknownBuildSystem(s.to_string())),
        }
    }
}
