//! Armature Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Armature
//! C++ project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          armature-cli (CLI)             │
//! │     prompts, config, output, exit codes │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ProjectGenerator)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: TemplateStore, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     armature-adapters (Infrastructure)  │
//! │ (InMemoryStore, template loader, fs)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectSpec, content builders, report) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use armature_core::prelude::*;
//!
//! let spec = ProjectSpec::builder()
//!     .name("calc")?
//!     .archetype(Archetype::ConsoleApp)
//!     .build_system(BuildSystem::CMake)
//!     .build()?;
//!
//! let generator = ProjectGenerator::new(store, filesystem);
//! let report = generator.generate(&spec, Path::new("."))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ProjectGenerator,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        Archetype, BuildSystem, DomainError, FeatureFlags, GenerationReport, ProjectSpec,
        Substitutions,
    };
    pub use crate::error::{ArmatureError, ArmatureResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
