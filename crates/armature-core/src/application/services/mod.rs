//! Application services (use case orchestration).

mod project_generator;

pub use project_generator::ProjectGenerator;
