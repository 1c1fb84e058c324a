//! Validation functionality
//!
//! Provides validation logic for:
//! - Resource and activity names (length and characters ADF accepts)
//! - Activity dependencies (dangling, self-referencing and circular `dependsOn`)
//! - Project consistency (duplicate names, unknown references)

pub mod dependencies;
pub mod names;
pub mod project;

pub use dependencies::{DependencyIssue, DependencyValidator};
pub use names::{ValidationError, validate_activity_name, validate_resource_name};
pub use project::{ProjectValidationResult, ProjectValidator, ValidationIssue};
