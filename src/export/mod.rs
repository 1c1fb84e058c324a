//! Export functionality
//!
//! Transforms the domain model into ADF resource documents:
//! - Activities (all ten kinds, including nested loop and branch bodies)
//! - Datasets
//! - Linked services
//! - Pipelines and whole projects
//! - The PowerShell deployment script

pub mod activity;
pub mod dataset;
pub mod defaults;
pub mod deploy_script;
pub mod linked_service;
pub mod pipeline;
pub mod project;

use crate::models::{ActivityType, VariableType};

/// Result of a text export.
///
/// Contains the exported content and format identifier.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[must_use = "export results contain the exported content and should be used"]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
///
/// Any error is fatal for the project being generated.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Activity '{activity}' of type {kind} cannot be nested inside Until or IfCondition")]
    InvalidNesting {
        activity: String,
        kind: ActivityType,
    },
    #[error("Invalid {field} '{value}': {source}")]
    InvalidNumber {
        field: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Variable '{name}' has a default value '{value}' that is not a valid {variable_type}")]
    InvalidVariableDefault {
        name: String,
        variable_type: VariableType,
        value: String,
    },
    #[error("Activity '{activity}' has a body that is not valid JSON: {source}")]
    InvalidJsonBody {
        activity: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Cannot encode an empty {0} collection")]
    EmptyCollection(&'static str),
    #[error("Duplicate key '{key}' in {collection}")]
    DuplicateKey {
        collection: &'static str,
        key: String,
    },
    #[error("DataSet '{0}' declares both a JSON schema and a SQL table schema")]
    ConflictingSchemas(String),
}

// Re-export for convenience
pub use activity::{transform_activities, transform_activity};
pub use dataset::transform_dataset;
pub use defaults::ActivityDefaults;
pub use deploy_script::DeployScriptExporter;
pub use linked_service::transform_linked_service;
pub use pipeline::transform_pipeline;
pub use project::{build_project_document, build_project_documents};
