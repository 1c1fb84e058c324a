//! ADF Codegen - Azure Data Factory resource generation
//!
//! Turns a typed project model into the JSON documents Azure Data Factory
//! deploys, plus a PowerShell script that deploys them.
//!
//! Provides:
//! - The project model (`models`) and its YAML/JSON loader (`model`)
//! - The ADF document shapes (`document`)
//! - Transforms from model to documents (`export`)
//! - Project validation (`validation`)
//! - A command-line front end (`cli`, behind the `cli` feature)
//!
//! # Example
//!
//! ```rust
//! use adf_codegen::export::build_project_document;
//! use adf_codegen::models::{LinkedService, LinkedServiceType, Project};
//!
//! let mut project = Project::new("Sales");
//! project
//!     .linked_services
//!     .push(LinkedService::new("Lake", LinkedServiceType::AzureBlobStorage));
//!
//! let document = build_project_document(&project).unwrap();
//! let json = serde_json::to_value(&document.linked_services[0]).unwrap();
//! assert_eq!(json["properties"]["type"], "AzureBlobStorage");
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod document;
pub mod export;
pub mod model;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use document::{ProjectDocument, Resource};
pub use export::{
    DeployScriptExporter, ExportError, ExportResult, build_project_document,
    build_project_documents,
};
pub use model::{LoadError, ModelFormat, ModelLoader, ProjectWriter, WriteSummary, WriterOptions};
pub use validation::{ProjectValidationResult, ProjectValidator, ValidationIssue};

// Re-export models
pub use models::enums::*;
pub use models::{Activity, ActivityKind, DataSet, LinkedService, Pipeline, Project, ProjectSet};
