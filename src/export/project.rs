//! Project assembly
//!
//! Drives the pipeline, dataset and linked service exporters for a whole
//! project. Documents are fully built before anything is written, so a failure
//! anywhere leaves no partial output behind.

use super::ExportError;
use super::dataset::transform_dataset;
use super::linked_service::transform_linked_service;
use super::pipeline::transform_pipeline;
use crate::document::ProjectDocument;
use crate::models::{Project, ProjectSet};
use tracing::info;

/// Build every document of a project.
///
/// # Example
///
/// ```rust
/// use adf_codegen::export::build_project_document;
/// use adf_codegen::models::Project;
///
/// let document = build_project_document(&Project::new("Empty")).unwrap();
/// assert_eq!(document.resource_count(), 0);
/// ```
pub fn build_project_document(project: &Project) -> Result<ProjectDocument, ExportError> {
    let pipelines = project
        .pipelines
        .iter()
        .map(transform_pipeline)
        .collect::<Result<Vec<_>, _>>()?;
    let datasets = project
        .datasets
        .iter()
        .map(transform_dataset)
        .collect::<Result<Vec<_>, _>>()?;
    let linked_services = project
        .linked_services
        .iter()
        .map(transform_linked_service)
        .collect();

    let document = ProjectDocument {
        name: project.name.clone(),
        pipelines,
        datasets,
        linked_services,
    };

    info!(
        "Built project '{}': {} pipelines, {} datasets, {} linked services",
        document.name,
        document.pipelines.len(),
        document.datasets.len(),
        document.linked_services.len()
    );
    Ok(document)
}

/// Build the documents of every project in a model file, stopping at the
/// first failing project.
pub fn build_project_documents(set: &ProjectSet) -> Result<Vec<ProjectDocument>, ExportError> {
    set.projects.iter().map(build_project_document).collect()
}
