//! Document model
//!
//! Serializable mirrors of the ADF ARM resource JSON. Documents are built by
//! the exporters in [`crate::export`] and handed to the writer; nothing here
//! performs validation or defaulting beyond the fixed values ADF expects.
//!
//! Absent optional fields are omitted from the output, never written as
//! `null`, and property names are camelCase.

pub mod activity;
pub mod common;
pub mod dataset;
pub mod keyed;
pub mod linked_service;
pub mod pipeline;
pub mod source;

use serde::Serialize;

pub const PIPELINE_RESOURCE_TYPE: &str = "Microsoft.DataFactory/factories/pipelines";
pub const DATASET_RESOURCE_TYPE: &str = "Microsoft.DataFactory/factories/datasets";
pub const LINKED_SERVICE_RESOURCE_TYPE: &str = "Microsoft.DataFactory/factories/linkedservices";

/// A top-level factory resource, written to its own file.
pub trait Resource: Serialize {
    /// Output folder, relative to the project directory.
    const FOLDER: &'static str;

    fn name(&self) -> &str;
}

/// All documents generated for one project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDocument {
    pub name: String,
    pub pipelines: Vec<pipeline::PipelineDocument>,
    pub datasets: Vec<dataset::DataSetDocument>,
    pub linked_services: Vec<linked_service::LinkedServiceDocument>,
}

impl ProjectDocument {
    /// Total number of resource documents.
    pub fn resource_count(&self) -> usize {
        self.pipelines.len() + self.datasets.len() + self.linked_services.len()
    }
}

pub use activity::{ActivityDocument, DependencyDocument, PolicyDocument, TypeProperties};
pub use common::{DynamicValue, Expression, Reference};
pub use dataset::{DataSetDocument, SchemaDocument};
pub use keyed::{KeyedEntry, KeyedObject};
pub use linked_service::LinkedServiceDocument;
pub use pipeline::PipelineDocument;
pub use source::{SinkDocument, SourceDocument, TranslatorDocument};
