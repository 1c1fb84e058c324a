//! Models module
//!
//! The typed description of an Azure Data Factory project as authored:
//! projects, pipelines, activities, datasets and linked services. These are
//! inputs to the exporters and are never mutated by them.

pub mod activity;
pub mod dataset;
pub mod enums;
pub mod linked_service;
pub mod project;

pub use activity::{
    Activity, ActivityKind, AdditionalHeader, AzureFunctionActivity, CopyActivity,
    DatasetReference, Dependency, ExecutePipelineActivity, IfConditionActivity, JsonSource,
    LookupActivity, Mapping, MappingSink, MappingSource, PaginationRule, RestSource,
    SetVariableActivity, Sink, Source, SqlQuerySource, StoreSettings, StoredProcedureActivity,
    StoredProcedureParameter, Translator, UntilActivity, WaitActivity, WebActivity,
};
pub use dataset::{
    Container, DataSet, FileName, JsonItem, JsonSchema, Location, SqlTableColumn, SqlTableSchema,
};
pub use enums::*;
pub use linked_service::LinkedService;
pub use project::{Parameter, Pipeline, PipelineProperties, Project, ProjectSet, Variable};
