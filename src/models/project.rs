//! Project and pipeline models

use super::activity::Activity;
use super::dataset::DataSet;
use super::enums::{ParameterType, VariableType};
use super::linked_service::LinkedService;
use serde::{Deserialize, Serialize};

/// An Azure Data Factory project: the unit of generation.
///
/// Pipeline, dataset and linked service names must be unique within their own
/// list, since generated files are keyed by name.
///
/// # Example
///
/// ```rust
/// use adf_codegen::models::Project;
///
/// let project = Project::new("SalesFactory");
/// assert!(project.pipelines.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub pipelines: Vec<Pipeline>,
    #[serde(default, alias = "dataSets")]
    pub datasets: Vec<DataSet>,
    #[serde(default)]
    pub linked_services: Vec<LinkedService>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pipelines: Vec::new(),
            datasets: Vec::new(),
            linked_services: Vec::new(),
        }
    }
}

/// Root of a model file, which may describe several projects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSet {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub name: String,
    #[serde(default)]
    pub properties: PipelineProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineProperties {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// A named, typed parameter. `value` is only meaningful where a parameter is
/// being supplied (dataset references, ExecutePipeline); pipeline-level
/// declarations ignore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, parameter_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            parameter_type,
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub variable_type: VariableType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Variable {
    pub fn new(
        name: impl Into<String>,
        variable_type: VariableType,
        default_value: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            variable_type,
            default_value: default_value.map(str::to_string),
        }
    }
}
