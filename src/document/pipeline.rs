//! Pipeline documents

use super::activity::ActivityDocument;
use super::keyed::KeyedObject;
use super::{PIPELINE_RESOURCE_TYPE, Resource};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub properties: PipelineProperties,
}

impl PipelineDocument {
    pub fn new(name: impl Into<String>, properties: PipelineProperties) -> Self {
        Self {
            name: name.into(),
            resource_type: PIPELINE_RESOURCE_TYPE,
            properties,
        }
    }
}

impl Resource for PipelineDocument {
    const FOLDER: &'static str = "Pipelines";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineProperties {
    pub activities: Vec<ActivityDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<KeyedObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<KeyedObject>,
    pub annotations: Vec<String>,
}
