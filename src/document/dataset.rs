//! Dataset documents

use super::common::{DynamicValue, Reference};
use super::keyed::KeyedObject;
use super::{DATASET_RESOURCE_TYPE, Resource};
use crate::models::{DataSetType, LocationType, SqlColumnType};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSetDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub properties: DataSetProperties,
}

impl DataSetDocument {
    pub fn new(name: impl Into<String>, properties: DataSetProperties) -> Self {
        Self {
            name: name.into(),
            resource_type: DATASET_RESOURCE_TYPE,
            properties,
        }
    }
}

impl Resource for DataSetDocument {
    const FOLDER: &'static str = "DataSets";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_service_name: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<KeyedObject>,
    pub annotations: Vec<String>,
    #[serde(rename = "type")]
    pub dataset_type: DataSetType,
    pub type_properties: DataSetTypeProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaDocument>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetTypeProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_url: Option<DynamicValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDocument {
    #[serde(rename = "type")]
    pub location_type: LocationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<DynamicValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

/// Dataset `schema`: either a JSON unwrap schema or a SQL column list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaDocument {
    Json(JsonObjectSchema),
    SqlTable(Vec<SqlColumnDocument>),
}

/// `{"type": "object", "properties": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonObjectSchema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub properties: Map<String, Value>,
}

impl JsonObjectSchema {
    pub fn new(properties: Map<String, Value>) -> Self {
        Self {
            schema_type: "object",
            properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlColumnDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: SqlColumnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}
