//! Dataset model

use super::enums::{DataSetType, JsonItemType, LocationType, SqlColumnType, ValueType};
use super::project::Parameter;
use serde::{Deserialize, Serialize};

/// A named, typed description of a data location and shape.
///
/// At most one of `json_schema` and `sql_table_schema` is expected to be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    pub name: String,
    #[serde(rename = "type")]
    pub dataset_type: DataSetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_service: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Literal relative URL, or an expression when it contains `@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_url: Option<String>,
    /// Database schema name (not the column schema).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_schema: Option<JsonSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_table_schema: Option<SqlTableSchema>,
}

impl DataSet {
    pub fn new(name: impl Into<String>, dataset_type: DataSetType) -> Self {
        Self {
            name: name.into(),
            dataset_type,
            linked_service: None,
            parameters: Vec::new(),
            location: None,
            relative_url: None,
            schema: None,
            table: None,
            encoding: None,
            json_schema: None,
            sql_table_schema: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, rename = "type")]
    pub location_type: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<FileName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileName {
    pub value: String,
    #[serde(default, rename = "type")]
    pub value_type: ValueType,
}

/// Schema that unwraps an array of JSON objects found at `root`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSchema {
    pub root: String,
    #[serde(default, alias = "jsonItems")]
    pub items: Vec<JsonItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: JsonItemType,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlTableSchema {
    #[serde(default)]
    pub columns: Vec<SqlTableColumn>,
}

/// Azure SQL column. Precision and scale are decimal strings as written in
/// the model; parsing happens during export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlTableColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: SqlColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

impl SqlTableColumn {
    pub fn new(name: impl Into<String>, column_type: SqlColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            precision: None,
            scale: None,
        }
    }

    pub fn with_precision(mut self, precision: &str, scale: &str) -> Self {
        self.precision = Some(precision.to_string());
        self.scale = Some(scale.to_string());
        self
    }
}
