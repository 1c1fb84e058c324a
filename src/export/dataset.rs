//! Dataset exporter

use super::ExportError;
use crate::document::common::{DynamicValue, Reference};
use crate::document::dataset::{
    DataSetDocument, DataSetProperties, DataSetTypeProperties, JsonObjectSchema,
    LocationDocument, SchemaDocument, SqlColumnDocument,
};
use crate::document::keyed;
use crate::models::{
    DataSet, FileName, JsonSchema, Location, SqlTableColumn, SqlTableSchema, ValueType,
};
use serde_json::{Map, Value, json};
use tracing::debug;

/// Precision ADF expects for integer-family SQL columns.
pub const INTEGER_PRECISION: u32 = 10;

/// Transform one dataset.
///
/// # Errors
///
/// - [`ExportError::ConflictingSchemas`] when both a JSON and a SQL table
///   schema are present.
/// - [`ExportError::InvalidNumber`] for a precision or scale that is not a
///   non-negative integer.
/// - Keyed encoding errors from the dataset parameters.
pub fn transform_dataset(dataset: &DataSet) -> Result<DataSetDocument, ExportError> {
    let schema = match (&dataset.json_schema, &dataset.sql_table_schema) {
        (Some(_), Some(_)) => return Err(ExportError::ConflictingSchemas(dataset.name.clone())),
        (Some(json), None) => Some(json_schema(json)),
        (None, Some(table)) => Some(sql_table_schema(table)?),
        (None, None) => None,
    };

    let properties = DataSetProperties {
        linked_service_name: dataset.linked_service.as_ref().map(Reference::linked_service),
        parameters: keyed::encode_non_empty(&dataset.parameters, "parameters")?,
        annotations: Vec::new(),
        dataset_type: dataset.dataset_type,
        type_properties: type_properties(dataset),
        schema,
    };

    debug!("Transformed {} dataset '{}'", dataset.dataset_type, dataset.name);
    Ok(DataSetDocument::new(&dataset.name, properties))
}

fn type_properties(dataset: &DataSet) -> DataSetTypeProperties {
    DataSetTypeProperties {
        location: dataset.location.as_ref().map(location),
        relative_url: dataset.relative_url.as_deref().map(relative_url),
        encoding_name: dataset.encoding.clone(),
        schema: dataset.schema.clone(),
        table: dataset.table.clone(),
    }
}

/// A relative URL is treated as an expression whenever it contains `@`.
fn relative_url(url: &str) -> DynamicValue {
    if url.contains('@') {
        DynamicValue::expression(url)
    } else {
        DynamicValue::Literal(url.to_string())
    }
}

fn location(location: &Location) -> LocationDocument {
    LocationDocument {
        location_type: location.location_type,
        file_name: location.file_name.as_ref().map(file_name),
        folder_path: location
            .container
            .as_ref()
            .and_then(|container| container.folder_path.clone()),
        container: location.container.as_ref().map(|container| container.name.clone()),
    }
}

fn file_name(file_name: &FileName) -> DynamicValue {
    match file_name.value_type {
        ValueType::Default => DynamicValue::Literal(file_name.value.clone()),
        ValueType::Expression => DynamicValue::expression(file_name.value.clone()),
    }
}

fn json_schema(schema: &JsonSchema) -> SchemaDocument {
    let items = schema
        .items
        .iter()
        .map(|item| {
            (
                item.name.replace('@', "@@"),
                json!({ "type": item.item_type.as_str() }),
            )
        })
        .collect::<Map<String, Value>>();

    let mut root = Map::new();
    root.insert(
        schema.root.clone(),
        json!({
            "type": "array",
            "items": JsonObjectSchema::new(items),
        }),
    );
    SchemaDocument::Json(JsonObjectSchema::new(root))
}

fn sql_table_schema(schema: &SqlTableSchema) -> Result<SchemaDocument, ExportError> {
    let columns = schema
        .columns
        .iter()
        .map(sql_column)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SchemaDocument::SqlTable(columns))
}

fn sql_column(column: &SqlTableColumn) -> Result<SqlColumnDocument, ExportError> {
    let (precision, scale) = if column.column_type.is_integer_family() {
        (Some(INTEGER_PRECISION), None)
    } else {
        (
            parse_optional(&column.name, "precision", column.precision.as_deref())?,
            parse_optional(&column.name, "scale", column.scale.as_deref())?,
        )
    };

    Ok(SqlColumnDocument {
        name: column.name.clone(),
        column_type: column.column_type,
        precision,
        scale,
    })
}

/// Absent or empty means "not set"; anything else must parse.
fn parse_optional(
    column: &str,
    field: &str,
    value: Option<&str>,
) -> Result<Option<u32>, ExportError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<u32>()
            .map(Some)
            .map_err(|source| ExportError::InvalidNumber {
                field: format!("{field} of column '{column}'"),
                value: text.to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Container, DataSetType, JsonItem, JsonItemType, LocationType, Parameter, ParameterType,
        SqlColumnType,
    };
    use serde_json::json;

    fn sql_dataset(columns: Vec<SqlTableColumn>) -> DataSet {
        let mut dataset = DataSet::new("Orders", DataSetType::AzureSqlTable);
        dataset.sql_table_schema = Some(SqlTableSchema { columns });
        dataset
    }

    #[test]
    fn integer_columns_force_precision_ten() {
        let dataset = sql_dataset(vec![
            SqlTableColumn::new("Id", SqlColumnType::Bigint).with_precision("19", "4"),
            SqlTableColumn::new("Amount", SqlColumnType::Decimal).with_precision("18", "2"),
            SqlTableColumn::new("Note", SqlColumnType::Nvarchar).with_precision("", ""),
        ]);
        let value = serde_json::to_value(transform_dataset(&dataset).unwrap()).unwrap();
        assert_eq!(
            value["properties"]["schema"],
            json!([
                {"name": "Id", "type": "bigint", "precision": 10},
                {"name": "Amount", "type": "decimal", "precision": 18, "scale": 2},
                {"name": "Note", "type": "nvarchar"}
            ])
        );
    }

    #[test]
    fn unparsable_precision_is_fatal() {
        let dataset = sql_dataset(vec![
            SqlTableColumn::new("Amount", SqlColumnType::Decimal).with_precision("eighteen", "2"),
        ]);
        let err = transform_dataset(&dataset).unwrap_err();
        assert!(matches!(err, ExportError::InvalidNumber { ref value, .. } if value == "eighteen"));
    }

    #[test]
    fn relative_url_expression_heuristic() {
        let mut dataset = DataSet::new("Api", DataSetType::RestResource);
        dataset.relative_url = Some("foo/@bar".to_string());
        let value = serde_json::to_value(transform_dataset(&dataset).unwrap()).unwrap();
        assert_eq!(
            value["properties"]["typeProperties"]["relativeUrl"],
            json!({"value": "foo/@bar", "type": "Expression"})
        );

        dataset.relative_url = Some("foo/bar".to_string());
        let value = serde_json::to_value(transform_dataset(&dataset).unwrap()).unwrap();
        assert_eq!(value["properties"]["typeProperties"]["relativeUrl"], json!("foo/bar"));
    }

    #[test]
    fn json_schema_unwraps_root_array() {
        let mut dataset = DataSet::new("Feed", DataSetType::Json);
        dataset.json_schema = Some(JsonSchema {
            root: "value".to_string(),
            items: vec![
                JsonItem {
                    name: "@odata.etag".to_string(),
                    item_type: JsonItemType::String,
                },
                JsonItem {
                    name: "count".to_string(),
                    item_type: JsonItemType::Integer,
                },
            ],
        });
        let value = serde_json::to_value(transform_dataset(&dataset).unwrap()).unwrap();
        assert_eq!(
            value["properties"]["schema"],
            json!({
                "type": "object",
                "properties": {
                    "value": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "@@odata.etag": {"type": "string"},
                                "count": {"type": "integer"}
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn both_schemas_conflict() {
        let mut dataset = sql_dataset(Vec::new());
        dataset.json_schema = Some(JsonSchema {
            root: "value".to_string(),
            items: Vec::new(),
        });
        let err = transform_dataset(&dataset).unwrap_err();
        assert!(matches!(err, ExportError::ConflictingSchemas(ref name) if name == "Orders"));
    }

    #[test]
    fn blob_location_and_references() {
        let mut dataset = DataSet::new("Landing", DataSetType::Json);
        dataset.linked_service = Some("Blob".to_string());
        dataset.parameters = vec![Parameter::new("file", ParameterType::String)];
        dataset.encoding = Some("UTF-8".to_string());
        dataset.location = Some(Location {
            location_type: LocationType::AzureBlobStorageLocation,
            container: Some(Container {
                name: "raw".to_string(),
                folder_path: Some("in".to_string()),
            }),
            file_name: Some(FileName {
                value: "@dataset().file".to_string(),
                value_type: ValueType::Expression,
            }),
        });

        let value = serde_json::to_value(transform_dataset(&dataset).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Landing",
                "type": "Microsoft.DataFactory/factories/datasets",
                "properties": {
                    "linkedServiceName": {"referenceName": "Blob", "type": "LinkedServiceReference"},
                    "parameters": {"file": {"type": "String"}},
                    "annotations": [],
                    "type": "Json",
                    "typeProperties": {
                        "location": {
                            "type": "AzureBlobStorageLocation",
                            "fileName": {"value": "@dataset().file", "type": "Expression"},
                            "folderPath": "in",
                            "container": "raw"
                        },
                        "encodingName": "UTF-8"
                    }
                }
            })
        );
    }
}
