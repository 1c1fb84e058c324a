//! Copy and Lookup source, sink and translator documents

use super::common::Expression;
use crate::models::{MappingSinkType, StoreSettingsType, TranslatorType};
use serde::Serialize;
use serde_json::{Map, Value};

/// Timeout ADF applies to SQL-backed sources.
pub const SQL_QUERY_TIMEOUT: &str = "02:00:00";

pub const REST_REQUEST_METHOD: &str = "GET";
pub const REST_REQUEST_INTERVAL: &str = "00.00:00:00.010";
pub const REST_HTTP_REQUEST_TIMEOUT: &str = "00:10:00";

pub const BLOB_WRITE_SETTINGS: &str = "AzureBlobStorageWriteSettings";
pub const JSON_WRITE_SETTINGS: &str = "JsonWriteSettings";
pub const JSON_FILE_PATTERN: &str = "arrayOfObjects";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SourceDocument {
    RestSource(RestSourceDocument),
    JsonSource(JsonSourceDocument),
    AzureSqlSource(AzureSqlSourceDocument),
    OdbcSource(OdbcSourceDocument),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestSourceDocument {
    pub http_request_timeout: &'static str,
    pub request_interval: &'static str,
    pub request_method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_headers: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_rules: Option<Map<String, Value>>,
}

impl Default for RestSourceDocument {
    fn default() -> Self {
        Self {
            http_request_timeout: REST_HTTP_REQUEST_TIMEOUT,
            request_interval: REST_REQUEST_INTERVAL,
            request_method: REST_REQUEST_METHOD,
            additional_headers: None,
            pagination_rules: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSourceDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_settings: Option<StoreSettingsDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureSqlSourceDocument {
    pub query_timeout: &'static str,
    pub sql_reader_query: String,
}

impl AzureSqlSourceDocument {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query_timeout: SQL_QUERY_TIMEOUT,
            sql_reader_query: query.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OdbcSourceDocument {
    pub query_timeout: &'static str,
    pub query: Expression,
}

impl OdbcSourceDocument {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query_timeout: SQL_QUERY_TIMEOUT,
            query: Expression::new(query),
        }
    }
}

/// Blob store settings, shared by JSON sources (read) and sinks (write).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettingsDocument {
    #[serde(rename = "type")]
    pub settings_type: &'static str,
    pub recursive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard_file_name: Option<String>,
    pub enable_partition_discovery: bool,
}

impl StoreSettingsDocument {
    pub fn read(
        settings_type: StoreSettingsType,
        recursive: bool,
        wildcard_file_name: Option<String>,
    ) -> Self {
        Self {
            settings_type: settings_type.as_str(),
            recursive,
            wildcard_file_name,
            enable_partition_discovery: false,
        }
    }

    pub fn blob_write() -> Self {
        Self {
            settings_type: BLOB_WRITE_SETTINGS,
            recursive: false,
            wildcard_file_name: None,
            enable_partition_discovery: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SinkDocument {
    JsonSink(JsonSinkDocument),
    AzureSqlSink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSinkDocument {
    pub store_settings: StoreSettingsDocument,
    pub format_settings: FormatSettingsDocument,
}

impl Default for JsonSinkDocument {
    fn default() -> Self {
        Self {
            store_settings: StoreSettingsDocument::blob_write(),
            format_settings: FormatSettingsDocument::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatSettingsDocument {
    #[serde(rename = "type")]
    pub settings_type: &'static str,
    pub file_pattern: &'static str,
    pub quote_all_text: bool,
}

impl Default for FormatSettingsDocument {
    fn default() -> Self {
        Self {
            settings_type: JSON_WRITE_SETTINGS,
            file_pattern: JSON_FILE_PATTERN,
            quote_all_text: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorDocument {
    #[serde(rename = "type")]
    pub translator_type: TranslatorType,
    pub mappings: Vec<MappingDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingDocument {
    pub source: MappingSourceDocument,
    pub sink: MappingSinkDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingSourceDocument {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingSinkDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub sink_type: MappingSinkType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sql_sources_carry_query_timeout() {
        let sql = SourceDocument::AzureSqlSource(AzureSqlSourceDocument::new("SELECT 1"));
        assert_eq!(
            serde_json::to_value(&sql).unwrap(),
            json!({"type": "AzureSqlSource", "queryTimeout": "02:00:00", "sqlReaderQuery": "SELECT 1"})
        );

        let odbc = SourceDocument::OdbcSource(OdbcSourceDocument::new("SELECT 2"));
        assert_eq!(
            serde_json::to_value(&odbc).unwrap(),
            json!({
                "type": "OdbcSource",
                "queryTimeout": "02:00:00",
                "query": {"value": "SELECT 2", "type": "Expression"}
            })
        );
    }

    #[test]
    fn sinks_serialize_with_type_tag() {
        assert_eq!(
            serde_json::to_value(SinkDocument::AzureSqlSink).unwrap(),
            json!({"type": "AzureSqlSink"})
        );
        let json_sink = serde_json::to_value(SinkDocument::JsonSink(JsonSinkDocument::default()))
            .unwrap();
        assert_eq!(json_sink["type"], "JsonSink");
        assert_eq!(json_sink["storeSettings"]["type"], "AzureBlobStorageWriteSettings");
        assert_eq!(json_sink["formatSettings"]["filePattern"], "arrayOfObjects");
    }
}
