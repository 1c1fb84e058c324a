//! Enums for the ADF project model
//!
//! # Serde Casing Conventions
//!
//! Most enums deserialize from the exact ADF spelling of the value (`PascalCase`
//! type names such as `AzureBlobStorageReadSettings`). SQL column types and JSON
//! item types are lowercase because ADF writes them that way in dataset schemas.
//!
//! Every enum exposes `as_str()` returning the literal string placed in the
//! generated JSON, and `Display` forwards to it.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! adf_enum_display {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Activity discriminant, independent of the per-kind payload.
///
/// Serializes to the ADF `type` string, which differs from the variant name
/// for Azure Function and Web activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Copy,
    SqlServerStoredProcedure,
    Lookup,
    #[serde(rename = "AzureFunctionActivity", alias = "AzureFunction")]
    AzureFunction,
    Until,
    Wait,
    #[serde(rename = "WebActivity", alias = "Web")]
    Web,
    SetVariable,
    IfCondition,
    ExecutePipeline,
}

impl ActivityType {
    /// All activity kinds, in declaration order.
    pub const ALL: [ActivityType; 10] = [
        ActivityType::Copy,
        ActivityType::SqlServerStoredProcedure,
        ActivityType::Lookup,
        ActivityType::AzureFunction,
        ActivityType::Until,
        ActivityType::Wait,
        ActivityType::Web,
        ActivityType::SetVariable,
        ActivityType::IfCondition,
        ActivityType::ExecutePipeline,
    ];

    /// The `type` string ADF expects for this activity.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Copy => "Copy",
            ActivityType::SqlServerStoredProcedure => "SqlServerStoredProcedure",
            ActivityType::Lookup => "Lookup",
            ActivityType::AzureFunction => "AzureFunctionActivity",
            ActivityType::Until => "Until",
            ActivityType::Wait => "Wait",
            ActivityType::Web => "WebActivity",
            ActivityType::SetVariable => "SetVariable",
            ActivityType::IfCondition => "IfCondition",
            ActivityType::ExecutePipeline => "ExecutePipeline",
        }
    }

    /// Control-flow kinds that ADF refuses inside loop or branch bodies.
    pub fn is_control_flow(&self) -> bool {
        matches!(self, ActivityType::Until | ActivityType::IfCondition)
    }
}

adf_enum_display!(ActivityType);

/// Completion state an activity dependency waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependencyCondition {
    Succeeded,
    Failed,
    Completed,
    Skipped,
}

impl DependencyCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyCondition::Succeeded => "Succeeded",
            DependencyCondition::Failed => "Failed",
            DependencyCondition::Completed => "Completed",
            DependencyCondition::Skipped => "Skipped",
        }
    }
}

adf_enum_display!(DependencyCondition);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

adf_enum_display!(HttpMethod);

/// Whether a value is emitted literally or as an ADF dynamic-content expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueType {
    #[default]
    Default,
    Expression,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Default => "Default",
            ValueType::Expression => "Expression",
        }
    }
}

adf_enum_display!(ValueType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoredProcedureParameterType {
    DateTime,
    String,
    Int32,
    Int64,
}

impl StoredProcedureParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoredProcedureParameterType::DateTime => "DateTime",
            StoredProcedureParameterType::String => "String",
            StoredProcedureParameterType::Int32 => "Int32",
            StoredProcedureParameterType::Int64 => "Int64",
        }
    }
}

adf_enum_display!(StoredProcedureParameterType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StoreSettingsType {
    #[default]
    AzureBlobStorageReadSettings,
}

impl StoreSettingsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreSettingsType::AzureBlobStorageReadSettings => "AzureBlobStorageReadSettings",
        }
    }
}

adf_enum_display!(StoreSettingsType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TranslatorType {
    #[default]
    TabularTranslator,
}

impl TranslatorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslatorType::TabularTranslator => "TabularTranslator",
        }
    }
}

adf_enum_display!(TranslatorType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MappingSinkType {
    #[default]
    String,
}

impl MappingSinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingSinkType::String => "String",
        }
    }
}

adf_enum_display!(MappingSinkType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSetType {
    Json,
    RestResource,
    AzureSqlTable,
    OdbcTable,
}

impl DataSetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSetType::Json => "Json",
            DataSetType::RestResource => "RestResource",
            DataSetType::AzureSqlTable => "AzureSqlTable",
            DataSetType::OdbcTable => "OdbcTable",
        }
    }
}

adf_enum_display!(DataSetType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocationType {
    #[default]
    AzureBlobStorageLocation,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::AzureBlobStorageLocation => "AzureBlobStorageLocation",
        }
    }
}

adf_enum_display!(LocationType);

/// Item type inside a JSON unwrap schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonItemType {
    String,
    Integer,
    Boolean,
    Float,
}

impl JsonItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonItemType::String => "string",
            JsonItemType::Integer => "integer",
            JsonItemType::Boolean => "boolean",
            JsonItemType::Float => "float",
        }
    }
}

adf_enum_display!(JsonItemType);

/// Column type inside an Azure SQL table schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlColumnType {
    Nvarchar,
    Int,
    Date,
    Datetime2,
    Datetimeoffset,
    Decimal,
    Uniqueidentifier,
    Bit,
    Tinyint,
    Bigint,
    Smallint,
    Float,
    Double,
    Varchar,
    Binary,
}

impl SqlColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlColumnType::Nvarchar => "nvarchar",
            SqlColumnType::Int => "int",
            SqlColumnType::Date => "date",
            SqlColumnType::Datetime2 => "datetime2",
            SqlColumnType::Datetimeoffset => "datetimeoffset",
            SqlColumnType::Decimal => "decimal",
            SqlColumnType::Uniqueidentifier => "uniqueidentifier",
            SqlColumnType::Bit => "bit",
            SqlColumnType::Tinyint => "tinyint",
            SqlColumnType::Bigint => "bigint",
            SqlColumnType::Smallint => "smallint",
            SqlColumnType::Float => "float",
            SqlColumnType::Double => "double",
            SqlColumnType::Varchar => "varchar",
            SqlColumnType::Binary => "binary",
        }
    }

    /// `bigint`, `int`, `tinyint` and `smallint`.
    pub fn is_integer_family(&self) -> bool {
        matches!(
            self,
            SqlColumnType::Bigint
                | SqlColumnType::Int
                | SqlColumnType::Tinyint
                | SqlColumnType::Smallint
        )
    }
}

adf_enum_display!(SqlColumnType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkedServiceType {
    RestService,
    AzureBlobStorage,
    AzureSqlDatabase,
    AzureFunction,
}

impl LinkedServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkedServiceType::RestService => "RestService",
            LinkedServiceType::AzureBlobStorage => "AzureBlobStorage",
            LinkedServiceType::AzureSqlDatabase => "AzureSqlDatabase",
            LinkedServiceType::AzureFunction => "AzureFunction",
        }
    }
}

adf_enum_display!(LinkedServiceType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticationType {
    Basic,
    Anonymous,
}

impl AuthenticationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthenticationType::Basic => "Basic",
            AuthenticationType::Anonymous => "Anonymous",
        }
    }
}

adf_enum_display!(AuthenticationType);

/// Declared type of a pipeline, dataset or reference parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    String,
    Int,
    Float,
    Bool,
    Array,
    Object,
    SecureString,
    Expression,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "String",
            ParameterType::Int => "Int",
            ParameterType::Float => "Float",
            ParameterType::Bool => "Bool",
            ParameterType::Array => "Array",
            ParameterType::Object => "Object",
            ParameterType::SecureString => "SecureString",
            ParameterType::Expression => "Expression",
        }
    }
}

adf_enum_display!(ParameterType);

/// Declared type of a pipeline variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableType {
    String,
    Boolean,
    Array,
}

impl VariableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::String => "String",
            VariableType::Boolean => "Boolean",
            VariableType::Array => "Array",
        }
    }
}

adf_enum_display!(VariableType);
