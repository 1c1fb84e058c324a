//! Activity documents
//!
//! One [`ActivityDocument`] per pipeline activity. The kind-specific part lives
//! in [`TypeProperties`], and the document's `type` string is always derived
//! from it, so the two cannot disagree.

use super::common::{Expression, Reference};
use super::keyed::KeyedObject;
use super::source::{SinkDocument, SourceDocument, TranslatorDocument};
use crate::models::{ActivityType, DependencyCondition, HttpMethod};
use serde::Serialize;
use serde_json::Value;

/// Timeout used by activity policies and by Until loops without one.
pub const DEFAULT_TIMEOUT: &str = "7.00:00:00";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<DependencyDocument>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyDocument>,
    pub user_properties: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_service_name: Option<Reference>,
    pub type_properties: TypeProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Reference>>,
}

impl ActivityDocument {
    pub fn new(name: impl Into<String>, type_properties: TypeProperties) -> Self {
        Self {
            name: name.into(),
            activity_type: type_properties.activity_type(),
            depends_on: None,
            policy: None,
            user_properties: Vec::new(),
            linked_service_name: None,
            type_properties,
            inputs: None,
            outputs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyDocument {
    pub activity: String,
    pub dependency_conditions: Vec<DependencyCondition>,
}

/// Retry policy attached to activities that call external systems.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    pub timeout: &'static str,
    pub retry: u32,
    pub retry_interval_in_seconds: u32,
    pub secure_output: bool,
    pub secure_input: bool,
}

impl Default for PolicyDocument {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            retry: 0,
            retry_interval_in_seconds: 30,
            secure_output: false,
            secure_input: false,
        }
    }
}

/// `typeProperties` of an activity, one variant per activity kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeProperties {
    Copy(CopyProperties),
    SqlServerStoredProcedure(StoredProcedureProperties),
    Lookup(LookupProperties),
    AzureFunction(AzureFunctionProperties),
    Until(UntilProperties),
    Wait(WaitProperties),
    Web(WebProperties),
    SetVariable(SetVariableProperties),
    IfCondition(IfConditionProperties),
    ExecutePipeline(ExecutePipelineProperties),
}

impl TypeProperties {
    pub fn activity_type(&self) -> ActivityType {
        match self {
            TypeProperties::Copy(_) => ActivityType::Copy,
            TypeProperties::SqlServerStoredProcedure(_) => ActivityType::SqlServerStoredProcedure,
            TypeProperties::Lookup(_) => ActivityType::Lookup,
            TypeProperties::AzureFunction(_) => ActivityType::AzureFunction,
            TypeProperties::Until(_) => ActivityType::Until,
            TypeProperties::Wait(_) => ActivityType::Wait,
            TypeProperties::Web(_) => ActivityType::Web,
            TypeProperties::SetVariable(_) => ActivityType::SetVariable,
            TypeProperties::IfCondition(_) => ActivityType::IfCondition,
            TypeProperties::ExecutePipeline(_) => ActivityType::ExecutePipeline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyProperties {
    pub source: SourceDocument,
    pub sink: SinkDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_staging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator: Option<TranslatorDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProcedureProperties {
    pub stored_procedure_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_procedure_parameters: Option<KeyedObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupProperties {
    pub source: SourceDocument,
    pub dataset: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_staging: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureFunctionProperties {
    pub function_name: String,
    pub method: HttpMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UntilProperties {
    pub expression: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<ActivityDocument>>,
    pub timeout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_staging: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitProperties {
    pub wait_time_in_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebProperties {
    pub url: String,
    pub method: HttpMethod,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetVariableProperties {
    pub variable_name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IfConditionProperties {
    pub expression: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_true_activities: Option<Vec<ActivityDocument>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_false_activities: Option<Vec<ActivityDocument>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_staging: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutePipelineProperties {
    pub pipeline: Reference,
    pub wait_on_completion: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<KeyedObject>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_is_derived_from_properties() {
        let doc = ActivityDocument::new(
            "Call",
            TypeProperties::Web(WebProperties {
                url: "https://example.com".to_string(),
                method: HttpMethod::Post,
                body: json!("{}"),
            }),
        );
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["type"], "WebActivity");
        assert_eq!(value["typeProperties"]["method"], "POST");
        assert_eq!(value["userProperties"], json!([]));
        assert!(value.get("policy").is_none());
        assert!(value.get("dependsOn").is_none());
    }

    #[test]
    fn default_policy_shape() {
        assert_eq!(
            serde_json::to_value(PolicyDocument::default()).unwrap(),
            json!({
                "timeout": "7.00:00:00",
                "retry": 0,
                "retryIntervalInSeconds": 30,
                "secureOutput": false,
                "secureInput": false
            })
        );
    }
}
