//! Building blocks shared by every document: expression wrappers and
//! resource references.

use super::keyed::KeyedObject;

/// `type` value of an ADF dynamic-content wrapper.
pub const EXPRESSION_TYPE: &str = "Expression";

pub const LINKED_SERVICE_REFERENCE: &str = "LinkedServiceReference";
pub const DATASET_REFERENCE: &str = "DatasetReference";
pub const PIPELINE_REFERENCE: &str = "PipelineReference";

/// `{"value": ..., "type": "Expression"}`
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Expression {
    pub value: String,
    #[serde(rename = "type")]
    pub expression_type: &'static str,
}

impl Expression {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            expression_type: EXPRESSION_TYPE,
        }
    }
}

/// A value ADF accepts either as a bare string or as an expression wrapper.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum DynamicValue {
    Literal(String),
    Expression(Expression),
}

impl DynamicValue {
    pub fn expression(value: impl Into<String>) -> Self {
        DynamicValue::Expression(Expression::new(value))
    }
}

/// Reference to another factory resource by name.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub reference_name: String,
    #[serde(rename = "type")]
    pub reference_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<KeyedObject>,
}

impl Reference {
    pub fn linked_service(name: impl Into<String>) -> Self {
        Self::of(LINKED_SERVICE_REFERENCE, name)
    }

    pub fn pipeline(name: impl Into<String>) -> Self {
        Self::of(PIPELINE_REFERENCE, name)
    }

    pub fn dataset(name: impl Into<String>, parameters: Option<KeyedObject>) -> Self {
        Self {
            parameters,
            ..Self::of(DATASET_REFERENCE, name)
        }
    }

    fn of(reference_type: &'static str, name: impl Into<String>) -> Self {
        Self {
            reference_name: name.into(),
            reference_type,
            parameters: None,
        }
    }
}
