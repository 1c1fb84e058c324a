//! Keyed-object encoding
//!
//! ADF writes parameter, variable and stored-procedure parameter collections
//! as a JSON object whose property names are the entry names, not as an
//! array. [`encode`] turns a list of named entries into that object.
//!
//! An empty collection has no valid encoding: ADF expects the property to be
//! absent instead of `{}`. Callers that may hold an empty list use
//! [`encode_non_empty`], which maps it to `None`.

use super::common::EXPRESSION_TYPE;
use crate::export::ExportError;
use crate::models::{Parameter, StoredProcedureParameter, ValueType, Variable, VariableType};
use serde_json::{Map, Value, json};

/// A name-keyed JSON object. Keys keep insertion order.
pub type KeyedObject = Map<String, Value>;

/// An entry that can be placed in a keyed object.
pub trait KeyedEntry {
    /// Property name of the entry.
    fn key(&self) -> &str;

    /// The value stored under [`KeyedEntry::key`].
    fn encode_value(&self) -> Result<Value, ExportError>;
}

/// Encode `entries` as an object keyed by entry name, in input order.
///
/// # Errors
///
/// - [`ExportError::EmptyCollection`] if `entries` is empty.
/// - [`ExportError::DuplicateKey`] if two entries share a name.
/// - Any error the entries raise while encoding their values.
pub fn encode<T: KeyedEntry>(
    entries: &[T],
    collection: &'static str,
) -> Result<KeyedObject, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::EmptyCollection(collection));
    }

    let mut object = KeyedObject::new();
    for entry in entries {
        if object.contains_key(entry.key()) {
            return Err(ExportError::DuplicateKey {
                collection,
                key: entry.key().to_string(),
            });
        }
        object.insert(entry.key().to_string(), entry.encode_value()?);
    }
    Ok(object)
}

/// Like [`encode`], but an empty list yields `None` so the field is omitted.
pub fn encode_non_empty<T: KeyedEntry>(
    entries: &[T],
    collection: &'static str,
) -> Result<Option<KeyedObject>, ExportError> {
    if entries.is_empty() {
        Ok(None)
    } else {
        encode(entries, collection).map(Some)
    }
}

/// `{"type": ..., "value"?: ...}`
impl KeyedEntry for Parameter {
    fn key(&self) -> &str {
        &self.name
    }

    fn encode_value(&self) -> Result<Value, ExportError> {
        let mut value = json!({ "type": self.parameter_type.as_str() });
        if let Some(supplied) = &self.value {
            value["value"] = Value::String(supplied.clone());
        }
        Ok(value)
    }
}

/// `{"type": ..., "defaultValue"?: ...}`, with the default typed by the
/// variable's declared type.
impl KeyedEntry for Variable {
    fn key(&self) -> &str {
        &self.name
    }

    fn encode_value(&self) -> Result<Value, ExportError> {
        let mut value = json!({ "type": self.variable_type.as_str() });
        if let Some(default) = &self.default_value {
            value["defaultValue"] = typed_default(self, default)?;
        }
        Ok(value)
    }
}

fn typed_default(variable: &Variable, default: &str) -> Result<Value, ExportError> {
    let invalid = || ExportError::InvalidVariableDefault {
        name: variable.name.clone(),
        variable_type: variable.variable_type,
        value: default.to_string(),
    };

    match variable.variable_type {
        VariableType::String => Ok(Value::String(default.to_string())),
        VariableType::Boolean => match default.trim() {
            v if v.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
            v if v.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
            _ => Err(invalid()),
        },
        VariableType::Array => match serde_json::from_str::<Value>(default) {
            Ok(array @ Value::Array(_)) => Ok(array),
            _ => Err(invalid()),
        },
    }
}

/// `{"value": ..., "type": ...}`; expression-valued parameters nest the value
/// in an expression wrapper.
impl KeyedEntry for StoredProcedureParameter {
    fn key(&self) -> &str {
        &self.name
    }

    fn encode_value(&self) -> Result<Value, ExportError> {
        let value = match self.value_type {
            ValueType::Default => Value::String(self.value.clone()),
            ValueType::Expression => json!({ "value": self.value, "type": EXPRESSION_TYPE }),
        };
        Ok(json!({
            "value": value,
            "type": self.parameter_type.as_str(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ParameterType, StoredProcedureParameterType};

    #[test]
    fn encodes_parameters_keyed_by_name() {
        let params = vec![
            Parameter::new("p1", ParameterType::String),
            Parameter::new("p2", ParameterType::Int).with_value("5"),
        ];
        let object = encode(&params, "parameters").unwrap();
        assert_eq!(
            serde_json::to_value(&object).unwrap(),
            json!({"p1": {"type": "String"}, "p2": {"type": "Int", "value": "5"}})
        );
        assert_eq!(
            object.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["p1", "p2"]
        );
    }

    #[test]
    fn keys_keep_declaration_order() {
        let params: Vec<Parameter> = ["zeta", "alpha", "mid"]
            .into_iter()
            .map(|name| Parameter::new(name, ParameterType::String))
            .collect();
        let object = encode(&params, "parameters").unwrap();
        assert_eq!(
            serde_json::to_string(&object).unwrap(),
            r#"{"zeta":{"type":"String"},"alpha":{"type":"String"},"mid":{"type":"String"}}"#
        );
    }

    #[test]
    fn empty_collection_fails_fast() {
        let params: Vec<Parameter> = Vec::new();
        let err = encode(&params, "parameters").unwrap_err();
        assert!(matches!(err, ExportError::EmptyCollection("parameters")));
        assert!(encode_non_empty(&params, "parameters").unwrap().is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let params = vec![
            Parameter::new("p", ParameterType::String),
            Parameter::new("p", ParameterType::Int),
        ];
        let err = encode(&params, "parameters").unwrap_err();
        assert!(matches!(err, ExportError::DuplicateKey { ref key, .. } if key == "p"));
    }

    #[test]
    fn boolean_variable_default_is_json_bool() {
        let vars = vec![
            Variable::new("done", VariableType::Boolean, Some("False")),
            Variable::new("label", VariableType::String, Some("x")),
            Variable::new("ids", VariableType::Array, Some("[1, 2]")),
            Variable::new("empty", VariableType::String, None),
        ];
        let object = encode(&vars, "variables").unwrap();
        assert_eq!(
            serde_json::to_value(&object).unwrap(),
            json!({
                "done": {"type": "Boolean", "defaultValue": false},
                "label": {"type": "String", "defaultValue": "x"},
                "ids": {"type": "Array", "defaultValue": [1, 2]},
                "empty": {"type": "String"}
            })
        );
    }

    #[test]
    fn unparsable_boolean_default_is_an_error() {
        let vars = vec![Variable::new("flag", VariableType::Boolean, Some("yes"))];
        let err = encode(&vars, "variables").unwrap_err();
        assert!(matches!(
            err,
            ExportError::InvalidVariableDefault { ref name, .. } if name == "flag"
        ));
    }

    #[test]
    fn stored_procedure_expression_values_are_wrapped() {
        let params = vec![
            StoredProcedureParameter {
                name: "RunId".to_string(),
                parameter_type: StoredProcedureParameterType::String,
                value: "@pipeline().RunId".to_string(),
                value_type: ValueType::Expression,
            },
            StoredProcedureParameter {
                name: "Limit".to_string(),
                parameter_type: StoredProcedureParameterType::Int32,
                value: "10".to_string(),
                value_type: ValueType::Default,
            },
        ];
        let object = encode(&params, "storedProcedureParameters").unwrap();
        assert_eq!(
            serde_json::to_value(&object).unwrap(),
            json!({
                "RunId": {
                    "value": {"value": "@pipeline().RunId", "type": "Expression"},
                    "type": "String"
                },
                "Limit": {"value": "10", "type": "Int32"}
            })
        );
    }
}
