//! Linked service model

use super::enums::{AuthenticationType, LinkedServiceType};
use serde::{Deserialize, Serialize};

/// A named connection definition. Every connection property is optional and
/// only emitted when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedService {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: LinkedServiceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_server_certificate_validation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<AuthenticationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_app_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedService {
    pub fn new(name: impl Into<String>, service_type: LinkedServiceType) -> Self {
        Self {
            name: name.into(),
            service_type,
            url: None,
            enable_server_certificate_validation: None,
            authentication_type: None,
            connection_string: None,
            user_name: None,
            function_app_url: None,
            encrypted_credential: None,
        }
    }
}
