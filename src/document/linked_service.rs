//! Linked service documents

use super::{LINKED_SERVICE_RESOURCE_TYPE, Resource};
use crate::models::{AuthenticationType, LinkedServiceType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedServiceDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub properties: LinkedServiceProperties,
}

impl LinkedServiceDocument {
    pub fn new(name: impl Into<String>, properties: LinkedServiceProperties) -> Self {
        Self {
            name: name.into(),
            resource_type: LINKED_SERVICE_RESOURCE_TYPE,
            properties,
        }
    }
}

impl Resource for LinkedServiceDocument {
    const FOLDER: &'static str = "LinkedServices";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedServiceProperties {
    pub annotations: Vec<String>,
    #[serde(rename = "type")]
    pub service_type: LinkedServiceType,
    pub type_properties: LinkedServiceTypeProperties,
}

/// Connection settings; each one is emitted only when set.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedServiceTypeProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_server_certificate_validation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<AuthenticationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_app_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}
