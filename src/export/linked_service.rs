//! Linked service exporter

use crate::document::linked_service::{
    LinkedServiceDocument, LinkedServiceProperties, LinkedServiceTypeProperties,
};
use crate::models::LinkedService;
use tracing::debug;

/// Transform one linked service. Every connection setting is copied only when
/// present, so this cannot fail.
pub fn transform_linked_service(linked_service: &LinkedService) -> LinkedServiceDocument {
    let type_properties = LinkedServiceTypeProperties {
        url: linked_service.url.clone(),
        enable_server_certificate_validation: linked_service.enable_server_certificate_validation,
        authentication_type: linked_service.authentication_type,
        connection_string: linked_service.connection_string.clone(),
        user_name: linked_service.user_name.clone(),
        function_app_url: linked_service.function_app_url.clone(),
        encrypted_credential: linked_service.encrypted_credential.clone(),
    };

    debug!(
        "Transformed {} linked service '{}'",
        linked_service.service_type, linked_service.name
    );

    LinkedServiceDocument::new(
        &linked_service.name,
        LinkedServiceProperties {
            annotations: Vec::new(),
            service_type: linked_service.service_type,
            type_properties,
        },
    )
}
