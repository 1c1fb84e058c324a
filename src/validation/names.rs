//! Resource and activity name validation.
//!
//! ADF rejects names at deployment time that generation would otherwise
//! happily write out, and resource names double as file names. These checks
//! catch both problems before anything is written.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Maximum length for pipeline, dataset and linked service names
pub const MAX_RESOURCE_NAME_LENGTH: usize = 260;

/// Maximum length for activity names
pub const MAX_ACTIVITY_NAME_LENGTH: usize = 55;

static RE_FORBIDDEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.+?/<>*%&:\\"|]"#).expect("Invalid regex"));

/// Errors that can occur during name validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    /// Name is empty
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Name exceeds maximum allowed length
    #[error("{field} exceeds maximum length (max: {max}, got: {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Name contains characters ADF does not accept
    #[error("{field} contains invalid characters: {reason}")]
    InvalidCharacters { field: &'static str, reason: String },

    /// Name has invalid format
    #[error("{0}: {1}")]
    InvalidFormat(&'static str, String),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a pipeline, dataset or linked service name.
///
/// # Rules
///
/// - Must not be empty
/// - Must not exceed 260 characters
/// - Must start with a letter, digit or underscore
/// - Must not contain `. + ? / < > * % & : \ " |`
///
/// # Examples
///
/// ```
/// use adf_codegen::validation::names::validate_resource_name;
///
/// assert!(validate_resource_name("pipeline", "LoadOrders").is_ok());
/// assert!(validate_resource_name("pipeline", "").is_err());
/// assert!(validate_resource_name("dataset", "orders.json").is_err());
/// ```
pub fn validate_resource_name(field: &'static str, name: &str) -> ValidationResult<()> {
    validate_name(field, name, MAX_RESOURCE_NAME_LENGTH)?;

    if let Some(first) = name.chars().next()
        && !first.is_alphanumeric()
        && first != '_'
    {
        return Err(ValidationError::InvalidFormat(
            field,
            "must start with a letter, digit or underscore".to_string(),
        ));
    }

    Ok(())
}

/// Validate an activity name. Activities share the character rules of
/// resources but have a shorter length limit.
pub fn validate_activity_name(name: &str) -> ValidationResult<()> {
    validate_name("activity name", name, MAX_ACTIVITY_NAME_LENGTH)
}

fn validate_name(field: &'static str, name: &str, max: usize) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }

    let length = name.chars().count();
    if length > max {
        return Err(ValidationError::TooLong {
            field,
            max,
            actual: length,
        });
    }

    if let Some(found) = RE_FORBIDDEN.find(name) {
        return Err(ValidationError::InvalidCharacters {
            field,
            reason: format!("invalid character: '{}'", found.as_str()),
        });
    }

    if name.chars().any(char::is_control) {
        return Err(ValidationError::InvalidCharacters {
            field,
            reason: "control characters are not allowed".to_string(),
        });
    }

    Ok(())
}
