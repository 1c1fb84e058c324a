//! Per-kind activity defaults
//!
//! ADF expects different fixed properties depending on the activity kind. All
//! of those rules are kept in one table, [`ActivityDefaults::for_type`], which
//! the activity exporter consults once per activity.

use crate::document::activity::DEFAULT_TIMEOUT;
use crate::models::{ActivityType, Source};

/// Fixed properties emitted for one activity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityDefaults {
    /// Emit the retry policy block.
    pub policy: bool,
    /// Emit `inputs` and `outputs` arrays, even when empty.
    pub inputs_outputs: bool,
    /// Value of `typeProperties.enableStaging`, omitted when `None`.
    pub enable_staging: Option<bool>,
    /// Body used when a Web activity supplies none.
    pub default_body: Option<&'static str>,
    /// Timeout used when an Until loop supplies none.
    pub default_timeout: Option<&'static str>,
}

impl ActivityDefaults {
    const NONE: ActivityDefaults = ActivityDefaults {
        policy: false,
        inputs_outputs: false,
        enable_staging: None,
        default_body: None,
        default_timeout: None,
    };

    /// The defaulting table.
    pub const fn for_type(activity_type: ActivityType) -> Self {
        match activity_type {
            ActivityType::Copy => ActivityDefaults {
                policy: true,
                inputs_outputs: true,
                enable_staging: Some(false),
                ..Self::NONE
            },
            ActivityType::SqlServerStoredProcedure | ActivityType::AzureFunction => {
                ActivityDefaults {
                    policy: true,
                    ..Self::NONE
                }
            }
            ActivityType::Lookup => ActivityDefaults {
                policy: true,
                enable_staging: Some(false),
                ..Self::NONE
            },
            ActivityType::Until => ActivityDefaults {
                inputs_outputs: true,
                enable_staging: Some(false),
                default_timeout: Some(DEFAULT_TIMEOUT),
                ..Self::NONE
            },
            ActivityType::IfCondition => ActivityDefaults {
                enable_staging: Some(false),
                ..Self::NONE
            },
            ActivityType::Web => ActivityDefaults {
                default_body: Some("{}"),
                ..Self::NONE
            },
            ActivityType::Wait | ActivityType::SetVariable | ActivityType::ExecutePipeline => {
                Self::NONE
            }
        }
    }

    /// Copy activities reading from Azure SQL take neither dataset references
    /// nor a staging flag.
    pub fn for_copy_source(source: &Source) -> Self {
        let defaults = Self::for_type(ActivityType::Copy);
        match source {
            Source::AzureSqlSource(_) => ActivityDefaults {
                inputs_outputs: false,
                enable_staging: None,
                ..defaults
            },
            _ => defaults,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SqlQuerySource;

    #[test]
    fn policy_only_on_external_calls() {
        let with_policy: Vec<_> = ActivityType::ALL
            .into_iter()
            .filter(|t| ActivityDefaults::for_type(*t).policy)
            .collect();
        assert_eq!(
            with_policy,
            vec![
                ActivityType::Copy,
                ActivityType::SqlServerStoredProcedure,
                ActivityType::Lookup,
                ActivityType::AzureFunction,
            ]
        );
    }

    #[test]
    fn staging_disabled_where_supported() {
        assert_eq!(ActivityDefaults::for_type(ActivityType::Lookup).enable_staging, Some(false));
        assert_eq!(
            ActivityDefaults::for_type(ActivityType::SqlServerStoredProcedure).enable_staging,
            None
        );
        assert_eq!(ActivityDefaults::for_type(ActivityType::Wait).enable_staging, None);
    }

    #[test]
    fn azure_sql_copy_drops_references_and_staging() {
        let source = Source::AzureSqlSource(SqlQuerySource {
            sql_query: "SELECT 1".to_string(),
        });
        let defaults = ActivityDefaults::for_copy_source(&source);
        assert!(!defaults.inputs_outputs);
        assert_eq!(defaults.enable_staging, None);
        assert!(defaults.policy);
    }
}
