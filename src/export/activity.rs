//! Activity exporter
//!
//! Maps a domain [`Activity`] to its [`ActivityDocument`], applying the
//! per-kind defaults from [`ActivityDefaults`] and recursing into the bodies
//! of Until loops and IfCondition branches.

use super::ExportError;
use super::defaults::ActivityDefaults;
use crate::document::activity::{
    ActivityDocument, AzureFunctionProperties, CopyProperties, DEFAULT_TIMEOUT,
    DependencyDocument, ExecutePipelineProperties, IfConditionProperties, LookupProperties,
    PolicyDocument, SetVariableProperties, StoredProcedureProperties, TypeProperties,
    UntilProperties, WaitProperties, WebProperties,
};
use crate::document::common::{EXPRESSION_TYPE, Expression, Reference};
use crate::document::keyed;
use crate::document::source::{
    AzureSqlSourceDocument, JsonSinkDocument, JsonSourceDocument, MappingDocument,
    MappingSinkDocument, MappingSourceDocument, OdbcSourceDocument, RestSourceDocument,
    SinkDocument, SourceDocument, StoreSettingsDocument, TranslatorDocument,
};
use crate::models::{
    Activity, ActivityKind, CopyActivity, DatasetReference, Dependency, Sink, Source, Translator,
};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

/// Transform one activity.
///
/// `is_nested` is true for activities inside an Until loop or an IfCondition
/// branch, where ADF does not allow further control-flow activities.
///
/// # Errors
///
/// - [`ExportError::InvalidNesting`] for a nested Until or IfCondition.
/// - [`ExportError::InvalidJsonBody`] for a Web or Azure Function body that is not JSON.
/// - Keyed encoding errors from stored-procedure, reference or pipeline parameters.
///
/// # Example
///
/// ```rust
/// use adf_codegen::export::transform_activity;
/// use adf_codegen::models::{Activity, ActivityKind, WaitActivity};
///
/// let wait = Activity::new("Pause", ActivityKind::Wait(WaitActivity { wait_time_in_seconds: 5 }));
/// let doc = transform_activity(&wait, false).unwrap();
/// assert!(doc.policy.is_none());
/// ```
pub fn transform_activity(
    activity: &Activity,
    is_nested: bool,
) -> Result<ActivityDocument, ExportError> {
    let activity_type = activity.activity_type();
    if is_nested && activity_type.is_control_flow() {
        return Err(ExportError::InvalidNesting {
            activity: activity.name.clone(),
            kind: activity_type,
        });
    }

    let defaults = match &activity.kind {
        ActivityKind::Copy(copy) => ActivityDefaults::for_copy_source(&copy.source),
        _ => ActivityDefaults::for_type(activity_type),
    };

    let mut document =
        ActivityDocument::new(&activity.name, type_properties(activity, &defaults)?);

    document.depends_on = activity
        .dependencies
        .as_ref()
        .map(|dependencies| dependencies.iter().map(dependency_document).collect());

    if defaults.policy {
        document.policy = Some(PolicyDocument::default());
    }

    document.linked_service_name = activity.linked_service.as_ref().map(Reference::linked_service);

    if defaults.inputs_outputs {
        document.inputs = Some(dataset_references(&activity.inputs)?);
        document.outputs = Some(dataset_references(&activity.outputs)?);
    } else if !activity.inputs.is_empty() || !activity.outputs.is_empty() {
        debug!(
            "Dropping inputs/outputs of {} activity '{}'",
            activity_type, activity.name
        );
    }

    debug!("Transformed {} activity '{}'", activity_type, activity.name);
    Ok(document)
}

/// Transform a list of activities at the same nesting level.
pub fn transform_activities(
    activities: &[Activity],
    is_nested: bool,
) -> Result<Vec<ActivityDocument>, ExportError> {
    activities
        .iter()
        .map(|activity| transform_activity(activity, is_nested))
        .collect()
}

fn type_properties(
    activity: &Activity,
    defaults: &ActivityDefaults,
) -> Result<TypeProperties, ExportError> {
    let properties = match &activity.kind {
        ActivityKind::Copy(copy) => TypeProperties::Copy(CopyProperties {
            source: source_document(&copy.source),
            sink: sink_document(copy.sink),
            enable_staging: defaults.enable_staging,
            translator: copy_translator(&activity.name, copy),
        }),
        ActivityKind::SqlServerStoredProcedure(procedure) => {
            TypeProperties::SqlServerStoredProcedure(StoredProcedureProperties {
                stored_procedure_name: procedure.stored_procedure_name.clone(),
                stored_procedure_parameters: keyed::encode_non_empty(
                    &procedure.parameters,
                    "storedProcedureParameters",
                )?,
            })
        }
        ActivityKind::Lookup(lookup) => TypeProperties::Lookup(LookupProperties {
            source: source_document(&lookup.source),
            dataset: dataset_reference(&lookup.dataset)?,
            enable_staging: defaults.enable_staging,
        }),
        ActivityKind::AzureFunction(function) => {
            let body = function
                .body
                .as_deref()
                .map(|body| json_body(&activity.name, body))
                .transpose()?;
            TypeProperties::AzureFunction(AzureFunctionProperties {
                function_name: function.function_name.clone(),
                method: function.method,
                body,
            })
        }
        ActivityKind::Until(until) => {
            let timeout = match until.timeout.as_deref() {
                Some(timeout) if !timeout.is_empty() => timeout,
                _ => defaults.default_timeout.unwrap_or(DEFAULT_TIMEOUT),
            };
            TypeProperties::Until(UntilProperties {
                expression: Expression::new(until.expression.clone()),
                activities: nested_activities(&until.activities)?,
                timeout: timeout.to_string(),
                enable_staging: defaults.enable_staging,
            })
        }
        ActivityKind::Wait(wait) => TypeProperties::Wait(WaitProperties {
            wait_time_in_seconds: wait.wait_time_in_seconds,
        }),
        ActivityKind::Web(web) => {
            let body = match &web.body {
                Some(body) => json_body(&activity.name, body)?,
                None => Value::String(defaults.default_body.unwrap_or("{}").to_string()),
            };
            TypeProperties::Web(WebProperties {
                url: web.url.clone(),
                method: web.method,
                body,
            })
        }
        ActivityKind::SetVariable(set) => TypeProperties::SetVariable(SetVariableProperties {
            variable_name: set.variable_name.clone(),
            value: set.value.clone(),
        }),
        ActivityKind::IfCondition(branch) => {
            TypeProperties::IfCondition(IfConditionProperties {
                expression: Expression::new(branch.expression.clone()),
                if_true_activities: nested_activities(&branch.if_true_activities)?,
                if_false_activities: nested_activities(&branch.if_false_activities)?,
                enable_staging: defaults.enable_staging,
            })
        }
        ActivityKind::ExecutePipeline(execute) => {
            TypeProperties::ExecutePipeline(ExecutePipelineProperties {
                pipeline: Reference::pipeline(&execute.pipeline),
                wait_on_completion: execute.wait_on_completion,
                parameters: keyed::encode_non_empty(&execute.parameters, "parameters")?,
            })
        }
    };
    Ok(properties)
}

/// Request bodies are decoded so they are embedded as JSON, not as a string.
fn json_body(activity: &str, body: &str) -> Result<Value, ExportError> {
    serde_json::from_str(body).map_err(|source| ExportError::InvalidJsonBody {
        activity: activity.to_string(),
        source,
    })
}

/// Empty bodies are omitted.
fn nested_activities(
    activities: &[Activity],
) -> Result<Option<Vec<ActivityDocument>>, ExportError> {
    if activities.is_empty() {
        return Ok(None);
    }
    transform_activities(activities, true).map(Some)
}

fn dependency_document(dependency: &Dependency) -> DependencyDocument {
    DependencyDocument {
        activity: dependency.activity.clone(),
        dependency_conditions: dependency.conditions.clone(),
    }
}

fn dataset_reference(reference: &DatasetReference) -> Result<Reference, ExportError> {
    Ok(Reference::dataset(
        &reference.name,
        keyed::encode_non_empty(&reference.parameters, "parameters")?,
    ))
}

fn dataset_references(references: &[DatasetReference]) -> Result<Vec<Reference>, ExportError> {
    references.iter().map(dataset_reference).collect()
}

fn source_document(source: &Source) -> SourceDocument {
    match source {
        Source::RestSource(rest) => {
            let additional_headers = (!rest.additional_headers.is_empty()).then(|| {
                rest.additional_headers
                    .iter()
                    .map(|header| {
                        (
                            header.name.clone(),
                            json!({ "value": header.value, "type": EXPRESSION_TYPE }),
                        )
                    })
                    .collect::<Map<String, Value>>()
            });
            let pagination_rules = (!rest.pagination_rules.is_empty()).then(|| {
                rest.pagination_rules
                    .iter()
                    .map(|rule| (rule.name.clone(), Value::String(rule.value.clone())))
                    .collect::<Map<String, Value>>()
            });
            SourceDocument::RestSource(RestSourceDocument {
                additional_headers,
                pagination_rules,
                ..RestSourceDocument::default()
            })
        }
        Source::JsonSource(json) => SourceDocument::JsonSource(JsonSourceDocument {
            store_settings: json.store_settings.as_ref().map(|settings| {
                StoreSettingsDocument::read(
                    settings.settings_type,
                    settings.recursive,
                    settings.wildcard_file_name.clone(),
                )
            }),
        }),
        Source::AzureSqlSource(query) => {
            SourceDocument::AzureSqlSource(AzureSqlSourceDocument::new(&query.sql_query))
        }
        Source::OdbcSource(query) => {
            SourceDocument::OdbcSource(OdbcSourceDocument::new(&query.sql_query))
        }
    }
}

fn sink_document(sink: Sink) -> SinkDocument {
    match sink {
        Sink::JsonSink => SinkDocument::JsonSink(JsonSinkDocument::default()),
        Sink::AzureSqlSink => SinkDocument::AzureSqlSink,
    }
}

/// Translators only apply to copies reading JSON.
fn copy_translator(activity: &str, copy: &CopyActivity) -> Option<TranslatorDocument> {
    let translator = copy.translator.as_ref()?;
    if !matches!(copy.source, Source::JsonSource(_)) {
        warn!(
            "Ignoring translator of Copy activity '{}': source is not JsonSource",
            activity
        );
        return None;
    }
    Some(translator_document(translator))
}

fn translator_document(translator: &Translator) -> TranslatorDocument {
    TranslatorDocument {
        translator_type: translator.translator_type,
        mappings: translator
            .mappings
            .iter()
            .map(|mapping| MappingDocument {
                source: MappingSourceDocument {
                    path: escape_at(&mapping.source.path),
                },
                sink: MappingSinkDocument {
                    name: escape_at(&mapping.sink.name),
                    sink_type: mapping.sink.sink_type,
                },
            })
            .collect(),
        collection_reference: translator.collection_reference.clone(),
    }
}

/// `@` starts an ADF expression; a literal one is written `@@`.
fn escape_at(value: &str) -> String {
    value.replace('@', "@@")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityType, AzureFunctionActivity, DependencyCondition, ExecutePipelineActivity,
        HttpMethod, IfConditionActivity, JsonSource, LookupActivity, Mapping, Parameter,
        ParameterType, RestSource, SetVariableActivity, SqlQuerySource, StoredProcedureActivity,
        TranslatorType, UntilActivity, WaitActivity, WebActivity,
    };
    use serde_json::json;

    fn wait(name: &str) -> Activity {
        Activity::new(
            name,
            ActivityKind::Wait(WaitActivity {
                wait_time_in_seconds: 1,
            }),
        )
    }

    fn until(name: &str, timeout: Option<&str>, activities: Vec<Activity>) -> Activity {
        Activity::new(
            name,
            ActivityKind::Until(UntilActivity {
                expression: "@equals(1, 1)".to_string(),
                timeout: timeout.map(str::to_string),
                activities,
            }),
        )
    }

    fn if_condition(name: &str) -> Activity {
        Activity::new(
            name,
            ActivityKind::IfCondition(IfConditionActivity {
                expression: "@true".to_string(),
                if_true_activities: vec![wait("Yes")],
                if_false_activities: Vec::new(),
            }),
        )
    }

    fn json_copy(translator: Option<Translator>) -> Activity {
        Activity::new(
            "CopyJson",
            ActivityKind::Copy(CopyActivity {
                source: Source::JsonSource(JsonSource::default()),
                sink: Sink::AzureSqlSink,
                translator,
            }),
        )
    }

    fn sample_of(activity_type: ActivityType) -> Activity {
        let kind = match activity_type {
            ActivityType::Copy => return json_copy(None),
            ActivityType::SqlServerStoredProcedure => {
                ActivityKind::SqlServerStoredProcedure(StoredProcedureActivity {
                    stored_procedure_name: "dbo.Load".to_string(),
                    parameters: Vec::new(),
                })
            }
            ActivityType::Lookup => ActivityKind::Lookup(LookupActivity {
                source: Source::AzureSqlSource(SqlQuerySource {
                    sql_query: "SELECT 1".to_string(),
                }),
                dataset: DatasetReference::new("Table"),
            }),
            ActivityType::AzureFunction => ActivityKind::AzureFunction(AzureFunctionActivity {
                function_name: "Run".to_string(),
                method: HttpMethod::Post,
                body: Some(r#"{"a": 1}"#.to_string()),
            }),
            ActivityType::Until => return until("Loop", None, Vec::new()),
            ActivityType::Wait => return wait("Pause"),
            ActivityType::Web => ActivityKind::Web(WebActivity {
                method: HttpMethod::Get,
                url: "https://example.com".to_string(),
                body: None,
            }),
            ActivityType::SetVariable => ActivityKind::SetVariable(SetVariableActivity {
                variable_name: "done".to_string(),
                value: "true".to_string(),
            }),
            ActivityType::IfCondition => return if_condition("Branch"),
            ActivityType::ExecutePipeline => {
                ActivityKind::ExecutePipeline(ExecutePipelineActivity {
                    pipeline: "Child".to_string(),
                    wait_on_completion: true,
                    parameters: Vec::new(),
                })
            }
        };
        Activity::new("Sample", kind)
    }

    #[test]
    fn every_kind_maps_to_its_adf_type() {
        let expected = [
            (ActivityType::Copy, "Copy"),
            (ActivityType::SqlServerStoredProcedure, "SqlServerStoredProcedure"),
            (ActivityType::Lookup, "Lookup"),
            (ActivityType::AzureFunction, "AzureFunctionActivity"),
            (ActivityType::Until, "Until"),
            (ActivityType::Wait, "Wait"),
            (ActivityType::Web, "WebActivity"),
            (ActivityType::SetVariable, "SetVariable"),
            (ActivityType::IfCondition, "IfCondition"),
            (ActivityType::ExecutePipeline, "ExecutePipeline"),
        ];
        for (activity_type, adf_type) in expected {
            let doc = transform_activity(&sample_of(activity_type), false).unwrap();
            let value = serde_json::to_value(&doc).unwrap();
            assert_eq!(value["type"], adf_type, "{activity_type:?}");
        }
    }

    #[test]
    fn control_flow_cannot_be_nested() {
        for activity in [until("Loop", None, Vec::new()), if_condition("Branch")] {
            let err = transform_activity(&activity, true).unwrap_err();
            assert!(
                matches!(err, ExportError::InvalidNesting { ref activity, .. } if activity == "Loop" || activity == "Branch")
            );
            assert!(transform_activity(&activity, false).is_ok());
        }
    }

    #[test]
    fn nested_control_flow_inside_until_fails() {
        let outer = until("Outer", None, vec![if_condition("Inner")]);
        let err = transform_activity(&outer, false).unwrap_err();
        assert!(matches!(err, ExportError::InvalidNesting { ref activity, .. } if activity == "Inner"));
    }

    #[test]
    fn until_timeout_defaults_to_seven_days() {
        for timeout in [None, Some("")] {
            let doc = transform_activity(&until("Loop", timeout, vec![wait("W")]), false).unwrap();
            let value = serde_json::to_value(&doc).unwrap();
            assert_eq!(value["typeProperties"]["timeout"], "7.00:00:00");
            assert_eq!(value["typeProperties"]["activities"][0]["name"], "W");
        }

        let doc = transform_activity(&until("Loop", Some("1.00:00:00"), Vec::new()), false).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["typeProperties"]["timeout"], "1.00:00:00");
        assert!(value["typeProperties"].get("activities").is_none());
        assert_eq!(value["inputs"], json!([]));
        assert!(value.get("policy").is_none());
    }

    #[test]
    fn web_body_defaults_to_empty_object_literal() {
        let doc = transform_activity(&sample_of(ActivityType::Web), false).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["typeProperties"]["body"], json!("{}"));
        assert!(value.get("policy").is_none());
        assert!(value.get("inputs").is_none());
    }

    #[test]
    fn azure_function_body_is_decoded() {
        let doc = transform_activity(&sample_of(ActivityType::AzureFunction), false).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["typeProperties"]["body"], json!({"a": 1}));
        assert!(value["typeProperties"].get("enableStaging").is_none());
        assert!(value.get("policy").is_some());
    }

    #[test]
    fn azure_function_body_must_be_json() {
        let activity = Activity::new(
            "Broken",
            ActivityKind::AzureFunction(AzureFunctionActivity {
                function_name: "Run".to_string(),
                method: HttpMethod::Post,
                body: Some("{not json".to_string()),
            }),
        );
        let err = transform_activity(&activity, false).unwrap_err();
        assert!(matches!(err, ExportError::InvalidJsonBody { ref activity, .. } if activity == "Broken"));
    }

    #[test]
    fn web_body_is_decoded_and_must_be_json() {
        let web = |body: &str| {
            Activity::new(
                "Call",
                ActivityKind::Web(WebActivity {
                    method: HttpMethod::Post,
                    url: "https://example.com".to_string(),
                    body: Some(body.to_string()),
                }),
            )
        };

        let doc = transform_activity(&web(r#"{"id": 7}"#), false).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["typeProperties"]["body"], json!({"id": 7}));

        let err = transform_activity(&web("plain text"), false).unwrap_err();
        assert!(matches!(err, ExportError::InvalidJsonBody { ref activity, .. } if activity == "Call"));
    }

    #[test]
    fn translator_escapes_at_signs() {
        let translator = Translator {
            translator_type: TranslatorType::TabularTranslator,
            collection_reference: Some("$['value']".to_string()),
            mappings: vec![Mapping::new("@odata.id", "@id")],
        };
        let doc = transform_activity(&json_copy(Some(translator)), false).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        let mapping = &value["typeProperties"]["translator"]["mappings"][0];
        assert_eq!(mapping["source"]["path"], "@@odata.id");
        assert_eq!(mapping["sink"]["name"], "@@id");
        assert_eq!(mapping["sink"]["type"], "String");
        assert_eq!(value["typeProperties"]["enableStaging"], false);
    }

    #[test]
    fn translator_is_dropped_for_non_json_sources() {
        let activity = Activity::new(
            "CopyRest",
            ActivityKind::Copy(CopyActivity {
                source: Source::RestSource(RestSource::default()),
                sink: Sink::JsonSink,
                translator: Some(Translator {
                    translator_type: TranslatorType::TabularTranslator,
                    collection_reference: None,
                    mappings: vec![Mapping::new("a", "b")],
                }),
            }),
        );
        let doc = transform_activity(&activity, false).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value["typeProperties"].get("translator").is_none());
        assert_eq!(value["typeProperties"]["source"]["requestMethod"], "GET");
    }

    #[test]
    fn azure_sql_copy_suppresses_references_and_staging() {
        let activity = Activity::new(
            "CopySql",
            ActivityKind::Copy(CopyActivity {
                source: Source::AzureSqlSource(SqlQuerySource {
                    sql_query: "SELECT * FROM t".to_string(),
                }),
                sink: Sink::JsonSink,
                translator: None,
            }),
        )
        .with_input(DatasetReference::new("In"));
        let doc = transform_activity(&activity, false).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("inputs").is_none());
        assert!(value.get("outputs").is_none());
        assert!(value["typeProperties"].get("enableStaging").is_none());
        assert_eq!(value["typeProperties"]["source"]["queryTimeout"], "02:00:00");
    }

    #[test]
    fn copy_emits_dataset_references_with_parameters() {
        let activity = json_copy(None)
            .with_input(
                DatasetReference::new("In")
                    .with_parameter(Parameter::new("file", ParameterType::String).with_value("a.json")),
            )
            .with_output(DatasetReference::new("Out"));
        let value = serde_json::to_value(transform_activity(&activity, false).unwrap()).unwrap();
        assert_eq!(
            value["inputs"],
            json!([{
                "referenceName": "In",
                "type": "DatasetReference",
                "parameters": {"file": {"type": "String", "value": "a.json"}}
            }])
        );
        assert_eq!(
            value["outputs"],
            json!([{"referenceName": "Out", "type": "DatasetReference"}])
        );
    }

    #[test]
    fn dependencies_are_omitted_only_when_absent() {
        let doc = transform_activity(&wait("Solo"), false).unwrap();
        assert!(doc.depends_on.is_none());

        let chained = wait("Second")
            .depends_on("First", &[DependencyCondition::Succeeded, DependencyCondition::Skipped]);
        let value = serde_json::to_value(transform_activity(&chained, false).unwrap()).unwrap();
        assert_eq!(
            value["dependsOn"],
            json!([{"activity": "First", "dependencyConditions": ["Succeeded", "Skipped"]}])
        );
    }

    #[test]
    fn execute_pipeline_reference() {
        let activity = Activity::new(
            "RunChild",
            ActivityKind::ExecutePipeline(ExecutePipelineActivity {
                pipeline: "Child".to_string(),
                wait_on_completion: true,
                parameters: vec![Parameter::new("day", ParameterType::String).with_value("1")],
            }),
        );
        let value = serde_json::to_value(transform_activity(&activity, false).unwrap()).unwrap();
        assert_eq!(
            value["typeProperties"],
            json!({
                "pipeline": {"referenceName": "Child", "type": "PipelineReference"},
                "waitOnCompletion": true,
                "parameters": {"day": {"type": "String", "value": "1"}}
            })
        );
    }

    #[test]
    fn linked_service_reference_is_attached() {
        let activity = sample_of(ActivityType::SqlServerStoredProcedure).with_linked_service("Sql");
        let value = serde_json::to_value(transform_activity(&activity, false).unwrap()).unwrap();
        assert_eq!(
            value["linkedServiceName"],
            json!({"referenceName": "Sql", "type": "LinkedServiceReference"})
        );
        assert!(value["typeProperties"].get("storedProcedureParameters").is_none());
    }

    #[test]
    fn transform_is_deterministic() {
        for activity_type in ActivityType::ALL {
            let activity = sample_of(activity_type);
            assert_eq!(
                transform_activity(&activity, false).unwrap(),
                transform_activity(&activity, false).unwrap()
            );
        }
    }
}
