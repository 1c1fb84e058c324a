//! Activity model
//!
//! An [`Activity`] is one step of a pipeline. The fields every activity shares
//! live on the struct; the kind-specific payload is the closed [`ActivityKind`]
//! union, so each kind carries exactly the fields that are valid for it.

use super::enums::{
    ActivityType, DependencyCondition, HttpMethod, MappingSinkType, StoreSettingsType,
    StoredProcedureParameterType, TranslatorType, ValueType,
};
use super::project::Parameter;
use serde::{Deserialize, Serialize};

/// A pipeline activity.
///
/// # Example
///
/// ```rust
/// use adf_codegen::models::{Activity, ActivityKind, WaitActivity, ActivityType};
///
/// let wait = Activity::new("Pause", ActivityKind::Wait(WaitActivity { wait_time_in_seconds: 30 }));
/// assert_eq!(wait.activity_type(), ActivityType::Wait);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    /// `None` and `Some(vec![])` are distinct: only `None` omits `dependsOn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<Dependency>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<DatasetReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<DatasetReference>,
    /// Name of the linked service the activity runs against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_service: Option<String>,
    #[serde(flatten)]
    pub kind: ActivityKind,
}

impl Activity {
    pub fn new(name: impl Into<String>, kind: ActivityKind) -> Self {
        Self {
            name: name.into(),
            dependencies: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
            linked_service: None,
            kind,
        }
    }

    /// Add a dependency on a previously declared activity.
    pub fn depends_on(
        mut self,
        activity: impl Into<String>,
        conditions: &[DependencyCondition],
    ) -> Self {
        self.dependencies
            .get_or_insert_with(Vec::new)
            .push(Dependency {
                activity: activity.into(),
                conditions: conditions.to_vec(),
            });
        self
    }

    pub fn with_linked_service(mut self, name: impl Into<String>) -> Self {
        self.linked_service = Some(name.into());
        self
    }

    pub fn with_input(mut self, input: DatasetReference) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_output(mut self, output: DatasetReference) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn activity_type(&self) -> ActivityType {
        self.kind.activity_type()
    }
}

/// Kind-specific activity payload, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivityKind {
    Copy(CopyActivity),
    SqlServerStoredProcedure(StoredProcedureActivity),
    Lookup(LookupActivity),
    #[serde(alias = "AzureFunctionActivity")]
    AzureFunction(AzureFunctionActivity),
    Until(UntilActivity),
    Wait(WaitActivity),
    #[serde(alias = "WebActivity")]
    Web(WebActivity),
    SetVariable(SetVariableActivity),
    IfCondition(IfConditionActivity),
    ExecutePipeline(ExecutePipelineActivity),
}

impl ActivityKind {
    pub fn activity_type(&self) -> ActivityType {
        match self {
            ActivityKind::Copy(_) => ActivityType::Copy,
            ActivityKind::SqlServerStoredProcedure(_) => ActivityType::SqlServerStoredProcedure,
            ActivityKind::Lookup(_) => ActivityType::Lookup,
            ActivityKind::AzureFunction(_) => ActivityType::AzureFunction,
            ActivityKind::Until(_) => ActivityType::Until,
            ActivityKind::Wait(_) => ActivityType::Wait,
            ActivityKind::Web(_) => ActivityType::Web,
            ActivityKind::SetVariable(_) => ActivityType::SetVariable,
            ActivityKind::IfCondition(_) => ActivityType::IfCondition,
            ActivityKind::ExecutePipeline(_) => ActivityType::ExecutePipeline,
        }
    }

    /// Activity lists nested directly under this activity.
    pub fn nested_activities(&self) -> Vec<&[Activity]> {
        match self {
            ActivityKind::Until(until) => vec![until.activities.as_slice()],
            ActivityKind::IfCondition(branch) => vec![
                branch.if_true_activities.as_slice(),
                branch.if_false_activities.as_slice(),
            ],
            _ => Vec::new(),
        }
    }
}

/// Edge to an activity that must reach one of `conditions` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    #[serde(alias = "dependentOnActivity")]
    pub activity: String,
    #[serde(default, alias = "dependencyConditions")]
    pub conditions: Vec<DependencyCondition>,
}

/// Reference to a dataset, optionally injecting parameter values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl DatasetReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CopyActivity {
    pub source: Source,
    pub sink: Sink,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator: Option<Translator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoredProcedureActivity {
    pub stored_procedure_name: String,
    #[serde(default)]
    pub parameters: Vec<StoredProcedureParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProcedureParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: StoredProcedureParameterType,
    pub value: String,
    #[serde(default)]
    pub value_type: ValueType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LookupActivity {
    pub source: Source,
    pub dataset: DatasetReference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AzureFunctionActivity {
    pub function_name: String,
    pub method: HttpMethod,
    /// JSON text, decoded into the generated document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UntilActivity {
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "timeOut")]
    pub timeout: Option<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WaitActivity {
    pub wait_time_in_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WebActivity {
    pub method: HttpMethod,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetVariableActivity {
    pub variable_name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IfConditionActivity {
    pub expression: String,
    #[serde(default)]
    pub if_true_activities: Vec<Activity>,
    #[serde(default)]
    pub if_false_activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExecutePipelineActivity {
    /// Name of the pipeline to invoke.
    pub pipeline: String,
    #[serde(default)]
    pub wait_on_completion: bool,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// Data source of a Copy or Lookup activity, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Source {
    RestSource(RestSource),
    JsonSource(JsonSource),
    AzureSqlSource(SqlQuerySource),
    OdbcSource(SqlQuerySource),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestSource {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_headers: Vec<AdditionalHeader>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pagination_rules: Vec<PaginationRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalHeader {
    pub name: String,
    pub value: String,
}

/// A REST pagination rule. ADF names rules by their key, `AbsoluteUrl` being
/// the one in common use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRule {
    #[serde(default = "default_pagination_rule_name")]
    pub name: String,
    #[serde(alias = "absoluteUrl")]
    pub value: String,
}

fn default_pagination_rule_name() -> String {
    "AbsoluteUrl".to_string()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_settings: Option<StoreSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    #[serde(default, rename = "type")]
    pub settings_type: StoreSettingsType,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard_file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlQuerySource {
    pub sql_query: String,
}

/// Data sink of a Copy activity, tagged by `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Sink {
    JsonSink,
    AzureSqlSink,
}

/// Column mapping between a Copy activity's source and sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translator {
    #[serde(default, rename = "type")]
    pub translator_type: TranslatorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_reference: Option<String>,
    #[serde(default)]
    pub mappings: Vec<Mapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    pub source: MappingSource,
    pub sink: MappingSink,
}

impl Mapping {
    pub fn new(path: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            source: MappingSource { path: path.into() },
            sink: MappingSink {
                name: column.into(),
                sink_type: MappingSinkType::String,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSource {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSink {
    pub name: String,
    #[serde(default, rename = "type")]
    pub sink_type: MappingSinkType,
}
