//! Pipeline exporter

use super::ExportError;
use super::activity::transform_activities;
use crate::document::keyed;
use crate::document::pipeline::{PipelineDocument, PipelineProperties};
use crate::models::{Parameter, Pipeline};
use tracing::debug;

/// Transform one pipeline: its root activities, parameter declarations and
/// variables.
///
/// Declared parameters carry only name and type; a `value` on a pipeline
/// parameter is ignored. Empty parameter and variable lists are omitted.
pub fn transform_pipeline(pipeline: &Pipeline) -> Result<PipelineDocument, ExportError> {
    let properties = &pipeline.properties;

    let declarations: Vec<Parameter> = properties
        .parameters
        .iter()
        .map(|parameter| Parameter::new(&parameter.name, parameter.parameter_type))
        .collect();

    let document = PipelineDocument::new(
        &pipeline.name,
        PipelineProperties {
            activities: transform_activities(&properties.activities, false)?,
            parameters: keyed::encode_non_empty(&declarations, "parameters")?,
            variables: keyed::encode_non_empty(&properties.variables, "variables")?,
            annotations: Vec::new(),
        },
    );

    debug!(
        "Transformed pipeline '{}' with {} activities",
        pipeline.name,
        document.properties.activities.len()
    );
    Ok(document)
}
