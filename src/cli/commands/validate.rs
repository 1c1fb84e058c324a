//! Validate command implementation

use crate::cli::error::CliError;
use crate::model::ModelLoader;
use crate::models::ProjectSet;
use crate::validation::{ProjectValidationResult, ProjectValidator};
use std::path::Path;
use tracing::warn;

/// Validate every project of a set, printing every issue found.
///
/// Returns [`CliError::ValidationFailed`] for the first project with issues.
pub fn check_projects(validator: &ProjectValidator, set: &ProjectSet) -> Result<(), CliError> {
    validator
        .validate_set(set)
        .into_iter()
        .try_for_each(report)
}

fn report(result: ProjectValidationResult) -> Result<(), CliError> {
    if result.is_valid() {
        println!("Project '{}' is valid", result.project);
        return Ok(());
    }

    for issue in &result.issues {
        warn!("{}: {}", result.project, issue);
        eprintln!("  {}", issue);
    }
    Err(CliError::ValidationFailed {
        project: result.project,
        issues: result.issues.len(),
    })
}

/// Handle the validate command
pub fn handle_validate(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.to_path_buf()));
    }

    let set = ModelLoader::new().load_path(input)?;
    check_projects(&ProjectValidator::new(), &set)?;

    println!("Validation successful");
    Ok(())
}
