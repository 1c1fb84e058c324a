//! CLI-specific error types

use crate::export::ExportError;
use crate::model::LoadError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Project '{project}' failed validation with {issues} issue(s)")]
    ValidationFailed { project: String, issues: usize },

    #[error("Load error: {0}")]
    LoadError(#[from] LoadError),

    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),
}

impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        CliError::WriteError(format!("{:#}", error))
    }
}
