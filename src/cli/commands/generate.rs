//! Generate command implementation

use super::validate::check_projects;
use crate::cli::config::CodegenConfig;
use crate::cli::error::CliError;
use crate::export::build_project_document;
use crate::model::{ModelLoader, ProjectWriter, WriteSummary, WriterOptions};
use crate::validation::ProjectValidator;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Arguments for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Model file, or a directory of model files
    pub input: PathBuf,
    /// Output directory; overrides the configuration file
    pub output: Option<PathBuf>,
    /// Explicit configuration file; otherwise `adf-codegen.toml` in the
    /// working directory is used when present
    pub config: Option<PathBuf>,
    /// Write compact JSON
    pub compact: bool,
    /// Skip `deploy.ps1`
    pub no_deploy_script: bool,
    /// Skip project validation
    pub skip_validation: bool,
}

impl GenerateArgs {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// Resolve the effective configuration: file, then environment, then flags.
    pub fn resolve_config(&self) -> Result<CodegenConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => CodegenConfig::load_file(path)?,
            None => CodegenConfig::load(Path::new("."))?,
        };

        if let Some(output) = &self.output {
            config.output.directory = output.clone();
        }
        if self.compact {
            config.output.pretty = false;
        }
        if self.no_deploy_script {
            config.output.deploy_script = false;
        }
        if self.skip_validation {
            config.validation.enabled = false;
        }
        Ok(config)
    }
}

/// Handle the generate command
///
/// Every project is validated and built before the first file is written,
/// so a failing project leaves the output directory untouched.
pub fn handle_generate(args: &GenerateArgs) -> Result<Vec<WriteSummary>, CliError> {
    let started = Instant::now();

    if !args.input.exists() {
        return Err(CliError::FileNotFound(args.input.clone()));
    }
    let config = args.resolve_config()?;

    let set = ModelLoader::new().load_path(&args.input)?;

    if config.validation.enabled {
        check_projects(&ProjectValidator::new(), &set)?;
    }

    let documents = set
        .projects
        .iter()
        .map(build_project_document)
        .collect::<Result<Vec<_>, _>>()?;

    let writer = ProjectWriter::new(
        &config.output.directory,
        WriterOptions {
            pretty: config.output.pretty,
            deploy_script: config.output.deploy_script,
        },
    );

    let mut summaries = Vec::with_capacity(documents.len());
    for document in &documents {
        let summary = writer.write(document)?;
        println!(
            "Wrote {} file(s) to {}",
            summary.files.len(),
            summary.project_dir.display()
        );
        summaries.push(summary);
    }

    info!(
        "Generated {} project(s) into {}",
        summaries.len(),
        config.output.directory.display()
    );
    println!(
        "Finished generating Azure Data Factory project for {} in {}.",
        args.input.display(),
        format_elapsed(started.elapsed())
    );
    Ok(summaries)
}

/// Format a duration as `hh:mm:ss.fff`
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_millis = elapsed.as_millis();
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis / 60_000) % 60;
    let seconds = (total_millis / 1000) % 60;
    let millis = total_millis % 1000;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}
