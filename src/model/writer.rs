//! Output writing functionality
//!
//! Writes the documents of a project to disk.
//!
//! File structure:
//! - Output directory
//!   - `{project}/`
//!     - `Pipelines/{name}.json`
//!     - `DataSets/{name}.json`
//!     - `LinkedServices/{name}.json`
//!     - `deploy.ps1` - deployment script (optional)

use crate::document::{ProjectDocument, Resource};
use crate::export::DeployScriptExporter;
use crate::export::deploy_script::DEPLOY_SCRIPT_FILE;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Options controlling how documents are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Pretty-print JSON documents
    pub pretty: bool,
    /// Write `deploy.ps1` next to the resource folders
    pub deploy_script: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            deploy_script: true,
        }
    }
}

/// Summary of one written project
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "the write summary lists the files that were produced"]
pub struct WriteSummary {
    pub project_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Writes project documents under an output directory
pub struct ProjectWriter {
    output_dir: PathBuf,
    options: WriterOptions,
    deploy_script: DeployScriptExporter,
}

impl ProjectWriter {
    /// Create a writer rooted at `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, options: WriterOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
            deploy_script: DeployScriptExporter::new(),
        }
    }

    /// Use a customised deployment script exporter
    pub fn with_deploy_script(mut self, exporter: DeployScriptExporter) -> Self {
        self.deploy_script = exporter;
        self
    }

    /// Directory a project is written to
    pub fn project_dir(&self, project_name: &str) -> PathBuf {
        self.output_dir.join(project_name)
    }

    /// Write every document of a project, plus the deployment script when
    /// enabled. Existing files with the same names are overwritten.
    ///
    /// Fails without writing anything if the project name, or the name of
    /// any resource, is not a single plain path component.
    pub fn write(&self, project: &ProjectDocument) -> Result<WriteSummary> {
        ensure_file_name("project", &project.name)?;
        ensure_resource_names(&project.pipelines)?;
        ensure_resource_names(&project.datasets)?;
        ensure_resource_names(&project.linked_services)?;

        let project_dir = self.project_dir(&project.name);
        let mut files = Vec::with_capacity(project.resource_count() + 1);

        files.extend(self.write_resources(&project_dir, &project.pipelines)?);
        files.extend(self.write_resources(&project_dir, &project.datasets)?);
        files.extend(self.write_resources(&project_dir, &project.linked_services)?);

        if self.options.deploy_script {
            fs::create_dir_all(&project_dir).with_context(|| {
                format!("Failed to create directory {}", project_dir.display())
            })?;
            let path = project_dir.join(DEPLOY_SCRIPT_FILE);
            let script = self.deploy_script.export(&project.name);
            fs::write(&path, script.content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            files.push(path);
        }

        info!(
            "Wrote {} file(s) for project '{}' to {}",
            files.len(),
            project.name,
            project_dir.display()
        );
        Ok(WriteSummary { project_dir, files })
    }

    fn write_resources<R: Resource>(
        &self,
        project_dir: &Path,
        resources: &[R],
    ) -> Result<Vec<PathBuf>> {
        if resources.is_empty() {
            return Ok(Vec::new());
        }

        let dir = project_dir.join(R::FOLDER);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let mut written = Vec::with_capacity(resources.len());
        for resource in resources {
            let path = dir.join(format!("{}.json", resource.name()));
            let json = if self.options.pretty {
                serde_json::to_string_pretty(resource)
            } else {
                serde_json::to_string(resource)
            }
            .with_context(|| format!("Failed to serialize '{}'", resource.name()))?;

            fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            debug!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

fn ensure_resource_names<R: Resource>(resources: &[R]) -> Result<()> {
    resources
        .iter()
        .try_for_each(|resource| ensure_file_name(R::FOLDER, resource.name()))
}

/// Names become directory and file names, so they must not climb out of the
/// output directory or replace it.
fn ensure_file_name(kind: &str, name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => bail!("{kind} name '{name}' cannot be used as a file name"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::build_project_document;
    use crate::models::{LinkedService, LinkedServiceType, Project};
    use tempfile::TempDir;

    #[test]
    fn writes_resource_folders_and_script() {
        let mut project = Project::new("Sales");
        project
            .linked_services
            .push(LinkedService::new("Blob", LinkedServiceType::AzureBlobStorage));
        let document = build_project_document(&project).unwrap();

        let temp = TempDir::new().unwrap();
        let summary = ProjectWriter::new(temp.path(), WriterOptions::default())
            .write(&document)
            .unwrap();

        let blob = temp.path().join("Sales/LinkedServices/Blob.json");
        assert!(blob.exists());
        assert!(temp.path().join("Sales/deploy.ps1").exists());
        assert!(!temp.path().join("Sales/Pipelines").exists());
        assert_eq!(summary.files.len(), 2);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(blob).unwrap()).unwrap();
        assert_eq!(written["properties"]["type"], "AzureBlobStorage");
    }

    #[test]
    fn refuses_names_outside_the_output_directory() {
        let output = TempDir::new().unwrap();
        let outside = output.path().join("escaped");
        let writer = ProjectWriter::new(output.path().join("out"), WriterOptions::default());

        for name in ["../escaped", "/tmp/absolute", "..", "."] {
            let mut project = Project::new(name);
            project
                .linked_services
                .push(LinkedService::new("Blob", LinkedServiceType::AzureBlobStorage));
            let document = build_project_document(&project).unwrap();
            let err = writer.write(&document).unwrap_err();
            assert!(err.to_string().contains("cannot be used as a file name"), "{name}");
        }
        assert!(!outside.exists());
        assert!(!output.path().join("out").exists());

        let mut project = Project::new("Sales");
        project
            .linked_services
            .push(LinkedService::new("../Blob", LinkedServiceType::AzureBlobStorage));
        let document = build_project_document(&project).unwrap();
        assert!(writer.write(&document).is_err());
        assert!(!output.path().join("out/Sales").exists());
    }

    #[test]
    fn deploy_script_can_be_disabled() {
        let document = build_project_document(&Project::new("Empty")).unwrap();
        let temp = TempDir::new().unwrap();
        let options = WriterOptions {
            pretty: false,
            deploy_script: false,
        };
        let summary = ProjectWriter::new(temp.path(), options)
            .write(&document)
            .unwrap();
        assert!(summary.files.is_empty());
        assert!(!temp.path().join("Empty/deploy.ps1").exists());
    }
}
