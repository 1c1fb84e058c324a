//! Model loading functionality
//!
//! Reads ADF project models from YAML or JSON files.
//!
//! A model file holds either a single project or a project set:
//! - `name: ...` with `pipelines`, `datasets`, `linkedServices` - one project
//! - `projects: [...]` - several projects
//!
//! Files ending in `.json` are parsed as JSON, everything else as YAML. A
//! directory is loaded by reading every `.yaml`, `.yml` and `.json` file in it,
//! in file-name order.

use crate::models::{Project, ProjectSet};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

static RE_UNKNOWN_VARIANT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"unknown variant `([^`]*)`, expected (?:one of )?(.*)").expect("Invalid regex")
});

/// Error while loading a model
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Unsupported {category} kind '{kind}' in {path}")]
    UnsupportedKind {
        path: PathBuf,
        category: &'static str,
        kind: String,
    },
}

/// Supported model file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Yaml,
    Json,
}

impl ModelFormat {
    /// Format implied by a file extension; YAML unless the file ends in `.json`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ModelFormat::Json,
            _ => ModelFormat::Yaml,
        }
    }
}

/// Loads project models from the file system
#[derive(Debug, Default)]
pub struct ModelLoader;

impl ModelLoader {
    /// Create a new model loader
    pub fn new() -> Self {
        Self
    }

    /// Load a model file or every model file in a directory.
    pub fn load_path(&self, path: &Path) -> Result<ProjectSet, LoadError> {
        if path.is_dir() {
            self.load_dir(path)
        } else {
            self.load_file(path)
        }
    }

    /// Load one model file.
    pub fn load_file(&self, path: &Path) -> Result<ProjectSet, LoadError> {
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let set = self.parse(&content, ModelFormat::from_path(path), path)?;
        info!(
            "Loaded {} project(s) from {}",
            set.projects.len(),
            path.display()
        );
        Ok(set)
    }

    fn load_dir(&self, dir: &Path) -> Result<ProjectSet, LoadError> {
        let io_error = |e: std::io::Error| LoadError::Io {
            path: dir.to_path_buf(),
            message: e.to_string(),
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && is_model_file(&path) {
                files.push(path);
            }
        }
        files.sort();

        let mut set = ProjectSet::default();
        for file in files {
            set.projects.extend(self.load_file(&file)?.projects);
        }
        info!(
            "Loaded {} project(s) from directory {}",
            set.projects.len(),
            dir.display()
        );
        Ok(set)
    }

    /// Parse model text. `origin` only labels errors.
    pub fn parse(
        &self,
        content: &str,
        format: ModelFormat,
        origin: &Path,
    ) -> Result<ProjectSet, LoadError> {
        let result = match format {
            ModelFormat::Json => parse_json(content),
            ModelFormat::Yaml => parse_yaml(content),
        };
        let set = result.map_err(|message| classify(origin, message))?;
        debug!(
            "Parsed {} project(s) from {}",
            set.projects.len(),
            origin.display()
        );
        Ok(set)
    }

    /// Parse YAML model text.
    pub fn from_yaml_str(&self, content: &str) -> Result<ProjectSet, LoadError> {
        self.parse(content, ModelFormat::Yaml, Path::new("<yaml>"))
    }

    /// Parse JSON model text.
    pub fn from_json_str(&self, content: &str) -> Result<ProjectSet, LoadError> {
        self.parse(content, ModelFormat::Json, Path::new("<json>"))
    }
}

fn is_model_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml" | "json")
    )
}

fn parse_yaml(content: &str) -> Result<ProjectSet, String> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    let set = if value.get("projects").is_some() {
        serde_yaml::from_value::<ProjectSet>(value)
    } else {
        serde_yaml::from_value::<Project>(value).map(single)
    };
    set.map_err(|e| e.to_string())
}

fn parse_json(content: &str) -> Result<ProjectSet, String> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let set = if value.get("projects").is_some() {
        serde_json::from_value::<ProjectSet>(value)
    } else {
        serde_json::from_value::<Project>(value).map(single)
    };
    set.map_err(|e| e.to_string())
}

fn single(project: Project) -> ProjectSet {
    ProjectSet {
        projects: vec![project],
    }
}

/// Turn serde's "unknown variant" message into [`LoadError::UnsupportedKind`],
/// naming the closed set the tag belongs to.
fn classify(path: &Path, message: String) -> LoadError {
    if let Some(captures) = RE_UNKNOWN_VARIANT.captures(&message) {
        let expected = captures.get(2).map_or("", |m| m.as_str());
        return LoadError::UnsupportedKind {
            path: path.to_path_buf(),
            category: category_of(expected),
            kind: captures[1].to_string(),
        };
    }
    LoadError::Parse {
        path: path.to_path_buf(),
        message,
    }
}

fn category_of(expected: &str) -> &'static str {
    let has = |variant: &str| expected.contains(&format!("`{variant}`"));
    if has("SqlServerStoredProcedure") {
        "activity"
    } else if has("RestSource") {
        "source"
    } else if has("JsonSink") {
        "sink"
    } else if has("RestResource") {
        "dataset"
    } else if has("RestService") {
        "linked service"
    } else if has("Succeeded") {
        "dependency condition"
    } else {
        "value"
    }
}
