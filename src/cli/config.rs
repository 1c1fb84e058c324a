//! Generator configuration file support
//!
//! Handles parsing of `adf-codegen.toml` configuration files and
//! environment variable overrides. Command-line flags are applied on top by
//! the command handlers.

use super::error::CliError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration filename
pub const CONFIG_FILENAME: &str = "adf-codegen.toml";

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Environment variable for the output directory
pub const ENV_OUTPUT_DIR: &str = "ADF_CODEGEN_OUTPUT_DIR";

/// Environment variable that disables project validation when set to a truthy value
pub const ENV_SKIP_VALIDATION: &str = "ADF_CODEGEN_SKIP_VALIDATION";

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Directory projects are written under
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,

    /// Pretty-print generated JSON
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Write a `deploy.ps1` per project
    #[serde(default = "default_true")]
    pub deploy_script: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_true() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            pretty: true,
            deploy_script: true,
        }
    }
}

/// Validation configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSection {
    /// Validate projects before generating
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ValidationSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Main configuration structure
///
/// Represents the `adf-codegen.toml` configuration file format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodegenConfig {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub validation: ValidationSection,
}

impl CodegenConfig {
    /// Load configuration from a directory
    ///
    /// Looks for `adf-codegen.toml` in the directory and falls back to
    /// defaults if it is not there. Environment overrides are applied either way.
    pub fn load(dir: &Path) -> Result<Self, CliError> {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Load configuration from an explicit file
    pub fn load_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
        let mut config = Self::parse(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, CliError> {
        toml::from_str(content)
            .map_err(|e| CliError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(ENV_OUTPUT_DIR)
            && !dir.is_empty()
        {
            self.output.directory = PathBuf::from(dir);
        }

        if let Ok(skip) = std::env::var(ENV_SKIP_VALIDATION)
            && is_truthy(&skip)
        {
            self.validation.enabled = false;
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_use_defaults() {
        let config = CodegenConfig::parse("").unwrap();
        assert_eq!(config.output.directory, PathBuf::from("output"));
        assert!(config.output.pretty);
        assert!(config.output.deploy_script);
        assert!(config.validation.enabled);
    }

    #[test]
    fn parses_all_sections() {
        let config = CodegenConfig::parse(
            r#"
[output]
directory = "build/adf"
pretty = false
deploy_script = false

[validation]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(config.output.directory, PathBuf::from("build/adf"));
        assert!(!config.output.pretty);
        assert!(!config.output.deploy_script);
        assert!(!config.validation.enabled);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = CodegenConfig::parse("[output\ndirectory = 1").unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" TRUE "));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}
