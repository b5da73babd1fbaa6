//! Configuration for a generation run

use crate::manifest::ManifestLoader;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Where to read the dbt project from and where to write LookML to
///
/// Every field is optional in the YAML form:
///
/// ```yaml
/// project_dir: ./analytics
/// target_dir: ./analytics/target
/// output_dir: ./lookml
/// tag: looker
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory containing dbt_project.yml
    pub project_dir: PathBuf,
    /// Directory containing manifest.json and catalog.json; defaults to the
    /// project's `target-path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dir: Option<PathBuf>,
    /// Output root; views are written to `<output_dir>/views`
    pub output_dir: PathBuf,
    /// Only generate models carrying this dbt tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            target_dir: None,
            output_dir: PathBuf::from("lookml"),
            tag: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a YAML config file
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }

    pub fn with_target_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.target_dir = Some(dir.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Directory view files are written to
    pub fn views_dir(&self) -> PathBuf {
        self.output_dir.join("views")
    }

    /// Loader for the configured project
    pub fn loader(&self) -> ManifestLoader {
        let mut loader = ManifestLoader::new(&self.project_dir);
        if let Some(dir) = &self.target_dir {
            loader = loader.with_target_dir(dir);
        }
        if let Some(tag) = &self.tag {
            loader = loader.with_tag(tag);
        }
        loader
    }
}
