//! Error types for loading dbt artifacts

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dbt project
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read an artifact file
    #[error("Failed to read dbt artifact: {}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed manifest.json or catalog.json
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Malformed dbt_project.yml
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A model node that does not have the expected shape
    #[error("Invalid model node {unique_id}: {source}")]
    InvalidNode {
        unique_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Adapter without a type table
    #[error("Unsupported dbt adapter: {0}")]
    UnsupportedAdapter(String),
}

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ManifestError::UnsupportedAdapter("databricks".to_string());
        assert!(err.to_string().contains("databricks"));

        let err = ManifestError::ReadError {
            path: PathBuf::from("target/manifest.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("target/manifest.json"));
    }
}
