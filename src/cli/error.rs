//! CLI error type

use dbt_lookml::{ConfigError, ExportError, ManifestError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Failed to write {}: {source}", path.display())]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
