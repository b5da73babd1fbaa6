//! dbt-lookml - Generate LookML from dbt project artifacts
//!
//! Provides:
//! - dbt model types with `meta.looker` dimension, measure and join settings
//! - Warehouse type mapping for BigQuery, Snowflake, Redshift and Postgres
//! - View (`<model>.view`) and explore (`<model>.model`) generation
//! - A LookML text writer
//! - Loading of `dbt_project.yml`, `manifest.json` and `catalog.json`

pub mod config;
pub mod export;
pub mod lookml;
pub mod manifest;
pub mod models;
pub mod typemap;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{ConfigError, GeneratorConfig};
pub use export::{ExportError, ExportResult, LookMLExporter, LookmlFile, generate_explore, generate_view};
pub use manifest::{DbtProject, ManifestError, ManifestLoader};
pub use typemap::map_adapter_type;

// Re-export models
pub use models::enums::*;
pub use models::{DbtColumn, DbtModel, LookerJoin, LookerMeasure};
