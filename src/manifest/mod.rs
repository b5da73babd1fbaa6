//! dbt artifact loading
//!
//! Builds [`DbtModel`](crate::models::DbtModel)s from a compiled dbt project:
//! - `dbt_project.yml` - project name and target path
//! - `manifest.json` - models, columns, descriptions and `meta.looker` blocks
//! - `catalog.json` - column types as reported by the warehouse

mod artifacts;
mod error;
mod loader;

pub use artifacts::DbtProjectFile;
pub use error::{ManifestError, ManifestResult};
pub use loader::{DbtProject, ManifestLoader, normalize_catalog_type, parse_models};
