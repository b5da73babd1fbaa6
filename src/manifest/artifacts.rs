//! Raw shapes of the dbt artifacts, limited to the fields the exporter reads

use crate::models::{ColumnMeta, ModelMeta};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;

/// `dbt_project.yml`
#[derive(Debug, Clone, Deserialize)]
pub struct DbtProjectFile {
    pub name: String,
    #[serde(rename = "target-path", default)]
    pub target_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestMetadata {
    pub adapter_type: String,
}

/// `target/manifest.json`; nodes are kept untyped until filtered to models
#[derive(Debug, Clone, Deserialize)]
pub struct RawManifest {
    pub metadata: ManifestMetadata,
    #[serde(default)]
    pub nodes: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestColumn {
    pub name: String,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meta: ColumnMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestModelNode {
    pub unique_id: String,
    pub name: String,
    #[serde(default)]
    pub database: Option<String>,
    pub schema: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: IndexMap<String, ManifestColumn>,
    #[serde(default)]
    pub meta: ModelMeta,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogNode {
    #[serde(default)]
    pub columns: HashMap<String, CatalogColumn>,
}

/// `target/catalog.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub nodes: HashMap<String, CatalogNode>,
}

impl CatalogNode {
    /// Column type by name, ignoring case (Snowflake reports uppercase names)
    pub fn column_type(&self, column_name: &str) -> Option<&str> {
        self.columns
            .get(column_name)
            .or_else(|| {
                self.columns
                    .values()
                    .find(|c| c.name.eq_ignore_ascii_case(column_name))
            })
            .map(|c| c.data_type.as_str())
    }
}
