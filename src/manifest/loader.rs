//! dbt project loading
//!
//! Reads `dbt_project.yml`, `manifest.json` and `catalog.json` and builds the
//! [`DbtModel`]s the exporter consumes. Column types come from the catalog
//! (what the warehouse actually reports), falling back to the type declared
//! in the manifest.

use super::artifacts::{CatalogNode, DbtProjectFile, ManifestModelNode, RawCatalog, RawManifest};
use super::error::{ManifestError, ManifestResult};
use crate::models::{DbtAdapter, DbtColumn, DbtModel};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

static TYPE_PARAMETERS: Lazy<Regex> = Lazy::new(|| {
    // "(38,0)", "(256)" and "<STRING>" style suffixes
    Regex::new(r"\s*(\([^)]*\)|<.*>)\s*").expect("valid type parameter regex")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalize a catalog type to the canonical spelling used by the type tables
///
/// `"character varying(256)"` becomes `"CHARACTER VARYING"`, `"NUMBER(38,0)"`
/// becomes `"NUMBER"` and `"ARRAY<STRING>"` becomes `"ARRAY"`.
pub fn normalize_catalog_type(data_type: &str) -> String {
    let stripped = TYPE_PARAMETERS.replace_all(data_type, " ");
    WHITESPACE
        .replace_all(stripped.trim(), " ")
        .to_uppercase()
}

/// A loaded dbt project
#[derive(Debug, Clone)]
pub struct DbtProject {
    /// Project name from `dbt_project.yml`, used as the LookML connection
    pub name: String,
    pub adapter: DbtAdapter,
    pub models: Vec<DbtModel>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn build_model(node: ManifestModelNode, catalog_node: Option<&CatalogNode>) -> DbtModel {
    if catalog_node.is_none() {
        warn!(
            "Model {} not found in catalog, using manifest column types",
            node.unique_id
        );
    }
    let columns = node
        .columns
        .into_iter()
        .map(|(key, column)| {
            let data_type = catalog_node
                .and_then(|c| c.column_type(&column.name))
                .map(normalize_catalog_type)
                .or(column.data_type);
            let model_column = DbtColumn {
                name: column.name,
                data_type,
                description: non_empty(column.description),
                meta: column.meta,
            };
            (key, model_column)
        })
        .collect();

    DbtModel {
        unique_id: node.unique_id,
        name: node.name,
        database: node.database.unwrap_or_default(),
        schema: node.schema,
        description: non_empty(node.description),
        columns,
        meta: node.meta,
        tags: node.tags,
    }
}

/// Parse manifest and catalog contents into models
///
/// Only `resource_type: model` nodes are returned; when `tag` is set only
/// models carrying it.
pub fn parse_models(
    manifest: &str,
    catalog: Option<&str>,
    tag: Option<&str>,
) -> ManifestResult<(DbtAdapter, Vec<DbtModel>)> {
    let manifest: RawManifest = serde_json::from_str(manifest)?;
    let catalog: RawCatalog = match catalog {
        Some(content) => serde_json::from_str(content)?,
        None => RawCatalog::default(),
    };

    let adapter: DbtAdapter = manifest
        .metadata
        .adapter_type
        .parse()
        .map_err(|_| ManifestError::UnsupportedAdapter(manifest.metadata.adapter_type.clone()))?;

    let mut models = Vec::new();
    for (unique_id, node) in manifest.nodes {
        let is_model = node
            .get("resource_type")
            .and_then(|v| v.as_str())
            .is_some_and(|t| t == "model");
        if !is_model {
            continue;
        }
        let node: ManifestModelNode =
            serde_json::from_value(node).map_err(|source| ManifestError::InvalidNode {
                unique_id: unique_id.clone(),
                source,
            })?;
        if let Some(tag) = tag {
            if !node.tags.iter().any(|t| t == tag) {
                debug!("Skipping model {} without tag {}", unique_id, tag);
                continue;
            }
        }
        models.push(build_model(node, catalog.nodes.get(&unique_id)));
    }

    Ok((adapter, models))
}

/// Loads a dbt project from its directory
///
/// # Example
///
/// ```rust,no_run
/// use dbt_lookml::manifest::ManifestLoader;
///
/// let project = ManifestLoader::new("./my_dbt_project")
///     .with_tag("looker")
///     .load()?;
/// println!("{} models for {}", project.models.len(), project.adapter);
/// # Ok::<(), dbt_lookml::manifest::ManifestError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    project_dir: PathBuf,
    target_dir: Option<PathBuf>,
    tag: Option<String>,
}

impl ManifestLoader {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            target_dir: None,
            tag: None,
        }
    }

    /// Override the directory holding manifest.json and catalog.json
    pub fn with_target_dir(mut self, target_dir: impl Into<PathBuf>) -> Self {
        self.target_dir = Some(target_dir.into());
        self
    }

    /// Only load models carrying this tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    fn read(path: &Path) -> ManifestResult<String> {
        std::fs::read_to_string(path).map_err(|source| ManifestError::ReadError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse `dbt_project.yml`
    pub fn load_project_file(&self) -> ManifestResult<DbtProjectFile> {
        let content = Self::read(&self.project_dir.join("dbt_project.yml"))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    fn resolve_target_dir(&self, project_file: &DbtProjectFile) -> PathBuf {
        match &self.target_dir {
            Some(dir) => dir.clone(),
            None => self
                .project_dir
                .join(project_file.target_path.as_deref().unwrap_or("target")),
        }
    }

    /// Load the project name, adapter and models
    pub fn load(&self) -> ManifestResult<DbtProject> {
        let project_file = self.load_project_file()?;
        let target_dir = self.resolve_target_dir(&project_file);

        let manifest = Self::read(&target_dir.join("manifest.json"))?;
        let catalog_path = target_dir.join("catalog.json");
        let catalog = if catalog_path.exists() {
            Some(Self::read(&catalog_path)?)
        } else {
            warn!(
                "No catalog found at {}, run `dbt docs generate` for warehouse column types",
                catalog_path.display()
            );
            None
        };

        let (adapter, models) = parse_models(&manifest, catalog.as_deref(), self.tag.as_deref())?;
        info!(
            "Loaded {} models from dbt project {} ({} adapter)",
            models.len(),
            project_file.name,
            adapter
        );

        Ok(DbtProject {
            name: project_file.name,
            adapter,
            models,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "metadata": {"adapter_type": "snowflake"},
        "nodes": {
            "model.shop.orders": {
                "resource_type": "model",
                "unique_id": "model.shop.orders",
                "name": "orders",
                "database": "ANALYTICS",
                "schema": "PUBLIC",
                "description": "",
                "columns": {
                    "id": {"name": "id", "description": "Order id", "meta": {}},
                    "note": {"name": "note", "data_type": "TEXT", "description": ""}
                },
                "meta": {"looker": {"joins": {"customers": {"left_on": "customer_id", "right_on": "id"}}}},
                "tags": ["looker"]
            },
            "model.shop.staging": {
                "resource_type": "model",
                "unique_id": "model.shop.staging",
                "name": "staging",
                "database": "ANALYTICS",
                "schema": "PUBLIC",
                "columns": {},
                "tags": []
            },
            "test.shop.not_null_orders_id": {
                "resource_type": "test",
                "unique_id": "test.shop.not_null_orders_id"
            }
        }
    }"#;

    const CATALOG: &str = r#"{
        "nodes": {
            "model.shop.orders": {
                "columns": {
                    "ID": {"name": "ID", "type": "NUMBER(38,0)", "index": 1}
                }
            }
        }
    }"#;

    #[test]
    fn test_normalize_catalog_type() {
        assert_eq!(normalize_catalog_type("NUMBER(38,0)"), "NUMBER");
        assert_eq!(
            normalize_catalog_type("character varying(256)"),
            "CHARACTER VARYING"
        );
        assert_eq!(
            normalize_catalog_type("timestamp without time zone"),
            "TIMESTAMP WITHOUT TIME ZONE"
        );
        assert_eq!(normalize_catalog_type("ARRAY<STRING>"), "ARRAY");
        assert_eq!(normalize_catalog_type(" INT64 "), "INT64");
    }

    #[test]
    fn test_parse_models() {
        let (adapter, models) = parse_models(MANIFEST, Some(CATALOG), None).unwrap();
        assert_eq!(adapter, DbtAdapter::Snowflake);
        assert_eq!(models.len(), 2);

        let orders = &models[0];
        assert_eq!(orders.name, "orders");
        assert!(orders.description.is_none());
        assert_eq!(orders.column("id").unwrap().data_type.as_deref(), Some("NUMBER"));
        assert_eq!(
            orders.column("id").unwrap().description.as_deref(),
            Some("Order id")
        );
        // not in the catalog: manifest type kept, empty description dropped
        assert_eq!(orders.column("note").unwrap().data_type.as_deref(), Some("TEXT"));
        assert!(orders.column("note").unwrap().description.is_none());
        assert_eq!(orders.joins()["customers"].left_on, "customer_id");
    }

    #[test]
    fn test_tag_filter() {
        let (_, models) = parse_models(MANIFEST, Some(CATALOG), Some("looker")).unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].unique_id, "model.shop.orders");
    }

    #[test]
    fn test_missing_catalog() {
        let (_, models) = parse_models(MANIFEST, None, None).unwrap();
        assert!(models[0].column("id").unwrap().data_type.is_none());
    }

    #[test]
    fn test_unsupported_adapter() {
        let manifest = r#"{"metadata": {"adapter_type": "databricks"}, "nodes": {}}"#;
        assert!(matches!(
            parse_models(manifest, None, None),
            Err(ManifestError::UnsupportedAdapter(a)) if a == "databricks"
        ));
    }

    #[test]
    fn test_invalid_model_node() {
        let manifest = r#"{
            "metadata": {"adapter_type": "postgres"},
            "nodes": {"model.p.broken": {"resource_type": "model", "name": "broken"}}
        }"#;
        assert!(matches!(
            parse_models(manifest, None, None),
            Err(ManifestError::InvalidNode { unique_id, .. }) if unique_id == "model.p.broken"
        ));
    }
}
