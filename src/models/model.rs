//! dbt model, the unit of translation

use super::column::DbtColumn;
use super::join::LookerJoin;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// `meta.looker` block of a model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LookerModelMeta {
    /// Target model name -> join; a repeated target overwrites the earlier entry
    #[serde(default)]
    pub joins: IndexMap<String, LookerJoin>,
}

/// `meta` block of a model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelMeta {
    #[serde(default)]
    pub looker: LookerModelMeta,
}

/// A dbt model with its columns in declaration order
///
/// # Example
///
/// ```rust
/// use dbt_lookml::models::{DbtColumn, DbtModel};
///
/// let model = DbtModel::new("model.shop.orders", "orders", "analytics", "public")
///     .with_column(DbtColumn::new("id").with_data_type("INTEGER"));
/// assert!(model.column("id").is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbtModel {
    /// dbt node id, e.g. `model.shop.orders`
    pub unique_id: String,
    pub name: String,
    pub database: String,
    pub schema: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: IndexMap<String, DbtColumn>,
    #[serde(default)]
    pub meta: ModelMeta,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DbtModel {
    pub fn new(
        unique_id: impl Into<String>,
        name: impl Into<String>,
        database: impl Into<String>,
        schema: impl Into<String>,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            name: name.into(),
            database: database.into(),
            schema: schema.into(),
            description: None,
            columns: IndexMap::new(),
            meta: ModelMeta::default(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a column keyed by its name, keeping declaration order
    pub fn with_column(mut self, column: DbtColumn) -> Self {
        self.columns.insert(column.name.clone(), column);
        self
    }

    /// Declare a join to `target`; replaces an earlier join to the same target
    pub fn with_join(mut self, target: impl Into<String>, join: LookerJoin) -> Self {
        self.meta.looker.joins.insert(target.into(), join);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Look up a column by its exact name
    pub fn column(&self, name: &str) -> Option<&DbtColumn> {
        self.columns.get(name)
    }

    pub fn joins(&self) -> &IndexMap<String, LookerJoin> {
        &self.meta.looker.joins
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Fully qualified `<database>.<schema>.<name>` table reference
    pub fn relation_name(&self) -> String {
        format!("{}.{}.{}", self.database, self.schema, self.name)
    }
}
