//! Column model for dbt model columns and their LookML metadata

use super::enums::LookerMeasureType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One filter clause of a measure: referenced column name -> filter expression
pub type MeasureFilter = IndexMap<String, String>;

/// Measure declared on a column under `meta.looker.measures`
///
/// # Example
///
/// ```yaml
/// meta:
///   looker:
///     measures:
///       - type: sum
///         name: total_revenue
///         filters:
///           - status: "completed"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookerMeasure {
    /// Aggregation applied to the column
    #[serde(rename = "type")]
    pub measure_type: LookerMeasureType,
    /// Name override; generated as "<type> of <column>" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Filter clauses; every key must name a column of the owning model
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<MeasureFilter>,
}

impl LookerMeasure {
    pub fn new(measure_type: LookerMeasureType) -> Self {
        Self {
            measure_type,
            name: None,
            description: None,
            filters: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append one filter clause
    pub fn with_filter<I, K, V>(mut self, clause: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.filters.push(
            clause
                .into_iter()
                .map(|(column, expr)| (column.into(), expr.into()))
                .collect(),
        );
        self
    }
}

/// Custom dimension settings under `meta.looker.dimension`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LookerDimension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `meta.looker` block of a column
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LookerColumnMeta {
    #[serde(default)]
    pub dimension: LookerDimension,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measures: Vec<LookerMeasure>,
}

/// `meta` block of a column; keys other than `looker` are ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColumnMeta {
    #[serde(default)]
    pub looker: LookerColumnMeta,
}

/// Column of a dbt model
///
/// # Example
///
/// ```rust
/// use dbt_lookml::models::DbtColumn;
///
/// let column = DbtColumn::new("created_at")
///     .with_data_type("TIMESTAMP")
///     .with_description("When the order was placed");
/// assert_eq!(column.data_type.as_deref(), Some("TIMESTAMP"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbtColumn {
    /// Column name as declared in the warehouse
    pub name: String,
    /// Raw warehouse type; absent for columns the catalog does not know
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Column documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub meta: ColumnMeta,
}

impl DbtColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
            description: None,
            meta: ColumnMeta::default(),
        }
    }

    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the custom dimension name
    pub fn with_dimension_name(mut self, name: impl Into<String>) -> Self {
        self.meta.looker.dimension.name = Some(name.into());
        self
    }

    pub fn with_measure(mut self, measure: LookerMeasure) -> Self {
        self.meta.looker.measures.push(measure);
        self
    }

    /// Measures declared on this column
    pub fn measures(&self) -> &[LookerMeasure] {
        &self.meta.looker.measures
    }
}
