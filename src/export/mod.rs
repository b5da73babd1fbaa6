//! LookML export
//!
//! Turns each dbt model into two LookML files:
//! - `<model>.view` - dimension groups, dimensions and measures
//! - `<model>.model` - the explore and its joins
//!
//! Both are pure functions of the model; unsupported column types are logged
//! and skipped, while a measure filter naming a missing column is an error.

pub mod dimension;
pub mod explore;
pub mod measure;
pub mod view;

use crate::models::{DbtAdapter, DbtModel};
use tracing::info;

/// A generated LookML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookmlFile {
    /// File name, e.g. `orders.view`
    pub filename: String,
    /// LookML text
    pub contents: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(
        "Model {model} contains a measure that references a non_existent column: {column}. \
         Ensure that dbt model {model} contains a column: {column}"
    )]
    MissingFilterColumn { model: String, column: String },
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

pub use dimension::{
    ColumnClassification, LookmlDimension, LookmlDimensionGroup, dimension_name,
    lookml_dimension_groups, lookml_dimensions,
};
pub use explore::{generate_explore, lookml_explore, lookml_join_on_sql};
pub use measure::{LookmlMeasure, lookml_measure_filters, lookml_measures};
pub use view::{generate_view, lookml_view};

/// Exporter for a whole dbt project
///
/// # Example
///
/// ```rust
/// use dbt_lookml::export::LookMLExporter;
/// use dbt_lookml::models::{DbtAdapter, DbtColumn, DbtModel};
///
/// let models = vec![
///     DbtModel::new("model.shop.orders", "orders", "analytics", "public")
///         .with_column(DbtColumn::new("id").with_data_type("INTEGER")),
/// ];
///
/// let exporter = LookMLExporter::new(DbtAdapter::Postgres, "shop");
/// let files = exporter.export(&models).unwrap();
/// assert_eq!(files.len(), 2);
/// assert_eq!(files[0].filename, "orders.view");
/// assert_eq!(files[1].filename, "orders.model");
/// ```
#[derive(Debug, Clone)]
pub struct LookMLExporter {
    pub adapter: DbtAdapter,
    pub project_name: String,
}

impl LookMLExporter {
    pub fn new(adapter: DbtAdapter, project_name: impl Into<String>) -> Self {
        Self {
            adapter,
            project_name: project_name.into(),
        }
    }

    /// Export the view and model file of one dbt model
    pub fn export_model(&self, model: &DbtModel) -> ExportResult<(LookmlFile, LookmlFile)> {
        let view = generate_view(model, self.adapter)?;
        let explore = generate_explore(model, &self.project_name);
        Ok((view, explore))
    }

    /// Export every model, view file first then model file, stopping at the first error
    pub fn export(&self, models: &[DbtModel]) -> ExportResult<Vec<LookmlFile>> {
        let mut files = Vec::with_capacity(models.len() * 2);
        for model in models {
            let (view, explore) = self.export_model(model)?;
            files.push(view);
            files.push(explore);
        }
        info!(
            "Generated {} LookML files for {} models ({} adapter)",
            files.len(),
            models.len(),
            self.adapter
        );
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DbtColumn, LookerMeasure, LookerMeasureType};

    #[test]
    fn test_error_display() {
        let err = ExportError::MissingFilterColumn {
            model: "model.shop.orders".to_string(),
            column: "ghost".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("model.shop.orders"));
        assert!(message.contains("ghost"));
    }

    #[test]
    fn test_export_stops_at_first_error() {
        let good = DbtModel::new("model.p.good", "good", "db", "sch");
        let bad = DbtModel::new("model.p.bad", "bad", "db", "sch").with_column(
            DbtColumn::new("id").with_measure(
                LookerMeasure::new(LookerMeasureType::Sum).with_filter([("nope", "1")]),
            ),
        );
        let exporter = LookMLExporter::new(DbtAdapter::Bigquery, "proj");
        assert!(exporter.export(&[good.clone()]).is_ok());
        let err = exporter.export(&[good, bad]).unwrap_err();
        assert!(err.to_string().contains("model.p.bad"));
    }
}
