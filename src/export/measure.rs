//! Measure derivation from column-level measure declarations

use super::dimension::{column_description, dimension_name, table_column_sql};
use super::{ExportError, ExportResult};
use crate::lookml::Block;
use crate::models::{DbtColumn, DbtModel, LookerMeasure, LookerMeasureType, MeasureFilter};
use indexmap::IndexMap;
use tracing::warn;

/// Measure generated from one declaration on one column
#[derive(Debug, Clone, PartialEq)]
pub struct LookmlMeasure {
    pub name: String,
    pub measure_type: LookerMeasureType,
    pub sql: String,
    pub description: String,
    /// `None` when the declaration has no filter clauses
    pub filters: Option<Vec<MeasureFilter>>,
}

impl LookmlMeasure {
    pub fn to_block(&self) -> Block {
        Block::named(&self.name)
            .literal("type", self.measure_type.as_str())
            .sql("sql", &self.sql)
            .quoted("description", &self.description)
            .filters_opt("filters", self.filters.clone())
    }
}

/// Resolve a declaration's filter clauses against the model's columns
///
/// All referenced columns are looked up first so the first missing one
/// aborts; only then are the clauses re-keyed by each column's dimension
/// name, so the filters address the dimensions generated for the view.
/// Two keys of one clause landing on the same dimension name keep the later
/// expression and log a warning.
pub fn lookml_measure_filters(
    measure: &LookerMeasure,
    model: &DbtModel,
) -> ExportResult<Vec<MeasureFilter>> {
    let mut columns: IndexMap<&str, &DbtColumn> = IndexMap::new();
    for column_name in measure.filters.iter().flat_map(|clause| clause.keys()) {
        let column = model
            .column(column_name)
            .ok_or_else(|| ExportError::MissingFilterColumn {
                model: model.unique_id.clone(),
                column: column_name.clone(),
            })?;
        columns.insert(column_name.as_str(), column);
    }

    let mut resolved = Vec::with_capacity(measure.filters.len());
    for clause in &measure.filters {
        let mut filter = MeasureFilter::new();
        for (column_name, expr) in clause {
            let field = dimension_name(columns[column_name.as_str()]).to_string();
            if let Some(replaced) = filter.insert(field.clone(), expr.clone()) {
                warn!(
                    "Model {} measure filter on {} collides with dimension {}, \
                     keeping \"{}\" and dropping \"{}\"",
                    model.unique_id, column_name, field, expr, replaced
                );
            }
        }
        resolved.push(filter);
    }
    Ok(resolved)
}

fn measure_description(measure: &LookerMeasure, column: &DbtColumn) -> String {
    if let Some(description) = &measure.description {
        return description.clone();
    }
    let subject = column_description(column).unwrap_or(&column.name);
    format!("{} of {}", measure.measure_type.capitalized(), subject)
}

fn lookml_measure(
    measure: &LookerMeasure,
    column: &DbtColumn,
    model: &DbtModel,
) -> ExportResult<LookmlMeasure> {
    let filters = if measure.filters.is_empty() {
        None
    } else {
        Some(lookml_measure_filters(measure, model)?)
    };
    Ok(LookmlMeasure {
        name: measure
            .name
            .clone()
            .unwrap_or_else(|| format!("{} of {}", measure.measure_type, column.name)),
        measure_type: measure.measure_type,
        sql: table_column_sql(column),
        description: measure_description(measure, column),
        filters,
    })
}

/// Measures in column order, then declaration order within each column
pub fn lookml_measures(model: &DbtModel) -> ExportResult<Vec<LookmlMeasure>> {
    model
        .columns
        .values()
        .flat_map(|column| {
            column
                .measures()
                .iter()
                .map(move |measure| lookml_measure(measure, column, model))
        })
        .collect()
}
