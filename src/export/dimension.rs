//! Dimension and dimension group derivation
//!
//! Every column of a model is classified exactly once through the type
//! mapper, then lands in one of four buckets: date-time groups, date groups,
//! scalar dimensions, or unsupported (dropped).

use crate::lookml::Block;
use crate::models::{DbtAdapter, DbtColumn, DbtModel, LookerType};
use crate::typemap::map_adapter_type;

/// Time frames of a dimension group over a datetime or timestamp column
pub const DATE_TIME_TIMEFRAMES: [&str; 8] = [
    "raw", "time", "hour", "date", "week", "month", "quarter", "year",
];

/// Time frames of a dimension group over a date column
pub const DATE_TIMEFRAMES: [&str; 6] = ["raw", "date", "week", "month", "quarter", "year"];

/// Display name of the dimension generated for a column
///
/// The custom `meta.looker.dimension.name` when set, the column name otherwise.
pub fn dimension_name(column: &DbtColumn) -> &str {
    column
        .meta
        .looker
        .dimension
        .name
        .as_deref()
        .unwrap_or(&column.name)
}

/// Column description, or `None` when absent or blank
pub fn column_description(column: &DbtColumn) -> Option<&str> {
    column
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
}

/// `${TABLE}.<column>` reference used by every generated field
pub fn table_column_sql(column: &DbtColumn) -> String {
    format!("${{TABLE}}.{}", column.name)
}

/// Columns of one model bucketed by their mapped LookML type
#[derive(Debug)]
pub struct ColumnClassification<'a> {
    pub date_times: Vec<(&'a DbtColumn, LookerType)>,
    pub dates: Vec<(&'a DbtColumn, LookerType)>,
    pub scalars: Vec<(&'a DbtColumn, LookerType)>,
    pub unsupported: Vec<&'a DbtColumn>,
}

impl<'a> ColumnClassification<'a> {
    /// Classify every column in declaration order
    pub fn of(model: &'a DbtModel, adapter: DbtAdapter) -> Self {
        let mut classification = Self {
            date_times: Vec::new(),
            dates: Vec::new(),
            scalars: Vec::new(),
            unsupported: Vec::new(),
        };
        for column in model.columns.values() {
            match map_adapter_type(adapter, column.data_type.as_deref()) {
                Some(t) if t.is_date_time() => classification.date_times.push((column, t)),
                Some(t) if t.is_date() => classification.dates.push((column, t)),
                Some(t) => classification.scalars.push((column, t)),
                None => classification.unsupported.push(column),
            }
        }
        classification
    }
}

/// Dimension generated from a number, yesno or string column
#[derive(Debug, Clone, PartialEq)]
pub struct LookmlDimension {
    pub name: String,
    pub looker_type: LookerType,
    pub sql: String,
    pub description: Option<String>,
}

impl LookmlDimension {
    pub fn to_block(&self) -> Block {
        Block::named(&self.name)
            .literal("type", self.looker_type.as_str())
            .sql("sql", &self.sql)
            .quoted_opt("description", self.description.as_deref())
    }
}

/// Time dimension group generated from a date, datetime or timestamp column
#[derive(Debug, Clone, PartialEq)]
pub struct LookmlDimensionGroup {
    pub name: String,
    pub sql: String,
    pub description: Option<String>,
    /// Underlying storage type, passed through from the type mapper
    pub datatype: LookerType,
    pub timeframes: Vec<&'static str>,
}

impl LookmlDimensionGroup {
    pub fn to_block(&self) -> Block {
        Block::named(&self.name)
            .literal("type", "time")
            .sql("sql", &self.sql)
            .quoted_opt("description", self.description.as_deref())
            .literal("datatype", self.datatype.as_str())
            .list("timeframes", self.timeframes.iter().copied())
    }
}

fn dimension_group(
    column: &DbtColumn,
    datatype: LookerType,
    timeframes: &[&'static str],
) -> LookmlDimensionGroup {
    LookmlDimensionGroup {
        name: column.name.clone(),
        sql: table_column_sql(column),
        description: column_description(column).map(str::to_string),
        datatype,
        timeframes: timeframes.to_vec(),
    }
}

/// Dimension groups: all date-time groups first, then all date groups
pub fn lookml_dimension_groups(classification: &ColumnClassification<'_>) -> Vec<LookmlDimensionGroup> {
    let date_times = classification
        .date_times
        .iter()
        .map(|(column, t)| dimension_group(column, *t, &DATE_TIME_TIMEFRAMES));
    let dates = classification
        .dates
        .iter()
        .map(|(column, t)| dimension_group(column, *t, &DATE_TIMEFRAMES));
    date_times.chain(dates).collect()
}

/// Scalar dimensions in column order
pub fn lookml_dimensions(classification: &ColumnClassification<'_>) -> Vec<LookmlDimension> {
    classification
        .scalars
        .iter()
        .map(|(column, t)| LookmlDimension {
            name: dimension_name(column).to_string(),
            looker_type: *t,
            sql: table_column_sql(column),
            description: column_description(column).map(str::to_string),
        })
        .collect()
}
