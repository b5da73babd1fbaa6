//! Warehouse type mapping
//!
//! Translates a column's raw warehouse type into the [`LookerType`] that
//! decides how the column is rendered. Each adapter has its own static
//! table (see `tables.rs`); adding an adapter means adding one table and one
//! match arm in [`type_table`].
//!
//! Unknown types are not an error: the column is left out of the view and a
//! warning names the type, so a warehouse adding a new type degrades the
//! output instead of failing it.

mod tables;

use crate::models::{DbtAdapter, LookerType};
use std::collections::HashMap;
use tracing::warn;

/// Static type table for an adapter
pub fn type_table(adapter: DbtAdapter) -> &'static HashMap<&'static str, LookerType> {
    match adapter {
        DbtAdapter::Bigquery => &*tables::BIGQUERY,
        DbtAdapter::Snowflake => &*tables::SNOWFLAKE,
        DbtAdapter::Redshift => &*tables::REDSHIFT,
        DbtAdapter::Postgres => &*tables::POSTGRES,
    }
}

/// Map a raw column type to its LookML field kind
///
/// Returns `None` when the column has no type (silently) or when the
/// adapter's table has no entry for it (with one warning per call).
/// Matching is exact: `"integer"` does not match `"INTEGER"`.
///
/// # Example
///
/// ```rust
/// use dbt_lookml::models::{DbtAdapter, LookerType};
/// use dbt_lookml::typemap::map_adapter_type;
///
/// assert_eq!(
///     map_adapter_type(DbtAdapter::Bigquery, Some("INT64")),
///     Some(LookerType::Number)
/// );
/// assert_eq!(map_adapter_type(DbtAdapter::Bigquery, None), None);
/// ```
pub fn map_adapter_type(adapter: DbtAdapter, column_type: Option<&str>) -> Option<LookerType> {
    let column_type = column_type?;
    let looker_type = type_table(adapter).get(column_type).copied();
    if looker_type.is_none() {
        warn!(
            "Column type {} not supported for conversion from {} to looker. No dimension will be created.",
            column_type, adapter
        );
    }
    looker_type
}
