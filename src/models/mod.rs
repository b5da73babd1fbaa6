//! Models module
//!
//! Defines the dbt-side input structures consumed by the LookML exporter.
//! These are read-only snapshots built by the manifest loader (or by hand in
//! tests); nothing in the exporter mutates them.

pub mod column;
pub mod enums;
pub mod join;
pub mod model;

pub use column::{
    ColumnMeta, DbtColumn, LookerColumnMeta, LookerDimension, LookerMeasure, MeasureFilter,
};
pub use enums::*;
pub use join::LookerJoin;
pub use model::{DbtModel, LookerModelMeta, ModelMeta};
