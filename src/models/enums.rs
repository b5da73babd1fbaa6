//! Enumerations shared by the dbt input models and the LookML output

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// dbt adapter (warehouse SQL dialect) a project was compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbtAdapter {
    /// Google BigQuery
    Bigquery,
    /// Snowflake
    Snowflake,
    /// Amazon Redshift
    Redshift,
    /// PostgreSQL
    Postgres,
}

impl DbtAdapter {
    /// All supported adapters
    pub const ALL: [DbtAdapter; 4] = [
        DbtAdapter::Bigquery,
        DbtAdapter::Snowflake,
        DbtAdapter::Redshift,
        DbtAdapter::Postgres,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DbtAdapter::Bigquery => "bigquery",
            DbtAdapter::Snowflake => "snowflake",
            DbtAdapter::Redshift => "redshift",
            DbtAdapter::Postgres => "postgres",
        }
    }
}

impl fmt::Display for DbtAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbtAdapter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bigquery" => Ok(DbtAdapter::Bigquery),
            "snowflake" => Ok(DbtAdapter::Snowflake),
            "redshift" => Ok(DbtAdapter::Redshift),
            "postgres" | "postgresql" => Ok(DbtAdapter::Postgres),
            _ => Err(format!("Unsupported dbt adapter: {}", s)),
        }
    }
}

/// Semantic field kind a warehouse column type is normalized to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookerType {
    Number,
    Yesno,
    String,
    Date,
    Datetime,
    Timestamp,
}

impl LookerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookerType::Number => "number",
            LookerType::Yesno => "yesno",
            LookerType::String => "string",
            LookerType::Date => "date",
            LookerType::Datetime => "datetime",
            LookerType::Timestamp => "timestamp",
        }
    }

    /// Rendered as a dimension group with time-of-day time frames
    pub fn is_date_time(&self) -> bool {
        matches!(self, LookerType::Datetime | LookerType::Timestamp)
    }

    /// Rendered as a dimension group with day-granularity time frames
    pub fn is_date(&self) -> bool {
        matches!(self, LookerType::Date)
    }

    /// Rendered as a plain dimension
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            LookerType::Number | LookerType::Yesno | LookerType::String
        )
    }
}

impl fmt::Display for LookerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregation a measure declaration applies to its column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookerMeasureType {
    Average,
    AverageDistinct,
    Count,
    CountDistinct,
    List,
    Max,
    Median,
    MedianDistinct,
    Min,
    Percentile,
    PercentileDistinct,
    Sum,
    SumDistinct,
}

impl LookerMeasureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookerMeasureType::Average => "average",
            LookerMeasureType::AverageDistinct => "average_distinct",
            LookerMeasureType::Count => "count",
            LookerMeasureType::CountDistinct => "count_distinct",
            LookerMeasureType::List => "list",
            LookerMeasureType::Max => "max",
            LookerMeasureType::Median => "median",
            LookerMeasureType::MedianDistinct => "median_distinct",
            LookerMeasureType::Min => "min",
            LookerMeasureType::Percentile => "percentile",
            LookerMeasureType::PercentileDistinct => "percentile_distinct",
            LookerMeasureType::Sum => "sum",
            LookerMeasureType::SumDistinct => "sum_distinct",
        }
    }

    /// First character uppercased, the rest lowercased ("count_distinct" -> "Count_distinct")
    pub fn capitalized(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for LookerMeasureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SQL join type of an explore join
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookerJoinType {
    #[default]
    LeftOuter,
    FullOuter,
    Inner,
    Cross,
}

impl LookerJoinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookerJoinType::LeftOuter => "left_outer",
            LookerJoinType::FullOuter => "full_outer",
            LookerJoinType::Inner => "inner",
            LookerJoinType::Cross => "cross",
        }
    }
}

impl fmt::Display for LookerJoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cardinality between the joined views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookerJoinRelationship {
    #[default]
    ManyToOne,
    ManyToMany,
    OneToMany,
    OneToOne,
}

impl LookerJoinRelationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookerJoinRelationship::ManyToOne => "many_to_one",
            LookerJoinRelationship::ManyToMany => "many_to_many",
            LookerJoinRelationship::OneToMany => "one_to_many",
            LookerJoinRelationship::OneToOne => "one_to_one",
        }
    }
}

impl fmt::Display for LookerJoinRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
