//! Per-adapter warehouse type tables
//!
//! Keys are the adapter's canonical (uppercase) type spelling. Types without
//! an entry have no LookML equivalent and produce no dimension.

use crate::models::LookerType::{self, Date, Datetime, Number, String, Timestamp, Yesno};
use once_cell::sync::Lazy;
use std::collections::HashMap;

type TypeTable = HashMap<&'static str, LookerType>;

pub(crate) static BIGQUERY: Lazy<TypeTable> = Lazy::new(|| {
    HashMap::from([
        ("INT64", Number),
        ("INTEGER", Number),
        ("FLOAT", Number),
        ("NUMERIC", Number),
        ("BOOLEAN", Yesno),
        ("STRING", String),
        ("TIMESTAMP", Timestamp),
        ("DATETIME", Datetime),
        ("DATE", Date),
        // time-of-day has no dimension group equivalent
        ("TIME", String),
        ("BOOL", Yesno),
        ("ARRAY", String),
        ("GEOGRAPHY", String),
    ])
});

// TIMESTAMP_LTZ and TIMESTAMP_TZ cannot back a dimension group.
pub(crate) static SNOWFLAKE: Lazy<TypeTable> = Lazy::new(|| {
    HashMap::from([
        ("NUMBER", Number),
        ("DECIMAL", Number),
        ("NUMERIC", Number),
        ("INT", Number),
        ("INTEGER", Number),
        ("BIGINT", Number),
        ("SMALLINT", Number),
        ("FLOAT", Number),
        ("FLOAT4", Number),
        ("FLOAT8", Number),
        ("DOUBLE", Number),
        ("DOUBLE PRECISION", Number),
        ("REAL", Number),
        ("VARCHAR", String),
        ("CHAR", String),
        ("CHARACTER", String),
        ("STRING", String),
        ("TEXT", String),
        ("BINARY", String),
        ("VARBINARY", String),
        ("BOOLEAN", Yesno),
        ("DATE", Date),
        ("DATETIME", Datetime),
        ("TIME", String),
        ("TIMESTAMP", Timestamp),
        ("TIMESTAMP_NTZ", Timestamp),
        ("VARIANT", String),
        ("OBJECT", String),
        ("ARRAY", String),
        ("GEOGRAPHY", String),
    ])
});

// Unsupported: TIMESTAMPTZ, TIMETZ and their long spellings, HLLSKETCH.
pub(crate) static REDSHIFT: Lazy<TypeTable> = Lazy::new(|| {
    HashMap::from([
        ("SMALLINT", Number),
        ("INT2", Number),
        ("INTEGER", Number),
        ("INT", Number),
        ("INT4", Number),
        ("BIGINT", Number),
        ("INT8", Number),
        ("DECIMAL", Number),
        ("NUMERIC", Number),
        ("REAL", Number),
        ("FLOAT4", Number),
        ("DOUBLE PRECISION", Number),
        ("FLOAT8", Number),
        ("FLOAT", Number),
        ("BOOLEAN", Yesno),
        ("BOOL", Yesno),
        ("CHAR", String),
        ("CHARACTER", String),
        ("NCHAR", String),
        ("BPCHAR", String),
        ("VARCHAR", String),
        ("CHARACTER VARYING", String),
        ("NVARCHAR", String),
        ("TEXT", String),
        ("DATE", Date),
        ("TIMESTAMP", Timestamp),
        ("TIMESTAMP WITHOUT TIME ZONE", Timestamp),
        ("GEOMETRY", String),
        ("TIME", String),
        ("TIME WITHOUT TIME ZONE", String),
    ])
});

// Unsupported: bit strings, geometric types, BYTEA, INTERVAL, text search
// types, TIMESTAMPTZ, TIMETZ and their long spellings.
pub(crate) static POSTGRES: Lazy<TypeTable> = Lazy::new(|| {
    HashMap::from([
        ("XML", String),
        ("UUID", String),
        ("PG_LSN", String),
        ("MACADDR", String),
        ("JSON", String),
        ("JSONB", String),
        ("CIDR", String),
        ("INET", String),
        ("MONEY", Number),
        ("SMALLINT", Number),
        ("INT2", Number),
        ("SMALLSERIAL", Number),
        ("SERIAL2", Number),
        ("INTEGER", Number),
        ("INT", Number),
        ("INT4", Number),
        ("SERIAL", Number),
        ("SERIAL4", Number),
        ("BIGINT", Number),
        ("INT8", Number),
        ("BIGSERIAL", Number),
        ("SERIAL8", Number),
        ("DECIMAL", Number),
        ("NUMERIC", Number),
        ("REAL", Number),
        ("FLOAT4", Number),
        ("DOUBLE PRECISION", Number),
        ("FLOAT8", Number),
        ("FLOAT", Number),
        ("BOOLEAN", Yesno),
        ("BOOL", Yesno),
        ("CHAR", String),
        ("CHARACTER", String),
        ("NCHAR", String),
        ("BPCHAR", String),
        ("VARCHAR", String),
        ("CHARACTER VARYING", String),
        ("NVARCHAR", String),
        ("TEXT", String),
        ("DATE", Date),
        ("TIMESTAMP", Timestamp),
        ("TIMESTAMP WITHOUT TIME ZONE", Timestamp),
        ("GEOMETRY", String),
        ("TIME", String),
        ("TIME WITHOUT TIME ZONE", String),
    ])
});
