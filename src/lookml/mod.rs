//! LookML configuration tree and text writer
//!
//! The exporter builds a [`Block`] tree and hands it to [`dump`]; the tree
//! only carries the attributes that are set, so optional LookML parameters
//! are left out of the text instead of being written empty.
//!
//! # Example
//!
//! ```rust
//! use dbt_lookml::lookml::{Block, dump};
//!
//! let view = Block::named("orders")
//!     .sql("sql_table_name", "analytics.public.orders")
//!     .block(
//!         "dimension",
//!         Block::named("id").literal("type", "number").sql("sql", "${TABLE}.id"),
//!     );
//! let text = dump(&Block::document().block("view", view));
//! assert!(text.starts_with("view: orders {\n"));
//! ```

mod writer;

pub use writer::dump;

use crate::models::MeasureFilter;

/// Value of one LookML attribute
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Bare scalar: `type: number`
    Literal(String),
    /// Quoted string: `description: "Order id"`
    Quoted(String),
    /// SQL expression terminated by `;;`: `sql: ${TABLE}.id ;;`
    Sql(String),
    /// Bare list: `timeframes: [raw, date]`
    List(Vec<String>),
    /// Measure filter list: `filters: [status: "complete"]`
    Filters(Vec<MeasureFilter>),
    /// Nested block: `dimension: id { ... }`
    Block(Block),
}

/// A (possibly named) LookML block with attributes in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub name: Option<String>,
    pub fields: Vec<(String, Value)>,
}

impl Block {
    /// Unnamed top-level block holding a whole file
    pub fn document() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.push((key.into(), value));
        self
    }

    pub fn literal(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(key, Value::Literal(value.into()))
    }

    pub fn quoted(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(key, Value::Quoted(value.into()))
    }

    /// Quoted attribute, left out entirely when `value` is `None`
    pub fn quoted_opt(self, key: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.quoted(key, value),
            None => self,
        }
    }

    pub fn sql(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(key, Value::Sql(value.into()))
    }

    pub fn list<I, S>(self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field(key, Value::List(items.into_iter().map(Into::into).collect()))
    }

    /// Filter list, left out entirely when `filters` is `None`
    pub fn filters_opt(self, key: impl Into<String>, filters: Option<Vec<MeasureFilter>>) -> Self {
        match filters {
            Some(filters) => self.field(key, Value::Filters(filters)),
            None => self,
        }
    }

    pub fn block(self, key: impl Into<String>, block: Block) -> Self {
        self.field(key, Value::Block(block))
    }

    /// Append one block per item under the same key
    pub fn blocks<I>(mut self, key: &str, blocks: I) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        for block in blocks {
            self = self.block(key, block);
        }
        self
    }

    /// First attribute stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
