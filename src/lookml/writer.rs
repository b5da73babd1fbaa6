//! LookML text writer
//!
//! Renders a [`Block`] tree with two-space indentation. Sibling attributes
//! are written one per line; a blank line separates a nested block from the
//! attribute or block before it.

use super::{Block, Value};
use crate::models::MeasureFilter;

const INDENT: &str = "  ";

/// Serialize a document block to LookML text
pub fn dump(document: &Block) -> String {
    let mut out = String::new();
    write_fields(&mut out, &document.fields, 0);
    out
}

fn write_fields(out: &mut String, fields: &[(String, Value)], depth: usize) {
    let mut previous: Option<&Value> = None;
    for (key, value) in fields {
        if let Some(prev) = previous {
            if matches!(value, Value::Block(_)) || matches!(prev, Value::Block(_)) {
                out.push('\n');
            }
        }
        write_field(out, key, value, depth);
        previous = Some(value);
    }
}

fn write_field(out: &mut String, key: &str, value: &Value, depth: usize) {
    let indent = INDENT.repeat(depth);
    match value {
        Value::Literal(v) => out.push_str(&format!("{}{}: {}\n", indent, key, v)),
        Value::Quoted(v) => out.push_str(&format!("{}{}: {}\n", indent, key, quote(v))),
        Value::Sql(v) => out.push_str(&format!("{}{}: {} ;;\n", indent, key, v)),
        Value::List(items) => {
            out.push_str(&format!("{}{}: [{}]\n", indent, key, items.join(", ")))
        }
        Value::Filters(filters) => out.push_str(&format!(
            "{}{}: [{}]\n",
            indent,
            key,
            filter_pairs(filters).join(", ")
        )),
        Value::Block(block) => {
            match &block.name {
                Some(name) => out.push_str(&format!("{}{}: {} {{\n", indent, key, name)),
                None => out.push_str(&format!("{}{}: {{\n", indent, key)),
            }
            write_fields(out, &block.fields, depth + 1);
            out.push_str(&format!("{}}}\n", indent));
        }
    }
}

fn filter_pairs(filters: &[MeasureFilter]) -> Vec<String> {
    filters
        .iter()
        .flat_map(|clause| clause.iter())
        .map(|(field, expr)| format!("{}: {}", field, quote(expr)))
        .collect()
}

/// Wrap in double quotes, escaping backslashes and quotes
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
