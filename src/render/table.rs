//! Flat tabulation of structured results
//!
//! Tables show top-level fields only. Nested values are never silently
//! truncated: they render as compact JSON in their cell and a note after the
//! table points them out. Shapes with no sensible tabulation (scalars, mixed
//! arrays) fall back to a structured encoding so no data is lost.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::Value;

use crate::error::CliResult;

/// Render a value as a table
pub fn render(value: &Value) -> CliResult<String> {
    match value {
        Value::Array(rows) if !rows.is_empty() && rows.iter().all(Value::is_object) => {
            Ok(render_rows(rows))
        }
        Value::Object(map) => Ok(render_object(map)),
        other => {
            // No flat representation; structured fallback keeps the data intact.
            Ok(serde_json::to_string_pretty(other)?)
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// One column per top-level field, in first-appearance order
fn render_rows(rows: &[Value]) -> String {
    let mut columns: Vec<&str> = Vec::new();
    for row in rows {
        if let Value::Object(map) = row {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key);
                }
            }
        }
    }

    let mut nested: Vec<&str> = Vec::new();
    let mut table = new_table();
    table.set_header(columns.iter().map(|c| Cell::new(c)).collect::<Vec<_>>());
    for row in rows {
        let cells: Vec<Cell> = columns
            .iter()
            .map(|column| {
                let cell = row.get(*column).unwrap_or(&Value::Null);
                let (text, is_nested) = cell_text(cell);
                if is_nested && !nested.contains(column) {
                    nested.push(column);
                }
                Cell::new(text)
            })
            .collect();
        table.add_row(cells);
    }

    with_notes(table.to_string(), &nested)
}

/// Key/value rows for a single object
fn render_object(map: &serde_json::Map<String, Value>) -> String {
    let mut nested: Vec<&str> = Vec::new();
    let mut table = new_table();
    table.set_header(vec![Cell::new("FIELD"), Cell::new("VALUE")]);
    for (key, value) in map {
        let (text, is_nested) = cell_text(value);
        if is_nested {
            nested.push(key);
        }
        table.add_row(vec![Cell::new(key), Cell::new(text)]);
    }

    with_notes(table.to_string(), &nested)
}

/// Cell text plus whether the value had to fall back to JSON
fn cell_text(value: &Value) -> (String, bool) {
    match value {
        Value::Null => (String::new(), false),
        Value::String(s) => (s.clone(), false),
        Value::Bool(b) => (b.to_string(), false),
        Value::Number(n) => (n.to_string(), false),
        nested => (
            serde_json::to_string(nested).unwrap_or_else(|_| "<unrepresentable>".to_string()),
            true,
        ),
    }
}

fn with_notes(mut out: String, nested: &[&str]) -> String {
    for field in nested {
        out.push_str(&format!(
            "\nNote: field '{}' is not table-representable; shown as JSON.",
            field
        ));
    }
    out
}
