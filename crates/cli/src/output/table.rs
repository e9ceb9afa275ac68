//! Table formatting utilities

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, *};

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new table with default styling
    pub fn new() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Create a table with headers and rows
    pub fn simple(headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
        Self::with_numeric_columns(headers, rows, &[])
    }

    /// Create a table whose listed columns hold numbers and are right-aligned
    pub fn with_numeric_columns(headers: Vec<&str>, rows: Vec<Vec<String>>, numeric: &[usize]) -> String {
        let mut table = Self::new();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        for &index in numeric {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }

        table.to_string()
    }

    /// Create a key-value table
    pub fn key_value(items: Vec<(&str, String)>) -> String {
        let mut table = Self::new();

        for (key, value) in items {
            table.add_row(vec![key, &value]);
        }

        table.to_string()
    }
}
