//! Output formatters

use anyhow::Result;
use serde::Serialize;

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a value as pretty JSON
    pub fn format<T: Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Plain text formatter: one tab-separated line per row, for scripts
pub struct PlainFormatter;

impl PlainFormatter {
    /// Join cells with tabs and rows with newlines.
    ///
    /// Tabs and newlines inside cells are replaced by spaces so every row
    /// stays one line.
    pub fn lines(rows: &[Vec<String>]) -> String {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.replace(['\t', '\n', '\r'], " "))
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
