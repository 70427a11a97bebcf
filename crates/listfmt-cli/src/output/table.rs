//! Table formatting utilities for CLI output.

use std::ops::Range;

use comfy_table::{presets, ContentArrangement, Table};
use listfmt::TextUnit;
use serde::Serialize;

/// Where one item ended up in the formatted text.
pub struct ItemRange {
    pub index: usize,
    pub item: String,
    pub range: Range<usize>,
}

/// A locale data problem found by `check`.
#[derive(Debug, Serialize)]
pub struct Problem {
    /// Locale identifier.
    pub locale: String,
    /// Pattern key, or `None` when the locale file itself failed to load.
    pub key: Option<String>,
    pub message: String,
}

/// Format item ranges as an ASCII table.
pub fn format_ranges_table(unit: TextUnit, ranges: &[ItemRange]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#".to_string(), "Item".to_string(), format!("Range ({unit})")]);

    for row in ranges {
        table.add_row(vec![
            row.index.to_string(),
            row.item.clone(),
            format!("{}..{}", row.range.start, row.range.end),
        ]);
    }

    table
}

/// Format check problems as an ASCII table.
pub fn format_problems_table(problems: &[Problem]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Key", "Problem"]);

    for problem in problems {
        table.add_row(vec![
            problem.locale.clone(),
            problem.key.clone().unwrap_or_else(|| "-".to_string()),
            problem.message.clone(),
        ]);
    }

    table
}
