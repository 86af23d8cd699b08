//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// One query method row.
pub struct MethodRow {
    /// Method name.
    pub name: String,
    /// Declared parameter kinds, comma-separated.
    pub params: String,
    /// Number of placeholder occurrences in the template.
    pub placeholders: usize,
}

/// Format query methods as an ASCII table.
pub fn format_methods_table(methods: &[MethodRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Method", "Parameters", "Placeholders"]);

    for method in methods {
        table.add_row(vec![
            method.name.clone(),
            method.params.clone(),
            method.placeholders.to_string(),
        ]);
    }

    table
}
