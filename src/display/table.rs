//! Table display formatting
//!
//! Formats a [`Table`] for terminal output using tabled.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::settings::TableStyle;
use crate::table::Table;

/// Render a table with the given border style
pub fn render_table(table: &Table, style: TableStyle) -> String {
    if table.is_empty() {
        return "No rows.".to_string();
    }

    let mut builder = Builder::default();
    for row in table.rows() {
        builder.push_record(row.cells.iter().map(|c| c.text.clone()));
    }

    let mut rendered = builder.build();
    match style {
        TableStyle::Modern => rendered.with(Style::modern()),
        TableStyle::Ascii => rendered.with(Style::ascii()),
        TableStyle::Markdown => rendered.with(Style::markdown()),
    };

    rendered.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_cells() {
        let table = Table::from_rows([vec!["name", "qty"], vec!["apples", "3"]]);
        let output = render_table(&table, TableStyle::Ascii);

        assert!(output.contains("name"));
        assert!(output.contains("apples"));
        assert!(output.contains('+'));
    }

    #[test]
    fn test_render_markdown() {
        let table = Table::from_rows([vec!["a", "b"]]);
        let output = render_table(&table, TableStyle::Markdown);
        assert!(output.starts_with("| a"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&Table::new(), TableStyle::Modern), "No rows.");
    }
}
