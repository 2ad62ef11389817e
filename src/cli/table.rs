//! Table CLI command
//!
//! Loads a CSV file, applies row edits in memory and prints the result.
//! The file itself is never written.

use std::fs::File;
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::display::render_table;
use crate::error::{ViewkitError, ViewkitResult};
use crate::table::{add_row, delete_rows, Table};

/// Arguments for `viewkit table`
#[derive(Args, Debug)]
pub struct TableArgs {
    /// CSV file to load (every line, including a header, is a row)
    pub file: PathBuf,
    /// Delete rows starting at this index (0-based)
    #[arg(short, long)]
    pub delete: Option<usize>,
    /// Last row to delete, inclusive (defaults to the last row)
    #[arg(short, long, requires = "delete")]
    pub to: Option<usize>,
    /// Append a row with these cell values
    #[arg(short, long, num_args = 1..)]
    pub add: Vec<String>,
}

/// Apply the requested edits to a loaded table
pub fn apply_edits(table: &mut Table, args: &TableArgs) -> ViewkitResult<()> {
    if let Some(from) = args.delete {
        delete_rows(table, from, args.to)?;
    }
    if !args.add.is_empty() {
        add_row(table, &args.add);
    }
    Ok(())
}

/// Handle the table command, returning the rendered table
pub fn handle_table_command(settings: &Settings, args: TableArgs) -> ViewkitResult<String> {
    let file = File::open(&args.file).map_err(|e| {
        ViewkitError::Io(format!("Failed to open {}: {}", args.file.display(), e))
    })?;

    let mut table = Table::from_csv_reader(file)?;
    apply_edits(&mut table, &args)?;

    Ok(render_table(&table, settings.table.style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::TableStyle;
    use tempfile::TempDir;

    fn args(file: PathBuf) -> TableArgs {
        TableArgs {
            file,
            delete: None,
            to: None,
            add: Vec::new(),
        }
    }

    #[test]
    fn test_apply_edits() {
        let mut table = Table::from_rows([["h"], ["1"], ["2"], ["3"]]);
        let mut edits = args(PathBuf::new());
        edits.delete = Some(1);
        edits.to = Some(2);
        edits.add = vec!["x".into(), "y".into()];

        apply_edits(&mut table, &edits).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.row(1).unwrap().texts(), vec!["3"]);
        assert_eq!(table.row(2).unwrap().texts(), vec!["x", "y"]);
    }

    #[test]
    fn test_handle_table_command() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fruit.csv");
        std::fs::write(&path, "name,qty\napples,3\npears,5\n").unwrap();

        let mut settings = Settings::default();
        settings.table.style = TableStyle::Ascii;
        let mut cmd = args(path);
        cmd.delete = Some(1);
        cmd.to = Some(1);

        let output = handle_table_command(&settings, cmd).unwrap();
        assert!(output.contains("pears"));
        assert!(!output.contains("apples"));
    }

    #[test]
    fn test_missing_file() {
        let err = handle_table_command(&Settings::default(), args(PathBuf::from("/nonexistent.csv")))
            .unwrap_err();
        assert!(matches!(err, ViewkitError::Io(_)));
    }
}
