//! Tabular display structures
//!
//! [`TableLike`] and [`RowLike`] describe what the row editor needs from a
//! table; [`Table`] is the in-memory implementation used by the CLI.

pub mod editor;

use std::io::Read;

use crate::error::{ViewkitError, ViewkitResult};

pub use editor::{add_row, delete_rows};

/// A row that can grow cells
pub trait RowLike {
    /// Append a cell holding `text`
    fn insert_cell(&mut self, text: String);
}

/// A table with indexed row deletion and row insertion
pub trait TableLike {
    type Row: RowLike;

    fn row_count(&self) -> usize;

    /// Delete the row at `index`, failing if it does not exist
    fn delete_row(&mut self, index: usize) -> ViewkitResult<()>;

    /// Append an empty row and return it
    fn insert_row(&mut self) -> &mut Self::Row;
}

/// A single table cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
}

/// An ordered sequence of cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    /// Cell texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl RowLike for Row {
    fn insert_cell(&mut self, text: String) {
        self.cells.push(Cell { text });
    }
}

/// An ordered sequence of rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows of cell texts
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|cells| Row {
                cells: cells
                    .into_iter()
                    .map(|text| Cell { text: text.into() })
                    .collect(),
            })
            .collect();
        Self { rows }
    }

    /// Load every CSV record as a row; a header line is kept as the first row
    pub fn from_csv_reader<R: Read>(reader: R) -> ViewkitResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut table = Self::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result
                .map_err(|e| ViewkitError::Csv(format!("Record {}: {}", idx + 1, e)))?;
            add_row(&mut table, record.iter());
        }
        Ok(table)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableLike for Table {
    type Row = Row;

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn delete_row(&mut self, index: usize) -> ViewkitResult<()> {
        if index >= self.rows.len() {
            return Err(ViewkitError::row_out_of_range(index, self.rows.len()));
        }
        self.rows.remove(index);
        Ok(())
    }

    fn insert_row(&mut self) -> &mut Row {
        self.rows.push(Row::default());
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }
}
