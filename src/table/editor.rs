//! Row insertion and range deletion

use super::{RowLike, TableLike};
use crate::error::ViewkitResult;

/// Delete rows `from..=to`, highest index first
///
/// Deleting top-down keeps the indices of the rows still to be deleted
/// stable. `to` defaults to the last row at call time; an empty range is a
/// no-op. The first invalid index aborts with the table's error.
pub fn delete_rows<T: TableLike>(table: &mut T, from: usize, to: Option<usize>) -> ViewkitResult<()> {
    let to = match to.or_else(|| table.row_count().checked_sub(1)) {
        Some(to) => to,
        None => return Ok(()),
    };

    for index in (from..=to).rev() {
        table.delete_row(index)?;
    }

    log::debug!("Deleted rows {}..={}", from, to);
    Ok(())
}

/// Append a row with one cell per value and return it
pub fn add_row<T, I>(table: &mut T, values: I) -> &mut T::Row
where
    T: TableLike,
    I: IntoIterator,
    I::Item: ToString,
{
    let row = table.insert_row();
    for value in values {
        row.insert_cell(value.to_string());
    }
    row
}
