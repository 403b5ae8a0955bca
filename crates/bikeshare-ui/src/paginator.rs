//! Forward-only paging through the raw rows of a filtered table.

use std::io::{BufRead, Write};

use bikeshare_core::error::Result;
use bikeshare_core::models::FilteredTable;
use tracing::debug;

use crate::console::Console;
use crate::table_view::render_rows;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

pub const MORE_ROWS_PROMPT: &str = "\nDo you want to see the next 5 rows of data? (yes/no): ";
pub const NO_MORE_DATA: &str = "No more data to display.";

/// Show `table` five rows at a time while the user keeps answering "yes".
///
/// Stops without another prompt once the cursor reaches the end of the
/// table. An empty table prints the end-of-data notice straight away.
/// Returns the number of rows displayed.
pub fn paginate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &FilteredTable,
) -> Result<usize> {
    let mut cursor = 0usize;

    while cursor < table.len() {
        if !console.confirm(MORE_ROWS_PROMPT)? {
            debug!("Paging stopped by user at row {}", cursor);
            return Ok(cursor);
        }
        let page = table.window(cursor, PAGE_SIZE);
        write!(console.output(), "{}", render_rows(page, table.schema))?;
        cursor += PAGE_SIZE;
    }

    console.say(NO_MORE_DATA)?;
    Ok(cursor.min(table.len()))
}
