//! xlsx output, one worksheet per table.

use std::path::Path;

use crate::error::WriteError;
use crate::table::Table;

/// Longest worksheet name the xlsx format accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Upper bound for auto-fitted column widths, in characters.
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Worksheet name for the table at 1-based `index`.
pub fn sheet_name(index: usize) -> String {
    format!("Table_{index}")
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}

/// Display width of each column: longest cell text plus 2, capped at
/// [`MAX_COLUMN_WIDTH`].
pub fn column_widths(table: &Table) -> Vec<usize> {
    (0..table.column_count())
        .map(|col| {
            let longest = (0..table.row_count())
                .filter_map(|row| table.cell(row, col))
                .map(|text| text.chars().count())
                .max()
                .unwrap_or(0);
            (longest + 2).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// Write `tables` to a new workbook at `path`, replacing any existing file.
///
/// Every table is sanitized again before writing and lands on its own sheet
/// starting at A1, without a header row.
#[cfg(feature = "xlsx")]
pub fn write_workbook(tables: &[Table], path: &Path) -> Result<(), WriteError> {
    use rust_xlsxwriter::Workbook;

    if tables.is_empty() {
        return Err(WriteError::Empty);
    }

    let mut workbook = Workbook::new();

    for (i, table) in tables.iter().enumerate() {
        let index = i + 1;
        let table = table.clone().sanitized();
        let out_of_bounds = || WriteError::OutOfBounds {
            index,
            rows: table.row_count(),
            cols: table.column_count(),
        };

        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name(index))?;

        for row in 0..table.row_count() {
            let xl_row = u32::try_from(row).map_err(|_| out_of_bounds())?;
            for col in 0..table.column_count() {
                if let Some(text) = table.cell(row, col) {
                    let xl_col = u16::try_from(col).map_err(|_| out_of_bounds())?;
                    sheet.write_string(xl_row, xl_col, text)?;
                }
            }
        }

        for (col, width) in column_widths(&table).into_iter().enumerate() {
            let xl_col = u16::try_from(col).map_err(|_| out_of_bounds())?;
            sheet.set_column_width(xl_col, width as f64)?;
        }
    }

    workbook.save(path)?;
    tracing::debug!("wrote {} worksheets to {}", tables.len(), path.display());
    Ok(())
}

/// Write `tables` to a new workbook at `path`.
///
/// Always fails: xlsx output is compiled out of this build.
#[cfg(not(feature = "xlsx"))]
pub fn write_workbook(_tables: &[Table], _path: &Path) -> Result<(), WriteError> {
    Err(WriteError::Unavailable)
}
