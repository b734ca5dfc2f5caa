//! Tabular data model and sanitization.
//!
//! A [`Table`] is a rectangular grid of optional text cells. Backends build
//! tables from whatever their detector returns; [`Table::sanitized`] then drops
//! rows and columns that carry no content.

/// A single extracted table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// 1-based page number the table was found on, when known.
    pub page: Option<usize>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Build a table from raw rows.
    ///
    /// Ragged input is padded with empty cells so that every row has as many
    /// cells as the widest row.
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { page: None, rows }
    }

    /// Attach the page number the table came from.
    pub fn on_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Rows of the table, top to bottom.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Text of the cell at (`row`, `col`), or `None` when empty or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
            .filter(|text| !is_blank(text))
    }

    /// Whether the table has no rows left.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop rows whose cells are all empty, then columns whose remaining cells
    /// are all empty.
    ///
    /// Applying this twice gives the same table as applying it once.
    pub fn sanitized(self) -> Self {
        let Table { page, rows } = self;

        let rows: Vec<Vec<Option<String>>> = rows
            .into_iter()
            .filter(|row| row.iter().any(has_content))
            .collect();

        let width = rows.first().map_or(0, Vec::len);
        let keep: Vec<bool> = (0..width)
            .map(|col| rows.iter().any(|row| has_content(&row[col])))
            .collect();

        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&keep)
                    .filter_map(|(cell, &kept)| kept.then_some(cell))
                    .collect()
            })
            .collect();

        Table { page, rows }
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn has_content(cell: &Option<String>) -> bool {
    cell.as_deref().is_some_and(|text| !is_blank(text))
}
