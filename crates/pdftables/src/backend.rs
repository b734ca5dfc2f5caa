//! Extraction backends.
//!
//! Each backend wraps one configuration of the pdfplumber detection engine and
//! normalizes what it finds into [`Table`]s. Backends are stateless: every call
//! opens the document, walks its pages in order and drops it again.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, info};

use crate::error::BackendError;
use crate::table::Table;

/// One of the fixed set of extraction backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Ruled-line detection with a whitespace-alignment fallback per page.
    Tabula,
    /// Detection from visible ruling lines only.
    Camelot,
    /// Default table finder, page by page.
    Pdfplumber,
}

impl Backend {
    /// Fallback order used by `auto` extraction.
    pub const ALL: [Backend; 3] = [Backend::Tabula, Backend::Camelot, Backend::Pdfplumber];

    /// Lowercase identifier, used for `--method` values and cargo features.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Tabula => "tabula",
            Backend::Camelot => "camelot",
            Backend::Pdfplumber => "pdfplumber",
        }
    }

    /// Minimum rows a raw table needs before it is considered at all.
    fn raw_min_rows(self) -> usize {
        match self {
            Backend::Tabula => 1,
            Backend::Camelot => 0,
            Backend::Pdfplumber => 2,
        }
    }

    /// Minimum rows a sanitized table needs to be kept.
    ///
    /// Tabula keeps single-row tables, the other two require more than one row.
    pub fn min_rows(self) -> usize {
        match self {
            Backend::Tabula => 1,
            Backend::Camelot | Backend::Pdfplumber => 2,
        }
    }

    /// Run this backend against `path`.
    ///
    /// Engine panics are caught and reported as [`BackendError::Panicked`].
    pub fn extract(self, path: &Path) -> Result<Vec<Table>, BackendError> {
        let adapter: fn(&Path) -> Result<Vec<Table>, BackendError> = match self {
            Backend::Tabula => tabula,
            Backend::Camelot => camelot,
            Backend::Pdfplumber => pdfplumber_default,
        };

        panic::catch_unwind(AssertUnwindSafe(|| adapter(path)))
            .unwrap_or_else(|payload| Err(BackendError::Panicked(panic_message(payload.as_ref()))))
    }

    /// Sanitize raw tables and keep those meeting this backend's row thresholds.
    pub fn keep(self, raw: Vec<Table>) -> Vec<Table> {
        let mut kept = Vec::new();

        for (i, table) in raw.into_iter().enumerate() {
            if table.row_count() < self.raw_min_rows() {
                debug!("{self}: skipping raw table {} with {} rows", i + 1, table.row_count());
                continue;
            }

            let table = table.sanitized();
            if table.row_count() < self.min_rows() {
                debug!("{self}: discarding table {} after sanitizing", i + 1);
                continue;
            }

            match table.page {
                Some(page) if self == Backend::Pdfplumber => info!(
                    "{self} found table on page {page}: {}x{}",
                    table.column_count(),
                    table.row_count()
                ),
                _ => info!(
                    "{self} found table {}: {}x{}",
                    i + 1,
                    table.column_count(),
                    table.row_count()
                ),
            }
            kept.push(table);
        }

        kept
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backend::Tabula => "Tabula",
            Backend::Camelot => "Camelot",
            Backend::Pdfplumber => "PDFPlumber",
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(feature = "tabula")]
fn tabula(path: &Path) -> Result<Vec<Table>, BackendError> {
    use pdfplumber::Strategy;

    let raw = engine::scan_pages(path, |number, page| {
        let lattice = engine::find(page, number, Strategy::Lattice);
        if lattice.is_empty() {
            engine::find(page, number, Strategy::Stream)
        } else {
            lattice
        }
    })?;
    Ok(Backend::Tabula.keep(raw))
}

#[cfg(not(feature = "tabula"))]
fn tabula(_path: &Path) -> Result<Vec<Table>, BackendError> {
    Err(BackendError::Unavailable(Backend::Tabula))
}

#[cfg(feature = "camelot")]
fn camelot(path: &Path) -> Result<Vec<Table>, BackendError> {
    use pdfplumber::Strategy;

    let raw = engine::scan_pages(path, |number, page| {
        engine::find(page, number, Strategy::LatticeStrict)
    })?;
    Ok(Backend::Camelot.keep(raw))
}

#[cfg(not(feature = "camelot"))]
fn camelot(_path: &Path) -> Result<Vec<Table>, BackendError> {
    Err(BackendError::Unavailable(Backend::Camelot))
}

#[cfg(feature = "pdfplumber")]
fn pdfplumber_default(path: &Path) -> Result<Vec<Table>, BackendError> {
    let raw = engine::scan_pages(path, |number, page| {
        engine::find_with(page, number, &pdfplumber::TableSettings::default())
    })?;
    Ok(Backend::Pdfplumber.keep(raw))
}

#[cfg(not(feature = "pdfplumber"))]
fn pdfplumber_default(_path: &Path) -> Result<Vec<Table>, BackendError> {
    Err(BackendError::Unavailable(Backend::Pdfplumber))
}

#[cfg(any(feature = "tabula", feature = "camelot", feature = "pdfplumber"))]
mod engine {
    use std::path::Path;

    use pdfplumber::{Cell, Page, Pdf, Strategy, TableSettings};

    use crate::error::BackendError;
    use crate::table::Table;

    /// Open `path` and collect tables from every page, in page order.
    pub(super) fn scan_pages<F>(path: &Path, mut visit: F) -> Result<Vec<Table>, BackendError>
    where
        F: FnMut(usize, &Page) -> Vec<Table>,
    {
        let pdf = Pdf::open_file(path, None).map_err(|e| BackendError::Open(e.to_string()))?;

        let mut tables = Vec::new();
        for idx in 0..pdf.page_count() {
            let page = pdf.page(idx).map_err(|e| BackendError::Page {
                page: idx + 1,
                message: e.to_string(),
            })?;
            tables.extend(visit(idx + 1, &page));
        }
        Ok(tables)
    }

    pub(super) fn find(page: &Page, number: usize, strategy: Strategy) -> Vec<Table> {
        let settings = TableSettings {
            strategy,
            ..TableSettings::default()
        };
        find_with(page, number, &settings)
    }

    pub(super) fn find_with(page: &Page, number: usize, settings: &TableSettings) -> Vec<Table> {
        page.find_tables(settings)
            .iter()
            .map(|found| text_grid(&found.rows).on_page(number))
            .collect()
    }

    fn text_grid(rows: &[Vec<Cell>]) -> Table {
        Table::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
                .collect(),
        )
    }
}
