//! Error types for extraction backends and workbook output.
//!
//! Backend failures never abort a run on their own: the orchestrator downgrades
//! them to "no tables from this backend" unless the backend was forced.

use thiserror::Error;

use crate::backend::Backend;

/// Failure of a single extraction backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The document could not be opened or parsed.
    #[error("failed to open PDF: {0}")]
    Open(String),

    /// A page could not be interpreted.
    #[error("failed to read page {page}: {message}")]
    Page {
        /// 1-based page number.
        page: usize,
        /// Engine error text.
        message: String,
    },

    /// The detection engine panicked.
    #[error("engine panicked: {0}")]
    Panicked(String),

    /// The backend was compiled out of this build.
    #[error("{0} support is not compiled into this build")]
    Unavailable(Backend),
}

/// Failure writing the output workbook.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Nothing to write.
    #[error("no tables to save")]
    Empty,

    /// A table does not fit on a worksheet.
    #[error("table {index} exceeds worksheet limits ({rows} rows x {cols} columns)")]
    OutOfBounds {
        /// 1-based table index.
        index: usize,
        /// Row count of the offending table.
        rows: usize,
        /// Column count of the offending table.
        cols: usize,
    },

    /// Error from the xlsx writer, including I/O failures on save.
    #[error(transparent)]
    Xlsx(Box<dyn std::error::Error + Send + Sync>),

    /// xlsx output was compiled out of this build.
    #[error("xlsx support is not compiled into this build")]
    Unavailable,
}

#[cfg(feature = "xlsx")]
impl From<rust_xlsxwriter::XlsxError> for WriteError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        WriteError::Xlsx(Box::new(err))
    }
}
