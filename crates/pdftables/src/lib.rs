//! pdftables: extract tables from PDF documents into an xlsx workbook.
//!
//! # Architecture
//!
//! - [`backend`]: three table-detection backends built on the pdfplumber engine
//! - [`extract`]: fixed-order fallback across backends
//! - [`table`]: the table model and empty row/column sanitizing
//! - [`workbook`]: one worksheet per table, auto-sized columns
//! - [`probe`]: which capabilities this build carries
//!
//! ```no_run
//! use std::path::Path;
//! use pdftables::{Method, extract_tables, write_workbook};
//!
//! let tables = extract_tables(Path::new("report.pdf"), Method::Auto);
//! write_workbook(&tables, Path::new("report_tables.xlsx")).unwrap();
//! ```

pub mod backend;
pub mod error;
pub mod extract;
pub mod probe;
pub mod table;
pub mod workbook;

pub use backend::Backend;
pub use error::{BackendError, WriteError};
pub use extract::{Method, RunConfig, extract_tables, extract_with};
pub use probe::{Capability, CapabilityReport, probe};
pub use table::Table;
pub use workbook::{column_widths, sheet_name, write_workbook};
