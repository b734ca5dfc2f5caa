//! Backend selection and fallback.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::backend::Backend;
use crate::error::BackendError;
use crate::table::Table;

/// Which backends to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Try every backend in [`Backend::ALL`] order until one yields a table.
    #[default]
    Auto,
    /// Run only this backend; its failure ends the run with no tables.
    Only(Backend),
}

impl Method {
    /// Backends this method may invoke, in order.
    pub fn backends(self) -> &'static [Backend] {
        match self {
            Method::Auto => &Backend::ALL,
            Method::Only(Backend::Tabula) => &[Backend::Tabula],
            Method::Only(Backend::Camelot) => &[Backend::Camelot],
            Method::Only(Backend::Pdfplumber) => &[Backend::Pdfplumber],
        }
    }
}

/// Immutable settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Source PDF.
    pub pdf_path: PathBuf,
    /// Destination workbook.
    pub output_path: PathBuf,
    /// Backend selection.
    pub method: Method,
}

/// Extract tables from `path` using the real backends.
pub fn extract_tables(path: &Path, method: Method) -> Vec<Table> {
    extract_with(path, method, |backend, path| backend.extract(path))
}

/// Extract tables, delegating each backend call to `run`.
///
/// Backends are tried in [`Method::backends`] order and the loop stops as soon
/// as any table has been collected. A failing backend counts as zero tables;
/// under [`Method::Only`] a failure returns an empty result immediately.
pub fn extract_with<F>(path: &Path, method: Method, mut run: F) -> Vec<Table>
where
    F: FnMut(Backend, &Path) -> Result<Vec<Table>, BackendError>,
{
    let mut tables = Vec::new();

    for &backend in method.backends() {
        info!("trying extraction with {backend}");

        match run(backend, path) {
            Ok(found) => tables.extend(found),
            Err(e) => {
                warn!("{backend} error: {e}");
                if let Method::Only(_) = method {
                    return Vec::new();
                }
            }
        }

        if !tables.is_empty() {
            break;
        }
    }

    tables
}
