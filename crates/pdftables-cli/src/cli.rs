use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pdftables::{Backend, Method};

/// Extract tables from a PDF into an Excel workbook, one sheet per table.
#[derive(Debug, Parser)]
#[command(name = "pdftables", about, version)]
pub struct Cli {
    /// Path to the PDF file
    #[arg(value_name = "PDF")]
    pub pdf: PathBuf,

    /// Output Excel file (default: <pdf>_tables.xlsx)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Extraction method
    #[arg(short, long, value_enum, default_value_t = MethodArg::Auto)]
    pub method: MethodArg,
}

/// Backend selection as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Try tabula, then camelot, then pdfplumber
    Auto,
    /// Ruled lines, falling back to text alignment per page
    Tabula,
    /// Visible ruling lines only
    Camelot,
    /// Default table finder
    Pdfplumber,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Auto => Method::Auto,
            MethodArg::Tabula => Method::Only(Backend::Tabula),
            MethodArg::Camelot => Method::Only(Backend::Camelot),
            MethodArg::Pdfplumber => Method::Only(Backend::Pdfplumber),
        }
    }
}
