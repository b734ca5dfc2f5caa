use std::path::{Component, Path, PathBuf};

use pdftables::RunConfig;

use crate::cli::Cli;

/// Suffix appended to the input stem for the default output file.
const DEFAULT_OUTPUT_SUFFIX: &str = "_tables.xlsx";

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~` component, or with no resolvable home
/// directory, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// `<dir>/<stem>_tables.xlsx` next to the input PDF.
pub fn default_output_path(pdf: &Path) -> PathBuf {
    let stem = pdf.file_stem().unwrap_or_default().to_string_lossy();
    pdf.with_file_name(format!("{stem}{DEFAULT_OUTPUT_SUFFIX}"))
}

/// Build the run configuration from parsed arguments.
///
/// Returns `Err(1)` with a message printed to stderr if the PDF is missing.
pub fn resolve_config(cli: &Cli) -> Result<RunConfig, i32> {
    let pdf_path = expand_home(&cli.pdf);
    if !pdf_path.exists() {
        eprintln!("Error: file not found: {}", pdf_path.display());
        return Err(1);
    }

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&pdf_path));

    Ok(RunConfig {
        pdf_path,
        output_path,
        method: cli.method.into(),
    })
}
