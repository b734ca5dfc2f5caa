use pdftables::{CapabilityReport, RunConfig, Table, extract_tables, write_workbook};

/// Print one status line per capability and halt if any are missing.
///
/// Returns `Err(1)` after printing installation hints when the build lacks a
/// capability.
pub fn check_capabilities(report: &CapabilityReport) -> Result<(), i32> {
    for capability in &report.capabilities {
        if capability.available {
            println!("✓ {} available", capability.package);
        }
    }

    if report.is_complete() {
        return Ok(());
    }

    let missing: Vec<&str> = report.missing().iter().map(|c| c.package).collect();
    let features = report.missing_features();

    eprintln!();
    eprintln!("Missing packages: {}", missing.join(", "));
    eprintln!();
    eprintln!("To install, run one of these commands:");
    eprintln!(
        "1. cargo install pdftables-cli --features \"{}\"",
        features.join(" ")
    );
    if let Some(first) = features.first() {
        eprintln!("2. Or install individually: cargo install pdftables-cli --features {first}");
    }
    Err(1)
}

/// Extract, save and summarize.
///
/// Returns `Err(1)` when no tables are found. A failed save is reported but
/// does not change the exit status.
pub fn run(config: &RunConfig) -> Result<(), i32> {
    println!();
    println!("Processing PDF: {}", config.pdf_path.display());

    let tables = extract_tables(&config.pdf_path, config.method);

    if tables.is_empty() {
        eprintln!("No tables found in the PDF!");
        eprintln!("Try another method: --method=camelot or --method=pdfplumber");
        return Err(1);
    }

    println!();
    println!("Found {} tables total", tables.len());

    match write_workbook(&tables, &config.output_path) {
        Ok(()) => println!(
            "Successfully saved {} tables to: {}",
            tables.len(),
            config.output_path.display()
        ),
        Err(e) => eprintln!("Error saving Excel file: {e}"),
    }

    println!();
    println!("Extraction Summary:");
    for line in summary_lines(&tables) {
        println!("{line}");
    }

    Ok(())
}

fn summary_lines(tables: &[Table]) -> Vec<String> {
    tables
        .iter()
        .enumerate()
        .map(|(i, table)| {
            format!(
                "  Table {}: {} columns × {} rows",
                i + 1,
                table.column_count(),
                table.row_count()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdftables::Capability;

    fn capability(package: &'static str, feature: Option<&'static str>, available: bool) -> Capability {
        Capability {
            package,
            feature,
            available,
        }
    }

    #[test]
    fn complete_report_passes() {
        let report = CapabilityReport {
            capabilities: vec![
                capability("table engine", None, true),
                capability("xlsx writer", Some("xlsx"), true),
            ],
        };
        assert!(check_capabilities(&report).is_ok());
    }

    #[test]
    fn missing_capability_exits_with_one() {
        let report = CapabilityReport {
            capabilities: vec![
                capability("table engine", None, true),
                capability("tabula backend", Some("tabula"), false),
            ],
        };
        assert_eq!(check_capabilities(&report).unwrap_err(), 1);
    }

    #[test]
    fn summary_reports_columns_then_rows() {
        let table = Table::from_rows(vec![
            vec![Some("a".into()), Some("b".into()), Some("c".into())],
            vec![Some("d".into()), None, None],
        ]);
        assert_eq!(
            summary_lines(&[table]),
            vec!["  Table 1: 3 columns × 2 rows".to_string()]
        );
    }
}
