use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a roster report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Invalid roster report {}", file_path.display()))?;

    if report.version != REPORT_SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            REPORT_SCHEMA_VERSION
        );
    }

    if report.records.len() != report.record_count {
        anyhow::bail!(
            "Report lists {} records but record_count is {}",
            report.records.len(),
            report.record_count
        );
    }

    println!("✓ Valid roster report");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source_file);
    println!("  Generated: {}", report.generated_at);
    println!("  {}", report.summary());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Cohort Roster v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Query houses, cohorts and housemates in pipe-delimited roster files.");
}
