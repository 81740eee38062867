//! Export command implementation.
//!
//! The export command:
//! 1. Parses the roster file
//! 2. Builds the JSON report
//! 3. Writes the report to disk

use super::models::ExportArgs;
use crate::output::{build_report, write_report, RosterReport};
use crate::parser::parse_roster_file;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written
///
/// # Errors
/// * Roster file missing or unreadable
/// * Report file write errors
pub fn execute_export(args: &ExportArgs) -> Result<RosterReport> {
    let start_time = Instant::now();

    validate_export_args(args)?;

    info!("Exporting roster: {}", args.data_file.display());

    info!("Step 1/3: Parsing roster file...");
    let records = parse_roster_file(&args.data_file).context("Failed to parse roster file")?;
    debug!("Parsed {} records", records.len());

    info!("Step 2/3: Building report...");
    let report = build_report(&records, &args.data_file.display().to_string());
    debug!("{}", report.summary());

    info!("Step 3/3: Writing report...");
    write_report(&report, &args.output_json).context("Failed to write roster report")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("ROSTER SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Source:   {}", report.source_file);
        println!("{}", report.summary());
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Export completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate export arguments
///
/// **Public** - can be called before execute_export for early validation
pub fn validate_export_args(args: &ExportArgs) -> Result<()> {
    if args.data_file.as_os_str().is_empty() {
        anyhow::bail!("Data file path cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.output_json == args.data_file {
        anyhow::bail!("Output path would overwrite the roster file");
    }

    Ok(())
}
