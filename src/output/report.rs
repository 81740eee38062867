//! JSON report schema.
//!
//! This module defines the structure of report files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::parser::Record;
use crate::query::lookup::find_duped_last_names;
use crate::query::views::{all_cohorts, all_data, all_houses, all_names_by_house};
use crate::query::{DataRow, HouseRosters};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Roster file the report was built from
    pub source_file: String,

    /// Timestamp when report was generated
    pub generated_at: String,

    pub record_count: usize,

    pub houses: BTreeSet<String>,

    /// Distinct cohort labels
    pub cohorts: BTreeSet<String>,

    pub rosters: HouseRosters,

    pub duplicate_last_names: BTreeSet<String>,

    /// Every record, in file order
    pub records: Vec<DataRow>,
}

/// Build a report from parsed records
///
/// **Public** - used by the export command
pub fn build_report(records: &[Record], source_file: &str) -> RosterReport {
    use chrono::Utc;

    RosterReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source_file: source_file.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        record_count: records.len(),
        houses: all_houses(records),
        cohorts: all_cohorts(records),
        rosters: all_names_by_house(records),
        duplicate_last_names: find_duped_last_names(records),
        records: all_data(records),
    }
}

impl RosterReport {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the validate command
    pub fn summary(&self) -> String {
        format!(
            "Records: {} | Houses: {} | Cohorts: {} | Rostered: {} | Duplicate surnames: {}",
            self.record_count,
            self.houses.len(),
            self.cohorts.len(),
            self.rosters.total_names(),
            self.duplicate_last_names.len()
        )
    }
}
