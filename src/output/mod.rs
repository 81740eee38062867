//! Output for query results and roster reports.
//!
//! This module handles:
//! - JSON reports (write and read back)
//! - Plain-text rendering for the terminal

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{read_report, to_json_string, write_report};
pub use report::{build_report, RosterReport};
pub use text::{format_cohort, format_names, format_rosters, format_rows};
