//! Roster parsing and record definitions.
//!
//! This module handles:
//! - Splitting pipe-delimited roster lines into fields
//! - Skipping malformed lines
//! - Resolving the cohort/role column into an `Affiliation`

pub mod record;
pub mod roster;

// Re-export main types
pub use record::{Affiliation, Record, Role};
pub use roster::{parse_line, parse_roster, parse_roster_file, parse_roster_str, ParsedRoster};
