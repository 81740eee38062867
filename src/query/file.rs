//! Path-based queries.
//!
//! Each function opens, parses and closes the roster file on every call,
//! then delegates to the in-memory views. No state survives between calls.

use super::lookup;
use super::views::{self, DataRow, HouseRosters};
use crate::parser::parse_roster_file;
use crate::utils::error::ParseError;
use std::collections::BTreeSet;
use std::path::Path;

/// Set of every non-empty house name in the file
pub fn all_houses(path: impl AsRef<Path>) -> Result<BTreeSet<String>, ParseError> {
    let records = parse_roster_file(path)?;
    Ok(views::all_houses(&records))
}

/// Sorted student names, `None` or `Some("All")` for every cohort
pub fn students_by_cohort(
    path: impl AsRef<Path>,
    cohort: Option<&str>,
) -> Result<Vec<String>, ParseError> {
    let records = parse_roster_file(path)?;
    Ok(views::students_by_cohort(&records, cohort))
}

/// The seven sorted rosters
pub fn all_names_by_house(path: impl AsRef<Path>) -> Result<HouseRosters, ParseError> {
    let records = parse_roster_file(path)?;
    Ok(views::all_names_by_house(&records))
}

/// One row per record, in file order
pub fn all_data(path: impl AsRef<Path>) -> Result<Vec<DataRow>, ParseError> {
    let records = parse_roster_file(path)?;
    Ok(views::all_data(&records))
}

/// Cohort/role value for `name`, `Ok(None)` when nobody has that name
pub fn get_cohort_for(path: impl AsRef<Path>, name: &str) -> Result<Option<String>, ParseError> {
    let records = parse_roster_file(path)?;
    Ok(lookup::get_cohort_for(&records, name))
}

pub fn find_duped_last_names(path: impl AsRef<Path>) -> Result<BTreeSet<String>, ParseError> {
    let records = parse_roster_file(path)?;
    Ok(lookup::find_duped_last_names(&records))
}

/// Housemates of `name`; empty when `name` is not in the file
pub fn get_housemates_for(
    path: impl AsRef<Path>,
    name: &str,
) -> Result<BTreeSet<String>, ParseError> {
    let records = parse_roster_file(path)?;
    Ok(lookup::get_housemates_for(&records, name))
}
