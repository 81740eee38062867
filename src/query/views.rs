//! Whole-roster views: houses, cohorts, rosters and the flat data dump.
//!
//! Every function here reads a parsed record slice and returns a fresh
//! collection. Nothing is cached between calls.

use crate::parser::{Record, Role};
use crate::utils::config::{ALL_COHORTS, HOUSE_ORDER, ROSTER_TITLES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of every non-empty house name
pub fn all_houses(records: &[Record]) -> BTreeSet<String> {
    records
        .iter()
        .map(Record::house)
        .filter(|house| !house.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sorted full names of students, optionally limited to one cohort
///
/// **Public** - `None` and `Some("All")` both select every cohort
///
/// Ghosts, instructors and rows with an unrecognized code never appear,
/// whatever cohort is asked for.
pub fn students_by_cohort(records: &[Record], cohort: Option<&str>) -> Vec<String> {
    let wanted = cohort.filter(|c| *c != ALL_COHORTS);

    let mut students: Vec<String> = records
        .iter()
        .filter(|record| match (record.affiliation().cohort(), wanted) {
            (Some(_), None) => true,
            (Some(label), Some(wanted)) => label == wanted,
            (None, _) => false,
        })
        .map(|record| record.full_name().to_string())
        .collect();

    students.sort();
    students
}

/// Distinct cohort labels present in the records
pub fn all_cohorts(records: &[Record]) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|record| record.affiliation().cohort())
        .map(str::to_string)
        .collect()
}

/// Name rosters for the five houses plus ghosts and instructors
///
/// Every list is sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseRosters {
    pub dumbledores_army: Vec<String>,
    pub gryffindor: Vec<String>,
    pub hufflepuff: Vec<String>,
    pub ravenclaw: Vec<String>,
    pub slytherin: Vec<String>,
    pub ghosts: Vec<String>,
    pub instructors: Vec<String>,
}

impl HouseRosters {
    /// The seven rosters in fixed order (see `ROSTER_TITLES`)
    pub fn lists(&self) -> [&[String]; 7] {
        [
            &self.dumbledores_army,
            &self.gryffindor,
            &self.hufflepuff,
            &self.ravenclaw,
            &self.slytherin,
            &self.ghosts,
            &self.instructors,
        ]
    }

    pub fn into_lists(self) -> [Vec<String>; 7] {
        [
            self.dumbledores_army,
            self.gryffindor,
            self.hufflepuff,
            self.ravenclaw,
            self.slytherin,
            self.ghosts,
            self.instructors,
        ]
    }

    /// Rosters paired with their headings
    pub fn titled(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        ROSTER_TITLES.into_iter().zip(self.lists())
    }

    /// Total number of names across all rosters
    pub fn total_names(&self) -> usize {
        self.lists().iter().map(|list| list.len()).sum()
    }

    fn lists_mut(&mut self) -> [&mut Vec<String>; 7] {
        [
            &mut self.dumbledores_army,
            &mut self.gryffindor,
            &mut self.hufflepuff,
            &mut self.ravenclaw,
            &mut self.slytherin,
            &mut self.ghosts,
            &mut self.instructors,
        ]
    }
}

/// Partition records into the seven rosters
///
/// **Public** - house match wins over role; records matching neither are dropped
pub fn all_names_by_house(records: &[Record]) -> HouseRosters {
    let mut rosters = HouseRosters::default();

    for record in records {
        if let Some(index) = roster_index(record) {
            rosters.lists_mut()[index].push(record.full_name().to_string());
        }
    }

    for list in rosters.lists_mut() {
        list.sort();
    }

    rosters
}

/// Position of a record's roster in `HouseRosters::lists`
///
/// **Private** - internal helper for all_names_by_house
fn roster_index(record: &Record) -> Option<usize> {
    if let Some(index) = HOUSE_ORDER.iter().position(|house| *house == record.house()) {
        return Some(index);
    }

    match record.affiliation().role()? {
        Role::Ghost => Some(HOUSE_ORDER.len()),
        Role::Instructor => Some(HOUSE_ORDER.len() + 1),
    }
}

/// One row of the flat data dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRow {
    pub full_name: String,
    pub house: String,
    pub head_of_house: String,

    /// Raw cohort/role column value
    pub cohort: String,
}

impl DataRow {
    /// `(full_name, house, head_of_house, cohort)`
    pub fn as_tuple(&self) -> (&str, &str, &str, &str) {
        (&self.full_name, &self.house, &self.head_of_house, &self.cohort)
    }
}

impl From<&Record> for DataRow {
    fn from(record: &Record) -> Self {
        Self {
            full_name: record.full_name().to_string(),
            house: record.house().to_string(),
            head_of_house: record.head_of_house().to_string(),
            cohort: record.role_or_cohort().to_string(),
        }
    }
}

/// Every record as a `DataRow`, in file order
pub fn all_data(records: &[Record]) -> Vec<DataRow> {
    records.iter().map(DataRow::from).collect()
}
