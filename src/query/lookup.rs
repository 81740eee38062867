//! Name-based lookups over parsed records.
//!
//! A missing name is an expected outcome here: lookups return `None` or an
//! empty set rather than an error.

use crate::parser::Record;
use std::collections::{BTreeSet, HashSet};

/// First record whose full name is exactly `name`
pub fn find_person<'a>(records: &'a [Record], name: &str) -> Option<&'a Record> {
    records.iter().find(|record| record.full_name() == name)
}

/// Raw cohort/role value for `name`
///
/// **Public** - `None` means the person is not in the roster, which is
/// distinct from `Some("")` for a person with an empty column
pub fn get_cohort_for(records: &[Record], name: &str) -> Option<String> {
    find_person(records, name).map(|record| record.role_or_cohort().to_string())
}

/// Last names that occur more than once, each reported once
pub fn find_duped_last_names(records: &[Record]) -> BTreeSet<String> {
    let mut seen = HashSet::new();

    records
        .iter()
        .map(Record::last_name)
        .filter(|last_name| !seen.insert(*last_name))
        .map(str::to_string)
        .collect()
}

/// Everyone sharing both house and raw cohort/role value with `name`
///
/// **Public** - the person themself is never included
///
/// Matching uses the raw column, so a ghost's housemates are the other
/// houseless `G` rows. An unknown name yields an empty set.
pub fn get_housemates_for(records: &[Record], name: &str) -> BTreeSet<String> {
    let Some(person) = find_person(records, name) else {
        return BTreeSet::new();
    };

    records
        .iter()
        .filter(|record| {
            record.full_name() != name
                && record.house() == person.house()
                && record.affiliation() == person.affiliation()
        })
        .map(|record| record.full_name().to_string())
        .collect()
}
