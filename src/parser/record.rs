//! Roster record types.
//!
//! One `Record` per well-formed line of the roster file. The last column
//! carries either a cohort label or a role code; it is resolved into an
//! `Affiliation` once, when the record is built.

use crate::utils::config::{COHORT_MIN_LEN, GHOST_CODE, INSTRUCTOR_CODE};
use serde::{Serialize, Serializer};
use std::fmt;

/// Staff role of a person without a cohort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Ghost,
    Instructor,
}

impl Role {
    /// Single-letter code used in the roster file
    pub fn code(self) -> &'static str {
        match self {
            Role::Ghost => GHOST_CODE,
            Role::Instructor => INSTRUCTOR_CODE,
        }
    }
}

/// Meaning of the cohort/role column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Affiliation {
    /// Enrollment period, e.g. "Fall 2015"
    Cohort(String),

    /// `G` or `I`
    Role(Role),

    /// Short value that is neither a cohort nor a known role code
    Unrecognized(String),
}

impl std::str::FromStr for Affiliation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::classify(s))
    }
}

impl Affiliation {
    /// Resolve a raw column value
    ///
    /// More than `COHORT_MIN_LEN` characters means a cohort label.
    pub fn classify(raw: &str) -> Self {
        if raw.chars().count() > COHORT_MIN_LEN {
            Self::Cohort(raw.to_string())
        } else if raw == GHOST_CODE {
            Self::Role(Role::Ghost)
        } else if raw == INSTRUCTOR_CODE {
            Self::Role(Role::Instructor)
        } else {
            Self::Unrecognized(raw.to_string())
        }
    }

    /// Raw column value, exactly as it appeared (trimmed) in the file
    pub fn as_str(&self) -> &str {
        match self {
            Affiliation::Cohort(label) => label,
            Affiliation::Role(role) => role.code(),
            Affiliation::Unrecognized(raw) => raw,
        }
    }

    /// Cohort label, if this is a student
    pub fn cohort(&self) -> Option<&str> {
        match self {
            Affiliation::Cohort(label) => Some(label),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Affiliation::Role(role) => Some(*role),
            _ => None,
        }
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Affiliation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single person from the roster file
///
/// Fields are private so a record cannot change after parsing and
/// `full_name` always agrees with the name parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    first_name: String,
    last_name: String,
    house: String,
    head_of_house: String,
    affiliation: Affiliation,
    full_name: String,
}

impl Record {
    /// Build a record from already-trimmed fields
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        house: impl Into<String>,
        head_of_house: impl Into<String>,
        role_or_cohort: &str,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let full_name = format!("{} {}", first_name, last_name);

        Self {
            first_name,
            last_name,
            house: house.into(),
            head_of_house: head_of_house.into(),
            affiliation: Affiliation::classify(role_or_cohort),
            full_name,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// House name, empty for ghosts and instructors
    pub fn house(&self) -> &str {
        &self.house
    }

    pub fn head_of_house(&self) -> &str {
        &self.head_of_house
    }

    pub fn affiliation(&self) -> &Affiliation {
        &self.affiliation
    }

    /// Raw cohort/role column value
    pub fn role_or_cohort(&self) -> &str {
        self.affiliation.as_str()
    }

    /// "First Last"
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}
