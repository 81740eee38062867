//! Cohort Roster
//!
//! Parse pipe-delimited student and staff rosters and query them:
//! houses, students by cohort, rosters by house, cohort lookups,
//! duplicate surnames and housemates.
//!
//! Each line of a roster file holds five fields:
//!
//! ```text
//! first|last|house|head of house|cohort or role code
//! ```
//!
//! The functions re-exported at the crate root take a path and re-read the
//! file on every call. To parse once and query many times, use
//! [`parser::parse_roster_file`] with [`query::views`] and [`query::lookup`].
//!
//! ```no_run
//! let housemates = cohort_roster::get_housemates_for("cohort_data.txt", "Harry Potter")?;
//! assert!(!housemates.contains("Harry Potter"));
//! # Ok::<(), cohort_roster::utils::ParseError>(())
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod query;
pub mod utils;

pub use parser::{Affiliation, Record, Role};
pub use query::file::{
    all_data, all_houses, all_names_by_house, find_duped_last_names, get_cohort_for,
    get_housemates_for, students_by_cohort,
};
pub use query::{DataRow, HouseRosters};
