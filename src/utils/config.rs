//! Configuration and constants for the roster parser and CLI.

/// Separator between the fields of one roster line
pub const FIELD_DELIMITER: char = '|';

/// Number of fields every roster line must carry
pub const FIELD_COUNT: usize = 5;

/// Cohort selector meaning "every cohort"
pub const ALL_COHORTS: &str = "All";

// Role codes share the cohort column with real cohort labels.
// Anything longer than COHORT_MIN_LEN characters is a cohort label.
pub const GHOST_CODE: &str = "G";
pub const INSTRUCTOR_CODE: &str = "I";
pub const COHORT_MIN_LEN: usize = 2;

/// Houses with their own roster, in output order
pub const HOUSE_ORDER: [&str; 5] = [
    "Dumbledore's Army",
    "Gryffindor",
    "Hufflepuff",
    "Ravenclaw",
    "Slytherin",
];

/// Roster headings, in the order `HouseRosters::lists` returns them
pub const ROSTER_TITLES: [&str; 7] = [
    "Dumbledore's Army",
    "Gryffindor",
    "Hufflepuff",
    "Ravenclaw",
    "Slytherin",
    "Ghosts",
    "Instructors",
];

/// Data file read when `--file` is not given
pub const DEFAULT_DATA_FILE: &str = "cohort_data.txt";

/// Report written by `export` when `--output` is not given
pub const DEFAULT_REPORT_FILE: &str = "roster_report.json";

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";
