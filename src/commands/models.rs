use crate::utils::config::{DEFAULT_DATA_FILE, DEFAULT_REPORT_FILE};
use std::path::PathBuf;

/// How query results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A single roster query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Unique house names
    Houses,

    /// Student names, `None` for every cohort
    Students { cohort: Option<String> },

    /// Seven rosters by house, ghosts and instructors
    Rosters,

    /// Every record as (name, house, head of house, cohort)
    Data,

    /// Cohort of one person
    Cohort { name: String },

    /// Last names shared by more than one person
    Dupes,

    /// Same house and cohort as one person
    Housemates { name: String },
}

/// Arguments for the query commands
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct QueryArgs {
    /// Roster file to read
    pub data_file: PathBuf,

    pub query: Query,

    pub format: OutputFormat,
}

impl Default for QueryArgs {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            query: Query::Houses,
            format: OutputFormat::Text,
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Roster file to read
    pub data_file: PathBuf,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Print report summary to stdout
    pub print_summary: bool,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            output_json: PathBuf::from(DEFAULT_REPORT_FILE),
            print_summary: false,
        }
    }
}
