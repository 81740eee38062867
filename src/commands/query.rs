//! Query command implementation.
//!
//! Runs one roster query against the data file and renders the result
//! as text or JSON. Every query reads the file afresh.

use super::models::{OutputFormat, Query, QueryArgs};
use crate::output::{format_cohort, format_names, format_rosters, format_rows, to_json_string};
use crate::query::file;
use crate::query::{DataRow, HouseRosters};
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;

/// Result of a query, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    /// Sorted names (students, houses, surnames, housemates)
    Names(Vec<String>),

    Rosters(HouseRosters),

    Rows(Vec<DataRow>),

    Cohort { name: String, cohort: Option<String> },
}

impl QueryOutput {
    /// Render for the terminal or as pretty JSON
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        if format == OutputFormat::Json {
            let mut json = to_json_string(self).context("Failed to serialize query result")?;
            json.push('\n');
            return Ok(json);
        }

        Ok(match self {
            QueryOutput::Names(names) => format_names(names),
            QueryOutput::Rosters(rosters) => format_rosters(rosters),
            QueryOutput::Rows(rows) => format_rows(rows),
            QueryOutput::Cohort { name, cohort } => format_cohort(name, cohort.as_deref()),
        })
    }
}

/// Execute a query command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The rendered output; printing is left to the caller
///
/// # Errors
/// * Invalid arguments
/// * Roster file missing or unreadable
pub fn execute_query(args: &QueryArgs) -> Result<String> {
    validate_query_args(args)?;

    let output = run_query(args)
        .with_context(|| format!("Failed to query roster file {}", args.data_file.display()))?;

    output.render(args.format)
}

/// Run the query without rendering
///
/// **Public** - useful for tests and library callers
pub fn run_query(args: &QueryArgs) -> Result<QueryOutput> {
    let path = &args.data_file;
    debug!("Running {:?} against {}", args.query, path.display());

    let output = match &args.query {
        Query::Houses => QueryOutput::Names(file::all_houses(path)?.into_iter().collect()),

        Query::Students { cohort } => {
            QueryOutput::Names(file::students_by_cohort(path, cohort.as_deref())?)
        }

        Query::Rosters => QueryOutput::Rosters(file::all_names_by_house(path)?),

        Query::Data => QueryOutput::Rows(file::all_data(path)?),

        Query::Cohort { name } => QueryOutput::Cohort {
            name: name.clone(),
            cohort: file::get_cohort_for(path, name)?,
        },

        Query::Dupes => {
            QueryOutput::Names(file::find_duped_last_names(path)?.into_iter().collect())
        }

        Query::Housemates { name } => {
            let housemates = file::get_housemates_for(path, name)?;

            // An unknown name and a person with no housemates look the same
            if housemates.is_empty() && file::get_cohort_for(path, name)?.is_none() {
                warn!("No one named '{}' in {}", name, path.display());
            }

            QueryOutput::Names(housemates.into_iter().collect())
        }
    };

    Ok(output)
}

/// Validate query arguments
///
/// **Public** - can be called before execute_query for early validation
pub fn validate_query_args(args: &QueryArgs) -> Result<()> {
    if args.data_file.as_os_str().is_empty() {
        anyhow::bail!("Data file path cannot be empty");
    }

    match &args.query {
        Query::Cohort { name } | Query::Housemates { name } if name.trim().is_empty() => {
            anyhow::bail!("Name cannot be empty");
        }
        Query::Students { cohort: Some(cohort) } if cohort.trim().is_empty() => {
            anyhow::bail!("Cohort cannot be empty (omit --cohort to list every cohort)");
        }
        _ => {}
    }

    Ok(())
}
