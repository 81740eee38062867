//! Cohort Roster CLI
//!
//! Queries a pipe-delimited roster file from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use cohort_roster::commands::{
    display_version, execute_export, execute_query, validate_report_file, ExportArgs,
    OutputFormat, Query, QueryArgs,
};
use cohort_roster::utils::config::{DEFAULT_DATA_FILE, DEFAULT_REPORT_FILE};

/// Cohort Roster - query houses, cohorts and housemates
#[derive(Parser, Debug)]
#[command(name = "cohort-roster")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Roster file to read
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List every house
    Houses,

    /// List students, optionally for one cohort
    Students {
        /// Cohort label, e.g. "Fall 2015"
        #[arg(short, long)]
        cohort: Option<String>,
    },

    /// Show rosters for each house, ghosts and instructors
    Rosters,

    /// Show every record
    Data,

    /// Look up the cohort of a person
    Cohort {
        /// Full name, e.g. "Harry Potter"
        name: String,
    },

    /// List last names shared by more than one person
    Dupes,

    /// List people in the same house and cohort as a person
    Housemates {
        /// Full name, e.g. "Harry Potter"
        name: String,
    },

    /// Write a JSON report of the whole roster
    Export {
        /// Output path for JSON report
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        report: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let query = match cli.command {
        Commands::Houses => Query::Houses,
        Commands::Students { cohort } => Query::Students { cohort },
        Commands::Rosters => Query::Rosters,
        Commands::Data => Query::Data,
        Commands::Cohort { name } => Query::Cohort { name },
        Commands::Dupes => Query::Dupes,
        Commands::Housemates { name } => Query::Housemates { name },

        Commands::Export { output, summary } => {
            let args = ExportArgs {
                data_file: cli.file,
                output_json: output,
                print_summary: summary,
            };
            execute_export(&args)?;
            return Ok(());
        }

        Commands::Validate { report } => {
            validate_report_file(&report)?;
            return Ok(());
        }

        Commands::Version => {
            display_version();
            return Ok(());
        }
    };

    let args = QueryArgs {
        data_file: cli.file,
        query,
        format,
    };

    print!("{}", execute_query(&args)?);

    Ok(())
}
