//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod models;
pub mod query;
pub mod utils;

// Re-export main command functions
pub use export::{execute_export, validate_export_args};
pub use models::{ExportArgs, OutputFormat, Query, QueryArgs};
pub use query::{execute_query, run_query, validate_query_args, QueryOutput};
pub use utils::{display_version, validate_report_file};
