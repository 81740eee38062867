//! Read-only queries over roster records.
//!
//! Two flavours of every query:
//! - `views` / `lookup` work on an already-parsed `&[Record]`
//! - `file` takes a path and re-parses the file on each call

pub mod file;
pub mod lookup;
pub mod views;

// Re-export main types and functions
pub use lookup::find_person;
pub use views::{all_cohorts, DataRow, HouseRosters};
