//! Roster file parser.
//!
//! Reads pipe-delimited lines into `Record`s:
//!
//! ```text
//! Harry|Potter|Gryffindor|McGonagall|Fall 2015
//! Nearly Headless|Nick|||G
//! ```
//!
//! Lines that do not split into exactly five fields (typically a trailing
//! blank line) are skipped, never reported as errors.

use super::record::Record;
use crate::utils::config::{FIELD_COUNT, FIELD_DELIMITER};
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Result of parsing a whole roster source
#[derive(Debug, Clone, Default)]
pub struct ParsedRoster {
    /// Records in file order
    pub records: Vec<Record>,

    /// Number of lines dropped for having the wrong field count
    pub skipped_lines: usize,
}

/// Parse a roster file from disk
///
/// **Public** - main entry point used by every path-based query
///
/// The file handle lives only for the duration of this call.
///
/// # Errors
/// * `ParseError::Io` - the file is missing or a read fails part way
pub fn parse_roster_file(path: impl AsRef<Path>) -> Result<Vec<Record>, ParseError> {
    let path = path.as_ref();
    debug!("Parsing roster file: {}", path.display());

    let io_error = |source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let parsed = parse_roster(BufReader::new(file)).map_err(io_error)?;

    debug!(
        "Parsed {} records from {} ({} lines skipped)",
        parsed.records.len(),
        path.display(),
        parsed.skipped_lines
    );

    Ok(parsed.records)
}

/// Parse roster lines from any buffered reader
///
/// **Public** - lets callers parse once and query the records many times
pub fn parse_roster(reader: impl BufRead) -> io::Result<ParsedRoster> {
    let mut parsed = ParsedRoster::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Some(record) => parsed.records.push(record),
            None => {
                debug!("Skipping line {}: expected {} fields", index + 1, FIELD_COUNT);
                parsed.skipped_lines += 1;
            }
        }
    }

    Ok(parsed)
}

/// Parse roster text already held in memory
pub fn parse_roster_str(text: &str) -> ParsedRoster {
    // Reading from a byte slice cannot fail
    parse_roster(text.as_bytes()).unwrap_or_default()
}

/// Parse one line into a record
///
/// **Public** - returns None for lines without exactly `FIELD_COUNT` fields
pub fn parse_line(line: &str) -> Option<Record> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();

    let [first, last, house, head, role_or_cohort] = fields.as_slice() else {
        return None;
    };

    Some(Record::new(*first, *last, *house, *head, role_or_cohort))
}
