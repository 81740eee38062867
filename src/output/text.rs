//! Plain-text rendering of query results for the terminal.

use crate::query::{DataRow, HouseRosters};
use std::fmt::Write;

/// One name per line
pub fn format_names<'a>(names: impl IntoIterator<Item = &'a String>) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Each roster under its heading, empty rosters shown as "(none)"
pub fn format_rosters(rosters: &HouseRosters) -> String {
    let mut out = String::new();

    for (index, (title, names)) in rosters.titled().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} ({})", title, names.len());
        let _ = writeln!(out, "{}", "-".repeat(title.len()));

        if names.is_empty() {
            out.push_str("  (none)\n");
        }
        for name in names {
            let _ = writeln!(out, "  {}", name);
        }
    }

    out
}

/// Aligned table of data rows
pub fn format_rows(rows: &[DataRow]) -> String {
    let headers = ("NAME", "HOUSE", "HEAD OF HOUSE", "COHORT");

    let name_width = column_width(rows, headers.0, |r| &r.full_name);
    let house_width = column_width(rows, headers.1, |r| &r.house);
    let head_width = column_width(rows, headers.2, |r| &r.head_of_house);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<house_width$}  {:<head_width$}  {}",
        headers.0, headers.1, headers.2, headers.3
    );

    for row in rows {
        let line = format!(
            "{:<name_width$}  {:<house_width$}  {:<head_width$}  {}",
            row.full_name, row.house, row.head_of_house, row.cohort
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Widest value in a column, header included
///
/// **Private** - internal helper for format_rows
fn column_width(rows: &[DataRow], header: &str, field: impl Fn(&DataRow) -> &String) -> usize {
    rows.iter()
        .map(|row| field(row).chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

/// Result line for a cohort lookup
pub fn format_cohort(name: &str, cohort: Option<&str>) -> String {
    match cohort {
        Some(cohort) => format!("{}: {}\n", name, cohort),
        None => format!("{}: not found\n", name),
    }
}
