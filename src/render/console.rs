//! Fixed-width console table.

use std::io::{self, Write};

use crate::record::GameRecord;

use super::sorted_for_display;

const YEAR_WIDTH: usize = 6;
const TITLE_WIDTH: usize = 50;
const PUBLISHER_WIDTH: usize = 30;
const REGION_WIDTH: usize = 15;
const RULE_WIDTH: usize = 120;

/// Print records as an aligned table followed by a total line.
///
/// Long cells are cut to their column width. Prints `No games found.` for
/// an empty slice.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn render_console<W: Write>(records: &[&GameRecord], out: &mut W) -> io::Result<()> {
    out.write_all(render_console_to_string(records).as_bytes())
}

/// Render the console table into a string.
#[must_use]
pub fn render_console_to_string(records: &[&GameRecord]) -> String {
    if records.is_empty() {
        return "No games found.\n".to_string();
    }

    let mut table = table_line("Year", "Title", "Publisher", "Region");
    table.push_str(&"-".repeat(RULE_WIDTH));
    table.push('\n');

    for record in sorted_for_display(records.iter().copied()) {
        table.push_str(&table_line(
            &record.year.to_string(),
            &truncate(&record.title, TITLE_WIDTH),
            &truncate(&record.publisher, PUBLISHER_WIDTH),
            &truncate(&record.region, REGION_WIDTH),
        ));
    }

    table.push_str(&format!("Total games: {}\n", records.len()));
    table
}

fn table_line(year: &str, title: &str, publisher: &str, region: &str) -> String {
    format!("{year:<YEAR_WIDTH$} | {title:<TITLE_WIDTH$} | {publisher:<PUBLISHER_WIDTH$} | {region:<REGION_WIDTH$}\n")
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
