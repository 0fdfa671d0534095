//! Record extraction pipeline.
//!
//! Walks every classified table row by row and turns well-formed rows into
//! [`GameRecord`]s. Bad rows are skipped, never fatal: the worst a malformed
//! page can do is produce an empty list.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::classify::classify_tables;
use crate::dom::{HtmlTree, MarkupTree};
use crate::encoding::transcode_to_utf8;
use crate::error::Result;
use crate::options::Options;
use crate::record::GameRecord;
use crate::text::{normalize_text, parse_two_digit_year, year_in_range};

/// Minimum cells a data row needs: title, publisher, release date.
const MIN_CELLS: usize = 3;

/// Why a data row produced no record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowSkip {
    /// Fewer than three cells.
    #[error("row has {0} cells, need {min}", min = MIN_CELLS)]
    TooFewCells(usize),

    /// The title cell is blank.
    #[error("empty title")]
    EmptyTitle,

    /// The title carries the unlicensed marker.
    #[error("unlicensed title")]
    Unlicensed,

    /// No `19xx` year in the release date.
    #[error("no 19xx year in {0:?}")]
    NoYear(String),

    /// The year is outside the configured window.
    #[error("year {0} outside range")]
    OutOfRange(u8),
}

/// Extract records from an HTML string with default options.
#[must_use]
pub fn extract_games(html: &str) -> Vec<GameRecord> {
    extract_from_tree(&HtmlTree::parse(html), &Options::default())
}

/// Extract records from an HTML string.
///
/// # Errors
///
/// Returns `Error::InvalidYearRange` when the options are invalid. Markup
/// problems never produce an error.
pub fn extract_games_with_options(html: &str, options: &Options) -> Result<Vec<GameRecord>> {
    options.validate()?;
    Ok(extract_from_tree(&HtmlTree::parse(html), options))
}

/// Extract records from raw page bytes, detecting the charset first.
///
/// # Errors
///
/// Same as [`extract_games_with_options`].
pub fn extract_games_bytes(html: &[u8], options: &Options) -> Result<Vec<GameRecord>> {
    extract_games_with_options(&transcode_to_utf8(html), options)
}

/// Extract records from any markup tree.
///
/// Records come out in table order, then row order; the first record for a
/// given (title, year, region) wins. Options are assumed valid.
pub fn extract_from_tree<T: MarkupTree>(tree: &T, options: &Options) -> Vec<GameRecord> {
    let mut records = Vec::new();
    let mut seen: HashSet<(String, u8, String)> = HashSet::new();

    for classified in classify_tables(tree, options) {
        let before = records.len();

        // The first row is the header.
        for (index, row) in tree.rows(&classified.table).iter().enumerate().skip(1) {
            match extract_row(tree, row, &classified.region, options) {
                Ok(record) => {
                    let key = (record.title.clone(), record.year, record.region.clone());
                    if seen.insert(key) {
                        records.push(record);
                    } else {
                        trace!(row = index, title = %record.title, "duplicate dropped");
                    }
                }
                Err(skip) => trace!(row = index, %skip, "row skipped"),
            }
        }

        debug!(
            region = %classified.region,
            records = records.len() - before,
            "table processed"
        );
    }

    records
}

/// Build a record from one data row.
///
/// # Errors
///
/// Returns the [`RowSkip`] reason when the row yields no record.
pub fn extract_row<'a, T: MarkupTree>(
    tree: &'a T,
    row: &T::Node<'a>,
    region: &str,
    options: &Options,
) -> std::result::Result<GameRecord, RowSkip> {
    let cells = tree.cells(row);
    let [title_cell, publisher_cell, date_cell, ..] = cells.as_slice() else {
        return Err(RowSkip::TooFewCells(cells.len()));
    };

    let title = normalize_text(&tree.text(title_cell));
    if title.is_empty() {
        return Err(RowSkip::EmptyTitle);
    }
    if title.contains(&options.unlicensed_marker) {
        return Err(RowSkip::Unlicensed);
    }

    let publisher = normalize_text(&tree.text(publisher_cell));
    let release_date = normalize_text(&tree.text(date_cell));

    let year = parse_two_digit_year(&release_date).ok_or_else(|| RowSkip::NoYear(release_date.clone()))?;
    if !year_in_range(year, options.min_year, options.max_year) {
        return Err(RowSkip::OutOfRange(year));
    }

    Ok(GameRecord {
        title,
        publisher,
        year,
        release_date,
        region: region.to_string(),
    })
}
