//! Table classification.
//!
//! A table is a regional game listing when the heading right before it names
//! a configured region and its header row has a title column. Everything
//! else on the page (navigation boxes, legends, per-region summaries) fails
//! one of the two checks and is skipped without comment.

use tracing::debug;

use crate::dom::MarkupTree;
use crate::options::{Options, RegionMarker};
use crate::text::normalize_text;

/// A table that passed classification, tagged with its region label.
#[derive(Debug, Clone)]
pub struct ClassifiedTable<N> {
    /// The table block.
    pub table: N,
    /// Label of the first region marker found in the preceding heading.
    pub region: String,
}

/// Why a table was not selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRejection {
    /// No heading precedes the table.
    NoHeading,
    /// The heading names no configured region.
    UnknownRegion,
    /// The table has no rows at all.
    NoHeaderRow,
    /// The header row has no title/game column.
    NoTitleColumn,
}

/// Select the regional game-listing tables of a document, in document order.
pub fn classify_tables<'a, T: MarkupTree>(
    tree: &'a T,
    options: &Options,
) -> Vec<ClassifiedTable<T::Node<'a>>> {
    let mut selected = Vec::new();

    for (index, table) in tree.tables().into_iter().enumerate() {
        match classify_table(tree, &table, options) {
            Ok(region) => {
                debug!(table = index, region = %region, "table selected");
                selected.push(ClassifiedTable { table, region });
            }
            Err(reason) => debug!(table = index, ?reason, "table skipped"),
        }
    }

    selected
}

/// Classify one table, returning its region label.
///
/// # Errors
///
/// Returns the [`TableRejection`] describing the first failed check.
pub fn classify_table<'a, T: MarkupTree>(
    tree: &'a T,
    table: &T::Node<'a>,
    options: &Options,
) -> Result<String, TableRejection> {
    let heading = tree
        .preceding_heading(table, &options.heading_tags)
        .ok_or(TableRejection::NoHeading)?;
    let heading_text = normalize_text(&tree.text(&heading));
    let region = region_for_heading(&heading_text, &options.regions)
        .ok_or(TableRejection::UnknownRegion)?;

    let rows = tree.rows(table);
    let header_row = rows.first().ok_or(TableRejection::NoHeaderRow)?;
    let labels: Vec<String> = tree
        .cells(header_row)
        .iter()
        .map(|cell| tree.text(cell))
        .collect();

    if !is_game_header(&labels, &options.title_columns) {
        return Err(TableRejection::NoTitleColumn);
    }

    Ok(region.label.clone())
}

/// First region marker contained (case-insensitively) in a heading.
#[must_use]
pub fn region_for_heading<'r>(heading: &str, regions: &'r [RegionMarker]) -> Option<&'r RegionMarker> {
    let lower = heading.to_lowercase();
    regions.iter().find(|region| region.matches(&lower))
}

/// Whether any header label equals one of the title columns after trimming
/// and lowercasing.
#[must_use]
pub fn is_game_header<S: AsRef<str>>(labels: &[S], title_columns: &[String]) -> bool {
    labels.iter().any(|label| {
        let label = label.as_ref().trim().to_lowercase();
        title_columns.iter().any(|column| column.eq_ignore_ascii_case(&label))
    })
}
