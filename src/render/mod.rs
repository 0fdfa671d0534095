//! Output rendering for extracted catalogs.
//!
//! Extraction order is table/row order; every renderer here shows records
//! chronologically instead, sorted by (year, title).

pub mod console;
pub mod html;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::record::GameRecord;

pub use console::{render_console, render_console_to_string};
pub use html::{render_html, write_html_report};

/// Records whose title contains `needle`, case-insensitively.
///
/// An empty needle keeps everything.
#[must_use]
pub fn filter_by_name<'a>(records: &'a [GameRecord], needle: &str) -> Vec<&'a GameRecord> {
    let needle = needle.to_lowercase();
    records
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .collect()
}

/// Sort record references by year, then title.
#[must_use]
pub fn sorted_for_display<'a, I>(records: I) -> Vec<&'a GameRecord>
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    let mut sorted: Vec<&GameRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.title.cmp(&b.title)));
    sorted
}

/// Write records as a pretty-printed JSON array in display order.
///
/// # Errors
///
/// Returns `Error::Io` or `Error::Json` on failure.
pub fn write_json(records: &[&GameRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&sorted_for_display(records.iter().copied()))?;
    fs::write(path, json)?;
    info!(path = %path.display(), records = records.len(), "JSON export saved");
    Ok(())
}
