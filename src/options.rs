//! Configuration options for game-table extraction.
//!
//! The `Options` struct controls which tables qualify and which rows survive
//! filtering. Defaults reproduce the North American 1985–1995 catalog.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Maps a heading substring to the region label attached to records.
///
/// Matching is case-insensitive against the normalized heading text.
///
/// ```rust
/// use nes_catalog::RegionMarker;
///
/// let marker: RegionMarker = "europe=PAL Europe".parse()?;
/// assert_eq!(marker.label, "PAL Europe");
/// # Ok::<(), nes_catalog::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMarker {
    /// Substring looked for in the heading text.
    pub marker: String,
    /// Label stored in `GameRecord::region`.
    pub label: String,
}

impl RegionMarker {
    /// Create a marker; the marker text is stored lowercase.
    #[must_use]
    pub fn new(marker: &str, label: &str) -> Self {
        Self {
            marker: marker.trim().to_lowercase(),
            label: label.trim().to_string(),
        }
    }

    /// The North American marker used by default.
    #[must_use]
    pub fn north_america() -> Self {
        Self::new("north america", "North America")
    }

    /// Whether a lowercase heading text carries this marker.
    #[inline]
    #[must_use]
    pub fn matches(&self, heading_lower: &str) -> bool {
        heading_lower.contains(&self.marker)
    }
}

impl FromStr for RegionMarker {
    type Err = Error;

    /// Parse `MARKER=LABEL`. A bare `MARKER` uses itself as the label.
    fn from_str(s: &str) -> Result<Self> {
        let (marker, label) = s.split_once('=').unwrap_or((s, s));
        if marker.trim().is_empty() || label.trim().is_empty() {
            return Err(Error::InvalidRegion(s.to_string()));
        }
        Ok(Self::new(marker, label))
    }
}

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use nes_catalog::Options;
///
/// let options = Options {
///     min_year: 88,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Lowest two-digit year kept (inclusive).
    ///
    /// Default: `85`
    pub min_year: u8,

    /// Highest two-digit year kept (inclusive).
    ///
    /// Default: `95`
    pub max_year: u8,

    /// Region markers checked against each table's preceding heading.
    ///
    /// The first matching marker wins.
    ///
    /// Default: North America only
    pub regions: Vec<RegionMarker>,

    /// Tags treated as region headings.
    ///
    /// Default: `["h2", "h3"]`
    pub heading_tags: Vec<String>,

    /// Header labels identifying a game-listing table (lowercase).
    ///
    /// Default: `["title", "game"]`
    pub title_columns: Vec<String>,

    /// Rows whose title contains this marker are dropped.
    ///
    /// Default: `"(Unlicensed)"`
    pub unlicensed_marker: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_year: 85,
            max_year: 95,
            regions: vec![RegionMarker::north_america()],
            heading_tags: vec!["h2".to_string(), "h3".to_string()],
            title_columns: vec!["title".to_string(), "game".to_string()],
            unlicensed_marker: "(Unlicensed)".to_string(),
        }
    }
}

impl Options {
    /// Replace the year window.
    #[must_use]
    pub fn with_year_range(mut self, min_year: u8, max_year: u8) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Replace the region markers.
    #[must_use]
    pub fn with_regions(mut self, regions: Vec<RegionMarker>) -> Self {
        self.regions = regions;
        self
    }

    /// Check that the year window is usable.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidYearRange` when `min_year > max_year` or
    /// `max_year > 99`.
    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year || self.max_year > 99 {
            return Err(Error::InvalidYearRange {
                min: self.min_year,
                max: self.max_year,
            });
        }
        Ok(())
    }
}
