//! Error types for nes-catalog.
//!
//! The extraction core never fails on parseable markup; these errors come
//! from option validation and from the peripheral fetch/render/rename steps.

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The two-digit year window is empty or exceeds 99.
    #[error("Invalid year range {min}..={max}: expected min <= max <= 99")]
    InvalidYearRange {
        /// Lower bound as given.
        min: u8,
        /// Upper bound as given.
        max: u8,
    },

    /// A region marker could not be parsed from `MARKER=LABEL` form.
    #[error("Invalid region marker: {0}")]
    InvalidRegion(String),

    /// The page URL is malformed or not http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network request or HTTP status failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem failure (cache, report, ROM directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON export failure.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;
