//! # nes-catalog
//!
//! Extracts game listings from wiki pages that tabulate releases by region,
//! and renders them as console tables and static HTML reports.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes_catalog::extract_games;
//!
//! let html = r#"
//!     <h2>North America</h2>
//!     <table>
//!         <tr><th>Title</th><th>Publisher</th><th>Release date</th></tr>
//!         <tr><td>Super Mario Bros.</td><td>Nintendo</td><td>September 13, 1985</td></tr>
//!     </table>"#;
//!
//! let games = extract_games(html);
//! assert_eq!(games[0].title, "Super Mario Bros.");
//! assert_eq!(games[0].year, 85);
//! ```
//!
//! ## How tables are picked
//!
//! - the nearest preceding `h2`/`h3` must name a configured region
//! - the first row must have a `Title` or `Game` column
//! - data rows need title, publisher and release date cells; the date must
//!   contain a `19xx` year inside the configured window
//!
//! Records are deduplicated on (title, year, region); the first one seen wins.

mod error;
mod extract;
mod options;
mod record;

/// Markup capability trait and its `dom_query` backend.
pub mod dom;

/// Table classification by heading region and header columns.
pub mod classify;

/// Text normalization and year parsing.
pub mod text;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page download with on-disk cache.
pub mod fetch;

/// Console, HTML and JSON output.
pub mod render;

/// ROM filename matching and renaming.
pub mod roms;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{
    extract_from_tree, extract_games, extract_games_bytes, extract_games_with_options, extract_row,
    RowSkip,
};
pub use options::{Options, RegionMarker};
pub use record::GameRecord;
