//! The extracted game record.

use serde::{Deserialize, Serialize};

/// One game row pulled from a classified listing table.
///
/// Records are built once per extraction run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRecord {
    /// Normalized display title.
    pub title: String,

    /// Normalized publisher; may be empty.
    pub publisher: String,

    /// Two-digit year (19xx) parsed from `release_date`.
    pub year: u8,

    /// Normalized release date text as it appeared in the table.
    pub release_date: String,

    /// Region label from the table's heading classification.
    pub region: String,
}

impl GameRecord {
    /// The deduplication key: (title, year, region).
    #[must_use]
    pub fn key(&self) -> (&str, u8, &str) {
        (&self.title, self.year, &self.region)
    }

    /// Four-digit calendar year.
    #[must_use]
    pub fn full_year(&self) -> u16 {
        1900 + u16::from(self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> GameRecord {
        GameRecord {
            title: "Metroid".to_string(),
            publisher: "Nintendo".to_string(),
            year: 87,
            release_date: "August 15, 1987".to_string(),
            region: "North America".to_string(),
        }
    }

    #[test]
    fn key_ignores_publisher_and_date() {
        let a = record();
        let b = GameRecord {
            publisher: "NINTENDO".to_string(),
            release_date: "1987".to_string(),
            ..record()
        };
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn full_year_adds_century() {
        assert_eq!(record().full_year(), 1987);
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_string(&record()).expect("serialize");
        assert!(json.contains(r#""title":"Metroid""#));
        assert!(json.contains(r#""year":87"#));
        assert!(json.contains(r#""region":"North America""#));
    }
}
