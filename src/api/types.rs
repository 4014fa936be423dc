//! # Catalog Wire Types
//!
//! Shapes returned by the remote podcast API. The list endpoint returns an
//! array of [`ShowSummary`]; the detail endpoint returns a [`ShowDetail`]
//! with the full season/episode tree.
//!
//! The API is not under our control, so every field that has ever been
//! observed missing is `#[serde(default)]`: a record with no genres or no
//! seasons decodes to empty collections and the UI degrades gracefully
//! instead of failing the whole fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One show as it appears in the full catalog listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShowSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub genres: Vec<u32>,
    #[serde(default)]
    pub image: String,
    /// Season count indicator (the detail endpoint carries the actual list).
    #[serde(default)]
    pub seasons: u32,
}

impl ShowSummary {
    /// Parsed `updated` timestamp, used for the recency sorts.
    pub fn updated_at(&self) -> DateTime<Utc> {
        parse_updated(&self.updated)
    }
}

/// Full record for a single show, fetched by id.
///
/// Genre ids are not part of this payload; they are merged in from the
/// already loaded [`ShowSummary`] with the same id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShowDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

impl ShowDetail {
    /// Total episode count across all seasons.
    pub fn episode_count(&self) -> usize {
        self.seasons.iter().map(|s| s.episodes.len()).sum()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Season {
    #[serde(default)]
    pub season: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Episode {
    #[serde(default)]
    pub episode: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Media file URI; empty when the API omits it.
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub image: String,
}

/// Parse an ISO-8601 `updated` value, falling back to the Unix epoch.
///
/// The fallback keeps the recency sorts total: unparseable values all
/// compare equal and sink together instead of poisoning the order.
pub fn parse_updated(iso: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_summary_decodes_full_record() {
        let json = r#"{
            "id": "10716",
            "title": "Something Was Wrong",
            "updated": "2022-11-03T07:00:00.000Z",
            "genres": [1, 2],
            "image": "https://example.com/cover.jpg",
            "seasons": 14
        }"#;
        let show: ShowSummary = serde_json::from_str(json).unwrap();
        assert_eq!(show.id, "10716");
        assert_eq!(show.genres, vec![1, 2]);
        assert_eq!(show.seasons, 14);
    }

    #[test]
    fn test_show_summary_missing_fields_default() {
        let json = r#"{"id": "1", "title": "Bare"}"#;
        let show: ShowSummary = serde_json::from_str(json).unwrap();
        assert!(show.genres.is_empty());
        assert!(show.updated.is_empty());
        assert!(show.image.is_empty());
        assert_eq!(show.seasons, 0);
    }

    #[test]
    fn test_show_detail_missing_seasons_defaults_empty() {
        let json = r#"{"id": "1", "title": "No Seasons", "description": "d"}"#;
        let detail: ShowDetail = serde_json::from_str(json).unwrap();
        assert!(detail.seasons.is_empty());
        assert_eq!(detail.episode_count(), 0);
    }

    #[test]
    fn test_show_detail_counts_episodes_across_seasons() {
        let json = r#"{
            "id": "1",
            "title": "Show",
            "seasons": [
                {"season": 1, "title": "S1", "episodes": [
                    {"episode": 1, "title": "E1", "file": "https://example.com/1.mp3"},
                    {"episode": 2, "title": "E2"}
                ]},
                {"season": 2, "title": "S2", "episodes": [
                    {"episode": 1, "title": "E1"}
                ]}
            ]
        }"#;
        let detail: ShowDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.seasons.len(), 2);
        assert_eq!(detail.episode_count(), 3);
        assert_eq!(detail.seasons[0].episodes[0].file, "https://example.com/1.mp3");
        assert!(detail.seasons[0].episodes[1].file.is_empty());
    }

    #[test]
    fn test_parse_updated_valid() {
        let ts = parse_updated("2022-11-03T07:00:00.000Z");
        assert_eq!(ts.timestamp(), 1667458800);
    }

    #[test]
    fn test_parse_updated_invalid_falls_back_to_epoch() {
        assert_eq!(parse_updated("not a date"), DateTime::UNIX_EPOCH);
        assert_eq!(parse_updated(""), DateTime::UNIX_EPOCH);
    }
}
