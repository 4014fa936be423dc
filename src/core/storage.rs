//! # Persisted Filter State
//!
//! Search text, genre selector, and sort key survive across sessions as a
//! single JSON record at `~/.podview/filters.json`. Page and page size are
//! session-only and never written.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety. Every failure here is logged and absorbed: a broken filters
//! file degrades to the in-memory defaults, never to an error the caller
//! has to handle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::filters::{FilterState, GenreSelector, SortKey};

/// The one well-known storage file under the data dir.
const FILTERS_FILE: &str = "filters.json";

/// The serialized filter record. Field names match the original web
/// client's localStorage shape so the record stays recognizable.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedFilters {
    pub search: String,
    pub sort_key: String,
    pub genre: String,
}

impl Default for SavedFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_key: "date-desc".to_string(),
            genre: "all".to_string(),
        }
    }
}

impl SavedFilters {
    /// Snapshot the persistable selections of a [`FilterState`].
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            search: state.search().to_string(),
            sort_key: state.sort_key().as_str().to_string(),
            genre: state.genre().as_string(),
        }
    }

    /// Rebuild a [`FilterState`], degrading field-wise: an empty sort key
    /// falls back to the newest-first default, anything unrecognizable in
    /// the genre slot falls back to "all".
    pub fn into_state(self) -> FilterState {
        let sort_key = if self.sort_key.is_empty() {
            SortKey::DateDesc
        } else {
            SortKey::parse(&self.sort_key)
        };
        FilterState::restore(self.search, GenreSelector::parse(&self.genre), sort_key)
    }
}

/// Returns `~/.podview/`, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".podview");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Load the persisted filter record, or the defaults when there is none
/// (or it cannot be read). Never fails.
pub fn load_filters() -> SavedFilters {
    let path = match data_dir() {
        Ok(dir) => dir.join(FILTERS_FILE),
        Err(e) => {
            warn!("Could not resolve data dir, using default filters: {e}");
            return SavedFilters::default();
        }
    };
    if !path.exists() {
        debug!("No persisted filters at {}", path.display());
        return SavedFilters::default();
    }
    match fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(filters) => filters,
            Err(e) => {
                warn!("Failed to parse {}: {e}", path.display());
                SavedFilters::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {e}", path.display());
            SavedFilters::default()
        }
    }
}

/// Persist the filter record. Called at the end of every setter path;
/// failures are logged and swallowed.
pub fn save_filters(filters: &SavedFilters) {
    let path = match data_dir() {
        Ok(dir) => dir.join(FILTERS_FILE),
        Err(e) => {
            warn!("Could not resolve data dir, filters not saved: {e}");
            return;
        }
    };
    if let Err(e) = atomic_write_json(&path, filters) {
        warn!("Failed to save filters to {}: {e}", path.display());
    } else {
        debug!("Filters saved: {filters:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_parses() {
        let json = r#"{"search":"x","sortKey":"title-desc","genre":"3"}"#;
        let saved: SavedFilters = serde_json::from_str(json).unwrap();
        let state = saved.into_state();
        assert_eq!(state.search(), "x");
        assert_eq!(state.sort_key(), SortKey::TitleDesc);
        assert_eq!(state.genre(), GenreSelector::Id(3));
    }

    #[test]
    fn test_missing_fields_default_field_wise() {
        let json = r#"{"search":"only this"}"#;
        let saved: SavedFilters = serde_json::from_str(json).unwrap();
        assert_eq!(saved.search, "only this");
        assert_eq!(saved.sort_key, "date-desc");
        assert_eq!(saved.genre, "all");
    }

    #[test]
    fn test_empty_sort_key_restores_newest_first() {
        let saved = SavedFilters {
            search: String::new(),
            sort_key: String::new(),
            genre: "all".to_string(),
        };
        assert_eq!(saved.into_state().sort_key(), SortKey::DateDesc);
    }

    #[test]
    fn test_unknown_sort_key_restores_default_order() {
        let saved = SavedFilters {
            sort_key: "bogus".to_string(),
            ..SavedFilters::default()
        };
        assert_eq!(saved.into_state().sort_key(), SortKey::Default);
    }

    #[test]
    fn test_unknown_genre_restores_all() {
        let saved = SavedFilters {
            genre: "junk".to_string(),
            ..SavedFilters::default()
        };
        assert_eq!(saved.into_state().genre(), GenreSelector::All);
    }

    #[test]
    fn test_round_trip_through_state() {
        let mut state = FilterState::new();
        state.set_search("lore");
        state.set_genre(GenreSelector::Id(7));
        state.set_sort_key(SortKey::TitleAsc);

        let saved = SavedFilters::from_state(&state);
        assert_eq!(saved.search, "lore");
        assert_eq!(saved.sort_key, "title-asc");
        assert_eq!(saved.genre, "7");

        let restored = saved.into_state();
        assert_eq!(restored.search(), "lore");
        assert_eq!(restored.genre(), GenreSelector::Id(7));
        assert_eq!(restored.sort_key(), SortKey::TitleAsc);
    }

    #[test]
    fn test_serialized_record_uses_camel_case_keys() {
        let saved = SavedFilters::default();
        let json = serde_json::to_string(&saved).unwrap();
        assert!(json.contains("\"sortKey\""));
        assert!(json.contains("\"search\""));
        assert!(json.contains("\"genre\""));
    }
}
