//! # Actions
//!
//! Everything that can happen in podview becomes an `Action`.
//! User types in the search bar? That's `Action::SearchChanged`.
//! The catalog fetch lands? That's `Action::CatalogLoaded(shows)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the adapter
//! should run (spawn a fetch, persist filters). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state
//! and the effect. The detail-fetch token guard lives here too: responses
//! carrying any token but the latest issued are dropped, so a stale fetch
//! can never overwrite a newer show.

use std::time::Duration;

use log::{debug, info};

use crate::api::ShowDetail;
use crate::api::ShowSummary;
use crate::core::filters::{GenreSelector, SortKey};
use crate::core::state::{App, DetailState, Screen};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The catalog fetch resolved.
    CatalogLoaded(Vec<ShowSummary>),
    /// The catalog fetch failed; carries the user-visible message.
    CatalogFailed(String),
    /// Search text replaced (issued per keystroke, live filtering).
    SearchChanged(String),
    GenreSelected(GenreSelector),
    SortSelected(SortKey),
    PageRequested(u32),
    /// Viewport width changed (pixels).
    ViewportResized(u32),
    /// Restore the default selections (the header-logo reset).
    ResetFilters,
    /// Open the detail view for a show id.
    OpenShow(String),
    CloseDetail,
    SeasonSelected(usize),
    DetailLoaded { token: u64, show: ShowDetail },
    DetailFailed { token: u64, message: String },
    DurationProbed { file: String, duration: Duration },
    Quit,
}

/// I/O the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Persist the current filter selections.
    SaveFilters,
    /// Fetch the detail record for `id`; responses must echo `token`.
    SpawnDetailFetch { id: String, token: u64 },
    /// Probe durations for these media files.
    ProbeEpisodes(Vec<String>),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CatalogLoaded(shows) => {
            info!("Catalog loaded: {} shows", shows.len());
            app.catalog = shows;
            app.is_loading = false;
            app.error = None;
            Effect::None
        }
        Action::CatalogFailed(message) => {
            info!("Catalog fetch failed: {message}");
            app.is_loading = false;
            app.error = Some(message);
            Effect::None
        }
        Action::SearchChanged(text) => {
            app.filters.set_search(text);
            Effect::SaveFilters
        }
        Action::GenreSelected(genre) => {
            app.filters.set_genre(genre);
            Effect::SaveFilters
        }
        Action::SortSelected(key) => {
            app.filters.set_sort_key(key);
            Effect::SaveFilters
        }
        Action::PageRequested(page) => {
            app.filters.set_page(page);
            Effect::None
        }
        Action::ViewportResized(px) => {
            app.filters.recompute_page_size(px);
            Effect::None
        }
        Action::ResetFilters => {
            app.filters.reset();
            app.status_message = "Filters reset".to_string();
            Effect::SaveFilters
        }
        Action::OpenShow(id) => {
            let token = app.next_detail_token();
            info!("Opening show {id} (token {token})");
            app.screen = Screen::Detail;
            app.detail = Some(DetailState::loading(id.clone()));
            Effect::SpawnDetailFetch { id, token }
        }
        Action::CloseDetail => {
            app.screen = Screen::Browse;
            app.detail = None;
            Effect::None
        }
        Action::SeasonSelected(index) => {
            let Some(detail) = app.detail.as_mut() else {
                return Effect::None;
            };
            let Some(show) = detail.show.as_ref() else {
                return Effect::None;
            };
            if show.seasons.is_empty() {
                return Effect::None;
            }
            detail.selected_season = index.min(show.seasons.len() - 1);
            probe_effect(unprobed_files(app))
        }
        Action::DetailLoaded { token, show } => {
            if token != app.detail_token {
                debug!("Discarding stale detail response (token {token}, latest {})", app.detail_token);
                return Effect::None;
            }
            // The detail payload has no genre ids; merge them from the
            // catalog summary with the same id.
            let genres = app
                .summary(&show.id)
                .map(|s| s.genres.clone())
                .unwrap_or_default();
            let Some(detail) = app.detail.as_mut() else {
                return Effect::None;
            };
            detail.genres = genres;
            detail.selected_season = 0;
            detail.is_loading = false;
            detail.show = Some(show);
            detail.error = None;
            probe_effect(unprobed_files(app))
        }
        Action::DetailFailed { token, message } => {
            if token != app.detail_token {
                debug!("Discarding stale detail failure (token {token}, latest {})", app.detail_token);
                return Effect::None;
            }
            if let Some(detail) = app.detail.as_mut() {
                detail.is_loading = false;
                detail.error = Some(message);
            }
            Effect::None
        }
        Action::DurationProbed { file, duration } => {
            app.durations.insert(file, duration);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Media files of the currently selected season that have not been probed
/// yet. Files the API omitted (empty URIs) are skipped.
fn unprobed_files(app: &App) -> Vec<String> {
    let Some(detail) = app.detail.as_ref() else {
        return Vec::new();
    };
    let Some(show) = detail.show.as_ref() else {
        return Vec::new();
    };
    let Some(season) = show.seasons.get(detail.selected_season) else {
        return Vec::new();
    };
    season
        .episodes
        .iter()
        .filter(|e| !e.file.is_empty() && !app.durations.contains_key(&e.file))
        .map(|e| e.file.clone())
        .collect()
}

fn probe_effect(files: Vec<String>) -> Effect {
    if files.is_empty() {
        Effect::None
    } else {
        Effect::ProbeEpisodes(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Episode, Season};
    use crate::core::filters::FilterState;

    fn test_app() -> App {
        App::new(FilterState::new())
    }

    fn summary(id: &str, genres: &[u32]) -> ShowSummary {
        ShowSummary {
            id: id.to_string(),
            title: format!("Show {id}"),
            updated: String::new(),
            genres: genres.to_vec(),
            image: String::new(),
            seasons: 1,
        }
    }

    fn detail(id: &str, seasons: usize, episodes_per_season: usize) -> ShowDetail {
        ShowDetail {
            id: id.to_string(),
            title: format!("Show {id}"),
            description: String::new(),
            updated: String::new(),
            image: String::new(),
            seasons: (1..=seasons as u32)
                .map(|n| Season {
                    season: n,
                    title: format!("Season {n}"),
                    description: String::new(),
                    image: String::new(),
                    episodes: (1..=episodes_per_season as u32)
                        .map(|e| Episode {
                            episode: e,
                            title: format!("Episode {e}"),
                            description: String::new(),
                            file: format!("https://example.com/{id}/s{n}e{e}.mp3"),
                            image: String::new(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_catalog_loaded_clears_loading_and_error() {
        let mut app = test_app();
        app.error = Some("previous".to_string());

        let effect = update(&mut app, Action::CatalogLoaded(vec![summary("1", &[])]));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(app.catalog.len(), 1);
    }

    #[test]
    fn test_catalog_failed_records_message() {
        let mut app = test_app();
        let effect = update(&mut app, Action::CatalogFailed("HTTP 500".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_filter_setters_request_persistence() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::SearchChanged("x".to_string())),
            Effect::SaveFilters
        );
        assert_eq!(
            update(&mut app, Action::GenreSelected(GenreSelector::Id(3))),
            Effect::SaveFilters
        );
        assert_eq!(
            update(&mut app, Action::SortSelected(SortKey::TitleAsc)),
            Effect::SaveFilters
        );
        assert_eq!(app.filters.search(), "x");
        assert_eq!(app.filters.genre(), GenreSelector::Id(3));
        assert_eq!(app.filters.sort_key(), SortKey::TitleAsc);
    }

    #[test]
    fn test_page_request_does_not_persist() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::PageRequested(3)), Effect::None);
    }

    #[test]
    fn test_reset_filters_restores_defaults() {
        let mut app = test_app();
        update(&mut app, Action::SearchChanged("x".to_string()));
        update(&mut app, Action::SortSelected(SortKey::TitleDesc));

        let effect = update(&mut app, Action::ResetFilters);
        assert_eq!(effect, Effect::SaveFilters);
        assert_eq!(app.filters.search(), "");
        assert_eq!(app.filters.sort_key(), SortKey::DateDesc);
        assert_eq!(app.filters.genre(), GenreSelector::All);
    }

    #[test]
    fn test_open_show_issues_fresh_token() {
        let mut app = test_app();
        let effect = update(&mut app, Action::OpenShow("42".to_string()));
        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(
            effect,
            Effect::SpawnDetailFetch { id: "42".to_string(), token: 1 }
        );
        assert!(app.detail.as_ref().unwrap().is_loading);

        let effect = update(&mut app, Action::OpenShow("43".to_string()));
        assert_eq!(
            effect,
            Effect::SpawnDetailFetch { id: "43".to_string(), token: 2 }
        );
    }

    #[test]
    fn test_stale_detail_response_is_discarded() {
        let mut app = test_app();
        update(&mut app, Action::OpenShow("42".to_string())); // token 1
        update(&mut app, Action::OpenShow("43".to_string())); // token 2

        // The superseded fetch resolves late and must not win.
        let effect = update(
            &mut app,
            Action::DetailLoaded { token: 1, show: detail("42", 1, 1) },
        );
        assert_eq!(effect, Effect::None);
        let d = app.detail.as_ref().unwrap();
        assert!(d.is_loading);
        assert!(d.show.is_none());
        assert_eq!(d.show_id, "43");
    }

    #[test]
    fn test_latest_detail_response_lands_and_probes() {
        let mut app = test_app();
        app.catalog = vec![summary("42", &[3, 4])];
        update(&mut app, Action::OpenShow("42".to_string()));

        let effect = update(
            &mut app,
            Action::DetailLoaded { token: 1, show: detail("42", 2, 2) },
        );
        let d = app.detail.as_ref().unwrap();
        assert!(!d.is_loading);
        assert_eq!(d.genres, vec![3, 4]);
        assert_eq!(d.selected_season, 0);
        match effect {
            Effect::ProbeEpisodes(files) => {
                // Only season 1's episodes are probed up front.
                assert_eq!(files.len(), 2);
                assert!(files.iter().all(|f| f.contains("s1")));
            }
            other => panic!("expected probe effect, got {other:?}"),
        }
    }

    #[test]
    fn test_stale_detail_failure_is_discarded() {
        let mut app = test_app();
        update(&mut app, Action::OpenShow("42".to_string()));
        update(&mut app, Action::OpenShow("43".to_string()));

        update(
            &mut app,
            Action::DetailFailed { token: 1, message: "HTTP 404".to_string() },
        );
        assert!(app.detail.as_ref().unwrap().error.is_none());

        update(
            &mut app,
            Action::DetailFailed { token: 2, message: "HTTP 500".to_string() },
        );
        assert_eq!(
            app.detail.as_ref().unwrap().error.as_deref(),
            Some("HTTP 500")
        );
    }

    #[test]
    fn test_season_selection_clamps_and_skips_probed_files() {
        let mut app = test_app();
        update(&mut app, Action::OpenShow("42".to_string()));
        update(
            &mut app,
            Action::DetailLoaded { token: 1, show: detail("42", 2, 2) },
        );

        // Mark one of season 2's files as already probed.
        app.durations.insert(
            "https://example.com/42/s2e1.mp3".to_string(),
            Duration::from_secs(60),
        );

        let effect = update(&mut app, Action::SeasonSelected(99));
        let d = app.detail.as_ref().unwrap();
        assert_eq!(d.selected_season, 1); // clamped to the last season
        assert_eq!(
            effect,
            Effect::ProbeEpisodes(vec!["https://example.com/42/s2e2.mp3".to_string()])
        );
    }

    #[test]
    fn test_duration_probed_caches_by_file() {
        let mut app = test_app();
        update(
            &mut app,
            Action::DurationProbed {
                file: "https://example.com/e.mp3".to_string(),
                duration: Duration::from_secs(1830),
            },
        );
        assert_eq!(
            app.durations.get("https://example.com/e.mp3"),
            Some(&Duration::from_secs(1830))
        );
    }

    #[test]
    fn test_close_detail_returns_to_browse() {
        let mut app = test_app();
        update(&mut app, Action::OpenShow("42".to_string()));
        let effect = update(&mut app, Action::CloseDetail);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.screen, Screen::Browse);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_viewport_resize_recomputes_page_size() {
        let mut app = test_app();
        update(&mut app, Action::ViewportResized(1600));
        assert_eq!(app.filters.page_size(), 12);
        update(&mut app, Action::ViewportResized(800));
        assert_eq!(app.filters.page_size(), 10);
    }
}
