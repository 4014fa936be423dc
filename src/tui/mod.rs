//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. All
//! state mutation goes through `core::action::update`; this loop only
//! decides which `Action` a key means on the current screen and executes
//! the `Effect`s that come back (spawning fetches and probes, persisting
//! filters).
//!
//! Background work reports back over a std mpsc channel of actions, which
//! the loop drains between draws, keeping the single-threaded, run-to-
//! completion model the rest of the core assumes.

mod component;
mod components;
mod event;
mod ui;

use std::sync::{Arc, mpsc};
use std::time::Duration;

use log::{info, warn};

use crate::api::{CatalogProvider, FfprobeProbe, HttpCatalog, MediaProbe, NoopProbe};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::filters::{GenreSelector, SortKey};
use crate::core::genres::GENRES;
use crate::core::state::{App, Screen};
use crate::core::storage::{self, SavedFilters};
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchBar, SearchEvent, SeasonViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Assumed pixel width of one terminal cell, used to map the terminal
/// width onto the engine's pixel-based page-size policy (128 columns is
/// the 1024px breakpoint).
const CELL_PX: u32 = 8;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search: SearchBar,
    /// Selected card index within the visible page.
    pub selected_card: usize,
    pub season_view: SeasonViewState,
}

impl TuiState {
    pub fn new(initial_search: String) -> Self {
        Self {
            search: SearchBar::new(initial_search),
            selected_card: 0,
            season_view: SeasonViewState::new(),
        }
    }
}

fn cells_to_px(columns: u16) -> u32 {
    columns as u32 * CELL_PX
}

/// Build the catalog provider from the resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn CatalogProvider> {
    Arc::new(HttpCatalog::new(config.api_base_url.clone()))
}

/// Build the duration probe from the resolved config.
pub fn build_probe(config: &ResolvedConfig) -> Arc<dyn MediaProbe> {
    if config.probe_durations {
        Arc::new(FfprobeProbe::new(config.ffprobe_path.clone()))
    } else {
        Arc::new(NoopProbe)
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    let probe = build_probe(&config);

    let saved = storage::load_filters();
    let mut app = App::new(saved.into_state());
    let mut tui = TuiState::new(app.filters.search().to_string());

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Page size from the starting terminal width
    let width = terminal.size().map(|s| s.width).unwrap_or(80);
    update(&mut app, Action::ViewportResized(cells_to_px(width)));

    spawn_catalog_fetch(provider.clone(), tx.clone());

    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;

        // Process first event + drain all pending events before next draw
        let first_event = poll_event_timeout(Duration::from_millis(200));
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let TuiEvent::Resize(width) = event {
                update(&mut app, Action::ViewportResized(cells_to_px(width)));
                continue;
            }
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            let action = match app.screen {
                Screen::Browse => handle_browse_event(&event, &app, &mut tui),
                Screen::Detail => handle_detail_event(&event, &app, &mut tui),
            };
            if let Some(action) = action {
                let effect = update(&mut app, action);
                run_effect(effect, &app, &provider, &probe, &tx, &mut should_quit);
            }
        }

        // Handle background task actions (fetch results, probed durations)
        while let Ok(action) = rx.try_recv() {
            if matches!(action, Action::DetailLoaded { .. }) {
                tui.season_view.reset();
            }
            let effect = update(&mut app, action);
            run_effect(effect, &app, &provider, &probe, &tx, &mut should_quit);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Translate a browse-screen event into an action, updating presentation
/// state (search editor, card selection) along the way.
fn handle_browse_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    // An open search editor captures everything first
    if tui.search.active {
        return match tui.search.handle_event(event) {
            Some(SearchEvent::Changed(text)) => {
                tui.selected_card = 0;
                Some(Action::SearchChanged(text))
            }
            Some(SearchEvent::Dismissed) | None => None,
        };
    }

    match event {
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('/') => {
            tui.search.open();
            None
        }
        TuiEvent::InputChar('g') => {
            tui.selected_card = 0;
            Some(Action::GenreSelected(cycle_genre(app.filters.genre(), 1)))
        }
        TuiEvent::InputChar('G') => {
            tui.selected_card = 0;
            Some(Action::GenreSelected(cycle_genre(app.filters.genre(), -1)))
        }
        TuiEvent::InputChar('s') => {
            tui.selected_card = 0;
            Some(Action::SortSelected(cycle_sort(app.filters.sort_key(), 1)))
        }
        TuiEvent::InputChar('S') => {
            tui.selected_card = 0;
            Some(Action::SortSelected(cycle_sort(app.filters.sort_key(), -1)))
        }
        TuiEvent::InputChar('r') => {
            tui.selected_card = 0;
            tui.search.set_text(String::new());
            Some(Action::ResetFilters)
        }
        TuiEvent::CursorLeft => {
            let page = app.visible_page();
            if page.page > 1 {
                tui.selected_card = 0;
                Some(Action::PageRequested(page.page - 1))
            } else {
                None
            }
        }
        TuiEvent::CursorRight => {
            let page = app.visible_page();
            if page.page < page.total_pages {
                tui.selected_card = 0;
                Some(Action::PageRequested(page.page + 1))
            } else {
                None
            }
        }
        TuiEvent::CursorUp => {
            tui.selected_card = tui.selected_card.saturating_sub(1);
            None
        }
        TuiEvent::CursorDown => {
            let len = app.visible_page().shows.len();
            if len > 0 {
                tui.selected_card = (tui.selected_card + 1).min(len - 1);
            }
            None
        }
        TuiEvent::Submit => {
            let page = app.visible_page();
            let show = page.shows.get(tui.selected_card.min(page.shows.len().saturating_sub(1)))?;
            tui.season_view.reset();
            Some(Action::OpenShow(show.id.clone()))
        }
        _ => None,
    }
}

/// Translate a detail-screen event into an action.
fn handle_detail_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    let season = app.detail.as_ref().map(|d| d.selected_season).unwrap_or(0);

    match event {
        TuiEvent::Escape | TuiEvent::Backspace => {
            tui.season_view.reset();
            Some(Action::CloseDetail)
        }
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::CursorLeft | TuiEvent::InputChar('[') => {
            if season > 0 {
                tui.season_view.reset();
                Some(Action::SeasonSelected(season - 1))
            } else {
                None
            }
        }
        TuiEvent::CursorRight | TuiEvent::InputChar(']') => {
            tui.season_view.reset();
            Some(Action::SeasonSelected(season + 1)) // clamped by update()
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::PageUp | TuiEvent::PageDown => {
            tui.season_view.handle_event(event);
            None
        }
        _ => None,
    }
}

/// Execute the I/O an update asked for.
fn run_effect(
    effect: Effect,
    app: &App,
    provider: &Arc<dyn CatalogProvider>,
    probe: &Arc<dyn MediaProbe>,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match effect {
        Effect::None => {}
        Effect::SaveFilters => {
            storage::save_filters(&SavedFilters::from_state(&app.filters));
        }
        Effect::SpawnDetailFetch { id, token } => {
            spawn_detail_fetch(provider.clone(), id, token, tx.clone());
        }
        Effect::ProbeEpisodes(files) => {
            spawn_probes(probe.clone(), files, tx.clone());
        }
        Effect::Quit => *should_quit = true,
    }
}

fn spawn_catalog_fetch(provider: Arc<dyn CatalogProvider>, tx: mpsc::Sender<Action>) {
    info!("Spawning catalog fetch");
    tokio::spawn(async move {
        let action = match provider.fetch_shows().await {
            Ok(shows) => Action::CatalogLoaded(shows),
            Err(e) => Action::CatalogFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver catalog fetch result: receiver dropped");
        }
    });
}

fn spawn_detail_fetch(
    provider: Arc<dyn CatalogProvider>,
    id: String,
    token: u64,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning detail fetch for show {id} (token {token})");
    tokio::spawn(async move {
        let action = match provider.fetch_show(&id).await {
            Ok(show) => Action::DetailLoaded { token, show },
            Err(e) => Action::DetailFailed { token, message: e.to_string() },
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver detail fetch result: receiver dropped");
        }
    });
}

/// One probe task per file; each reports its duration independently so
/// episodes fill in as results land.
fn spawn_probes(probe: Arc<dyn MediaProbe>, files: Vec<String>, tx: mpsc::Sender<Action>) {
    for file in files {
        let probe = probe.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let duration = probe.duration(&file).await;
            if tx.send(Action::DurationProbed { file, duration }).is_err() {
                warn!("Failed to deliver probed duration: receiver dropped");
            }
        });
    }
}

/// Step through All → each genre in reference order, wrapping at the ends.
fn cycle_genre(current: GenreSelector, step: i32) -> GenreSelector {
    let len = GENRES.len() as i32;
    let pos = match current {
        GenreSelector::All => 0,
        GenreSelector::Id(id) => GENRES
            .iter()
            .position(|g| g.id == id)
            .map(|i| i as i32 + 1)
            .unwrap_or(0),
    };
    let next = (pos + step).rem_euclid(len + 1);
    if next == 0 {
        GenreSelector::All
    } else {
        GenreSelector::Id(GENRES[(next - 1) as usize].id)
    }
}

/// Step through the sort options in menu order, wrapping at the ends.
fn cycle_sort(current: SortKey, step: i32) -> SortKey {
    let len = SortKey::ALL.len() as i32;
    let pos = SortKey::ALL
        .iter()
        .position(|k| *k == current)
        .unwrap_or(0) as i32;
    SortKey::ALL[(pos + step).rem_euclid(len) as usize]
}
