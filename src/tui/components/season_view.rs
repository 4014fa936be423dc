//! # SeasonView Component
//!
//! Episode browser for the detail screen: a one-line season header plus a
//! scrollable episode list. Episode entries show the ordinal, title,
//! probed duration, and a truncated description.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SeasonViewState` (scroll position) lives in `TuiState`
//! - `SeasonView` is created each frame with borrowed props

use std::collections::HashMap;
use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::ShowDetail;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Longest description shown per episode before it is cut.
const DESCRIPTION_MAX_CHARS: usize = 150;

/// Persistent scroll state for the episode list.
pub struct SeasonViewState {
    pub scroll: ScrollViewState,
}

impl SeasonViewState {
    pub fn new() -> Self {
        Self {
            scroll: ScrollViewState::default(),
        }
    }

    /// Jump back to the top (used when the season or show changes).
    pub fn reset(&mut self) {
        self.scroll = ScrollViewState::default();
    }
}

impl Default for SeasonViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SeasonViewState {
    type Event = (); // scroll is handled internally, nothing to emit

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.scroll.scroll_up(),
            TuiEvent::CursorDown => self.scroll.scroll_down(),
            TuiEvent::PageUp => self.scroll.scroll_page_up(),
            TuiEvent::PageDown => self.scroll.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the season/episode browser.
pub struct SeasonView<'a> {
    show: &'a ShowDetail,
    season_index: usize,
    durations: &'a HashMap<String, Duration>,
    state: &'a mut SeasonViewState,
}

impl<'a> SeasonView<'a> {
    pub fn new(
        show: &'a ShowDetail,
        season_index: usize,
        durations: &'a HashMap<String, Duration>,
        state: &'a mut SeasonViewState,
    ) -> Self {
        Self {
            show,
            season_index,
            durations,
            state,
        }
    }
}

impl Component for SeasonView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(season) = self.show.seasons.get(self.season_index) else {
            let empty = Paragraph::new("No seasons available for this show.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        };

        // Season header
        let header = format!(
            "Season {}/{}: {} ({} episode{})",
            season.season,
            self.show.seasons.len(),
            season.title,
            season.episodes.len(),
            if season.episodes.len() == 1 { "" } else { "s" }
        );
        let header_area = Rect { height: 1, ..area };
        frame.render_widget(
            Paragraph::new(header).style(Style::default().add_modifier(Modifier::BOLD)),
            header_area,
        );

        let list_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };
        let content_width = list_area.width.saturating_sub(1); // scrollbar gutter

        // Pre-render each episode entry and stack them in a scroll view.
        let entries: Vec<(Paragraph<'static>, u16)> = season
            .episodes
            .iter()
            .map(|episode| {
                let duration = self
                    .durations
                    .get(&episode.file)
                    .copied()
                    .unwrap_or(Duration::ZERO);

                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        format!("{:>3}. {}", episode.episode, episode.title),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", format_duration(duration)),
                        Style::default().fg(Color::Cyan),
                    ),
                ])];

                let description = truncate_chars(&episode.description, DESCRIPTION_MAX_CHARS);
                if !description.is_empty() {
                    let wrap_width = content_width.saturating_sub(5).max(20) as usize;
                    for wrapped in textwrap::wrap(&description, wrap_width) {
                        lines.push(Line::styled(
                            format!("     {wrapped}"),
                            Style::default().fg(Color::Gray),
                        ));
                    }
                }
                lines.push(Line::raw(""));

                let height = lines.len() as u16;
                (Paragraph::new(lines), height)
            })
            .collect();

        let total_height: u16 = entries.iter().map(|(_, h)| *h).sum();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for (paragraph, height) in entries {
            scroll_view.render_widget(paragraph, Rect::new(0, y, content_width, height));
            y += height;
        }

        frame.render_stateful_widget(scroll_view, list_area, &mut self.state.scroll);
    }
}

/// Format a duration as `H:MM:SS`, or `M:SS` under an hour. Unknown
/// (zero) durations render as "0:00".
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Truncate to a maximum number of characters, appending "..." when cut.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
