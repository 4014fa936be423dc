//! # ShowGrid Component
//!
//! Renders the visible page of the catalog as a grid of cards. Each card
//! carries the show title, season count, genre tags, and last-updated
//! date. One card is selected at a time; Enter on it opens the detail
//! view.
//!
//! The column count adapts to the area width independently of the
//! engine's page size; the grid lays out whatever page it is handed.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::filters::CatalogPage;
use crate::core::genres::genre_titles;
use crate::tui::component::Component;

/// Card footprint in terminal cells (content + borders).
const CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 5;

pub struct ShowGrid<'a> {
    pub page: &'a CatalogPage,
    /// Index of the selected card within the page.
    pub selected: usize,
}

impl<'a> ShowGrid<'a> {
    pub fn new(page: &'a CatalogPage, selected: usize) -> Self {
        Self { page, selected }
    }
}

impl Component for ShowGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.page.shows.is_empty() {
            let empty = Paragraph::new("No podcasts found.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let columns = (area.width / CARD_WIDTH).max(1);
        let selected = self.selected.min(self.page.shows.len() - 1);

        for (i, show) in self.page.shows.iter().enumerate() {
            let col = (i as u16) % columns;
            let row = (i as u16) / columns;
            let y = area.y + row * CARD_HEIGHT;
            if y + CARD_HEIGHT > area.y + area.height {
                break; // area too short for the rest of the page
            }
            let cell = Rect {
                x: area.x + col * CARD_WIDTH,
                y,
                width: CARD_WIDTH.min(area.width - col * CARD_WIDTH),
                height: CARD_HEIGHT,
            };

            let is_selected = i == selected;
            let border_style = if is_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let title_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            let inner_width = cell.width.saturating_sub(2) as usize;
            let seasons = format!(
                "{} season{}",
                show.seasons,
                if show.seasons == 1 { "" } else { "s" }
            );
            let genres = genre_titles(&show.genres).join(" · ");
            let updated = format!("Updated: {}", format_date(&show.updated));

            let lines = vec![
                Line::styled(truncate_to_width(&show.title, inner_width), title_style),
                Line::styled(
                    truncate_to_width(&format!("{seasons}  {genres}"), inner_width),
                    Style::default().fg(Color::Gray),
                ),
                Line::styled(
                    truncate_to_width(&updated, inner_width),
                    Style::default().fg(Color::DarkGray),
                ),
            ];

            let card = Paragraph::new(lines).block(Block::bordered().border_style(border_style));
            frame.render_widget(card, cell);
        }
    }
}

/// Convert an ISO date string into 'Month Day, Year' (en-US style).
/// Returns an empty string for missing or unparseable input.
fn format_date(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.with_timezone(&Utc).format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Truncate a string to fit `max_width` terminal cells, appending "..."
/// when anything was cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
