//! # Pagination Component
//!
//! One-line pagination control: previous/next affordances around
//! "Page X of Y". Hides itself entirely when only one page exists.
//! The edges dim when there is nothing further in that direction.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self { page, total_pages }
    }
}

impl Component for Pagination {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // No controls when there is only one page of results.
        if self.total_pages <= 1 {
            return;
        }

        let enabled = Style::default().fg(Color::Cyan);
        let disabled = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);

        let prev_style = if self.page == 1 { disabled } else { enabled };
        let next_style = if self.page == self.total_pages { disabled } else { enabled };

        let line = Line::from(vec![
            Span::styled("← Prev", prev_style),
            Span::raw(format!("  Page {} of {}  ", self.page, self.total_pages)),
            Span::styled("Next →", next_style),
        ]);

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
