//! # TitleBar Component
//!
//! Top status bar showing the application name, how many shows the
//! catalog holds, and a transient status message.
//!
//! Stateless: all props come from `App` and the component just renders
//! what it's given, which keeps it trivial to test.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Top status bar component.
pub struct TitleBar {
    /// Total catalog size (pre-filter). None while still loading.
    pub show_count: Option<usize>,
    /// Transient status (e.g. "Filters reset").
    pub status_message: String,
}

impl TitleBar {
    pub fn new(show_count: Option<usize>, status_message: String) -> Self {
        Self {
            show_count,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut text = match self.show_count {
            Some(count) => format!("Podview ({count} shows)"),
            None => "Podview".to_string(),
        };
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }

        let line = Line::from(Span::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
