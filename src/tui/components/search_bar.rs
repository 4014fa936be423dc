//! # SearchBar Component
//!
//! Single-line search editor. Opened with `/`, closed with Enter or Esc
//! (the text survives closing, so reopening continues where the user left
//! off). Every edit emits `SearchEvent::Changed` so the catalog filters
//! live, per keystroke.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBar.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The search text changed (live filtering).
    Changed(String),
    /// The user closed the editor (Enter or Esc).
    Dismissed,
}

pub struct SearchBar {
    pub buffer: String,
    /// Byte offset of the cursor within `buffer`.
    cursor: usize,
    /// True while the editor captures keystrokes.
    pub active: bool,
}

impl SearchBar {
    pub fn new(initial: String) -> Self {
        let cursor = initial.len();
        Self {
            buffer: initial,
            cursor,
            active: false,
        }
    }

    /// Start capturing keystrokes, keeping any existing text.
    pub fn open(&mut self) {
        self.active = true;
        self.cursor = self.buffer.len();
    }

    /// Replace the buffer from outside (e.g. a filter reset).
    pub fn set_text(&mut self, text: String) {
        self.cursor = text.len();
        self.buffer = text;
    }

    fn prev_char_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_char_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label_style = Style::default().fg(Color::DarkGray);
        let text_style = if self.active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let display = if self.buffer.is_empty() && !self.active {
            Span::styled("/ to search", label_style)
        } else {
            Span::styled(self.buffer.clone(), text_style)
        };

        let line = Line::from(vec![Span::styled("Search: ", label_style), display]);
        frame.render_widget(line, area);

        if self.active {
            let prefix_width = "Search: ".len() as u16;
            let cursor_x = area.x + prefix_width + self.buffer[..self.cursor].chars().count() as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width), area.y));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if !self.active {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_char_boundary();
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(SearchEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.prev_char_boundary();
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.next_char_boundary();
                }
                None
            }
            TuiEvent::Submit | TuiEvent::Escape => {
                self.active = false;
                Some(SearchEvent::Dismissed)
            }
            _ => None,
        }
    }
}
