use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events. Deliberately low-level: what a key *means*
/// depends on the active screen and is decided in the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    InputChar(char),
    Backspace,
    /// Enter
    Submit,
    Escape,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    PageUp,
    PageDown,
    /// Terminal resized; carries the new width in columns.
    Resize(u16),
    /// Ctrl+C. Quits regardless of screen or input mode.
    ForceQuit,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    event::read().ok().and_then(map_event)
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => {
            // Ignore key release/repeat events from terminals that report them
            if key.kind != KeyEventKind::Press {
                return None;
            }
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                _ => None,
            }
        }
        Event::Resize(width, _height) => Some(TuiEvent::Resize(width)),
        _ => None,
    }
}
