//! # Reference Input Overlay
//!
//! A one-line text box for jumping to a reference ("JHN 3:16"). Opened
//! prefilled with the current position so a small edit is enough.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ReferenceBoxState` lives in `TuiState` while the overlay is open
//! - `ReferenceBox` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::components::centered_fixed;
use crate::tui::event::TuiEvent;

/// Events emitted by the reference box.
pub enum ReferenceEvent {
    /// The user submitted this text (unparsed; the caller validates).
    Goto(String),
    Dismiss,
}

/// Persistent editing state: the buffer plus a byte-indexed cursor, always
/// on a char boundary.
pub struct ReferenceBoxState {
    buffer: String,
    cursor: usize,
}

impl ReferenceBoxState {
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_string(),
            cursor: initial.len(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }
}

impl EventHandler for ReferenceBoxState {
    type Event = ReferenceEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ReferenceEvent> {
        match event {
            TuiEvent::Escape => Some(ReferenceEvent::Dismiss),
            TuiEvent::Submit => Some(ReferenceEvent::Goto(self.buffer.trim().to_string())),
            TuiEvent::InputChar(c) => {
                self.insert(*c);
                None
            }
            TuiEvent::Backspace => {
                self.backspace();
                None
            }
            TuiEvent::CursorLeft => {
                self.move_left();
                None
            }
            TuiEvent::CursorRight => {
                self.move_right();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the reference input overlay.
pub struct ReferenceBox<'a> {
    state: &'a ReferenceBoxState,
}

impl<'a> ReferenceBox<'a> {
    pub fn new(state: &'a ReferenceBoxState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_fixed(40, 3, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Go to ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Go  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));

        let input = Paragraph::new(self.state.buffer()).block(block);
        frame.render_widget(input, overlay);

        // Cursor after the padding, at the edit position.
        let cursor_x = self.state.buffer[..self.state.cursor].width() as u16;
        frame.set_cursor_position((overlay.x + 2 + cursor_x, overlay.y + 1));
    }
}
