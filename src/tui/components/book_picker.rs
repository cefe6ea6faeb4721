//! # Book Picker Component
//!
//! Overlay listing the books the loaded resource actually contains, in
//! canonical order. Opened with `o`; typing a letter jumps to the first
//! book starting with it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookPickerState` lives in `TuiState` while the overlay is open
//! - `BookPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

/// Events emitted by the book picker.
pub enum BookPickerEvent {
    Select(String),
    Dismiss,
}

/// Persistent state for the book picker overlay.
pub struct BookPickerState {
    pub books: Vec<String>,
    pub selected: usize,
    pub list_state: ListState,
}

impl BookPickerState {
    /// `current` preselects the book the reader is in.
    pub fn new(books: Vec<String>, current: &str) -> Self {
        let selected = books.iter().position(|b| b == current).unwrap_or(0);
        let mut list_state = ListState::default();
        if !books.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            books,
            selected,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

impl EventHandler for BookPickerState {
    type Event = BookPickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<BookPickerEvent> {
        match event {
            TuiEvent::Escape => Some(BookPickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.books.is_empty() {
                    self.select(self.selected.saturating_sub(1));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.books.is_empty() {
                    self.select((self.selected + 1).min(self.books.len() - 1));
                }
                None
            }
            TuiEvent::InputChar(c) => {
                let letter = c.to_ascii_uppercase();
                if let Some(index) = self
                    .books
                    .iter()
                    .position(|b| b.starts_with(letter))
                {
                    self.select(index);
                }
                None
            }
            TuiEvent::Submit => self
                .books
                .get(self.selected)
                .map(|book| BookPickerEvent::Select(book.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the book picker overlay.
pub struct BookPicker<'a> {
    state: &'a mut BookPickerState,
    current_book: &'a str,
}

impl<'a> BookPicker<'a> {
    pub fn new(state: &'a mut BookPickerState, current_book: &'a str) -> Self {
        Self {
            state,
            current_book,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(24, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Books ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Open  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .books
            .iter()
            .enumerate()
            .map(|(i, book)| {
                let is_active = book == self.current_book;
                let marker = if is_active { " *" } else { "" };
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(format!("{book}{marker}")).style(style)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}
