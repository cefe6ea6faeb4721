//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Dispatch
//!
//! Keys mean different things depending on what is open:
//!
//! - An overlay (reference box or book picker) captures every event while
//!   it is up; Esc dismisses it.
//! - Otherwise keys map straight to navigation actions: arrows move by
//!   verse, PageUp/PageDown by chapter, `[`/`]` by section, `<`/`>` by
//!   book. `g` opens the reference box, `o` the book picker, `v` cycles
//!   the view mode, `q` or Ctrl+C quits.
//!
//! The loop redraws after every batch of events and otherwise sleeps in
//! `poll_event_timeout`; there is nothing to animate.

mod component;
mod components;
mod event;
mod ui;

use std::time::Duration;

use log::{info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::session;
use crate::core::state::App;
use crate::core::verse_key::VerseKey;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BookPickerEvent, BookPickerState, ReferenceBoxState, ReferenceEvent, VersePaneState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub verse_pane: VersePaneState,
    // Overlays (None = hidden)
    pub reference_box: Option<ReferenceBoxState>,
    pub book_picker: Option<BookPickerState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            verse_pane: VersePaneState::new(),
            reference_box: None,
            book_picker: None,
        }
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    let mut terminal = ratatui::init();
    info!("TUI started at {}", app.current_reference());

    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|f| ui::draw_ui(f, &mut app, &mut tui))?;

        // Process the first event + drain all pending events before redrawing
        let first_event = poll_event_timeout(Duration::from_millis(250));
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs the redraw that follows anyway
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of overlays
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // Reference box captures all events while open
            if let Some(ref mut reference_box) = tui.reference_box {
                if let Some(reference_event) = reference_box.handle_event(&event) {
                    match reference_event {
                        ReferenceEvent::Goto(text) => {
                            match text.parse::<VerseKey>() {
                                Ok(key) => {
                                    apply(&mut app, Action::GotoReference(key), &mut should_quit);
                                }
                                Err(e) => {
                                    warn!("Rejected reference input: {}", e);
                                    app.status_message = e.to_string();
                                }
                            }
                            tui.reference_box = None;
                        }
                        ReferenceEvent::Dismiss => tui.reference_box = None,
                    }
                }
                continue;
            }

            // So does the book picker
            if let Some(ref mut picker) = tui.book_picker {
                if let Some(picker_event) = picker.handle_event(&event) {
                    match picker_event {
                        BookPickerEvent::Select(book) => {
                            let target = VerseKey::new(&book, 1, 1);
                            apply(&mut app, Action::GotoReference(target), &mut should_quit);
                            tui.book_picker = None;
                        }
                        BookPickerEvent::Dismiss => tui.book_picker = None,
                    }
                }
                continue;
            }

            let action = match event {
                TuiEvent::InputChar('q') => Some(Action::Quit),
                TuiEvent::InputChar('v') => Some(Action::CycleViewMode),
                TuiEvent::InputChar('[') => Some(Action::PreviousSection),
                TuiEvent::InputChar(']') => Some(Action::NextSection),
                TuiEvent::InputChar('<') => Some(Action::PreviousBook),
                TuiEvent::InputChar('>') => Some(Action::NextBook),
                TuiEvent::CursorDown | TuiEvent::CursorRight | TuiEvent::InputChar('j') => {
                    Some(Action::NextVerse)
                }
                TuiEvent::CursorUp | TuiEvent::CursorLeft | TuiEvent::InputChar('k') => {
                    Some(Action::PreviousVerse)
                }
                TuiEvent::PageDown => Some(Action::NextChapter),
                TuiEvent::PageUp => Some(Action::PreviousChapter),
                TuiEvent::InputChar('g') => {
                    tui.reference_box = Some(ReferenceBoxState::new(&app.current_reference()));
                    None
                }
                TuiEvent::InputChar('o') => {
                    tui.book_picker = Some(BookPickerState::new(
                        app.resource.book_codes().to_vec(),
                        app.navigator.current().book(),
                    ));
                    None
                }
                _ => None,
            };
            if let Some(action) = action {
                apply(&mut app, action, &mut should_quit);
            }
        }
    }

    // Save on exit so the next launch resumes here
    session::save_viewer_state(&app);

    ratatui::restore();
    Ok(())
}

fn apply(app: &mut App, action: Action, should_quit: &mut bool) {
    match update(app, action) {
        Effect::Quit => *should_quit = true,
        Effect::SaveState => session::save_viewer_state(app),
        Effect::None => {}
    }
}
