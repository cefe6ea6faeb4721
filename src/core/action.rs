//! # Actions
//!
//! Everything that can happen in Lectern becomes an `Action`.
//! User presses PageDown? That's `Action::NextChapter`.
//! User submits "JHN 3:16" in the goto box? That's `Action::GotoReference(key)`.
//!
//! The `update()` function takes the current state and an action,
//! then returns an `Effect` describing the I/O the caller should perform.
//! No side effects here. Terminal and disk I/O happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(state, action), expected)`.

use crate::core::display::ContextViewMode;
use crate::core::state::App;
use crate::core::verse_key::VerseKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NextVerse,
    PreviousVerse,
    NextChapter,
    PreviousChapter,
    NextSection,
    PreviousSection,
    NextBook,
    PreviousBook,
    GotoReference(VerseKey),
    SetViewMode(ContextViewMode),
    CycleViewMode,
    Quit,
}

/// Side effects the event loop performs after an `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Persist the viewer position so the next launch resumes here.
    SaveState,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    let resource = app.resource.clone();
    let source = resource.as_ref();
    match action {
        Action::NextVerse => {
            app.navigator.next_verse(source);
            moved(app)
        }
        Action::PreviousVerse => {
            app.navigator.previous_verse(source);
            moved(app)
        }
        Action::NextChapter => {
            app.navigator.next_chapter(source);
            moved(app)
        }
        Action::PreviousChapter => {
            app.navigator.previous_chapter(source, false);
            moved(app)
        }
        Action::NextSection => {
            app.navigator.next_section(source);
            moved(app)
        }
        Action::PreviousSection => {
            app.navigator.previous_section(source);
            moved(app)
        }
        Action::NextBook => {
            app.navigator.next_book(source);
            moved(app)
        }
        Action::PreviousBook => {
            app.navigator.previous_book(source, false);
            moved(app)
        }
        Action::GotoReference(key) => {
            if !source.book_codes().iter().any(|b| b == key.book()) {
                app.status_message = format!("Unknown book: {}", key.book());
                return Effect::None;
            }
            app.navigator.goto(key);
            moved(app)
        }
        Action::SetViewMode(mode) => {
            app.view_mode = mode;
            app.status_message = format!("View: {}", mode.label());
            Effect::SaveState
        }
        Action::CycleViewMode => {
            app.view_mode = app.view_mode.next();
            app.status_message = format!("View: {}", app.view_mode.label());
            Effect::SaveState
        }
        Action::Quit => Effect::Quit,
    }
}

/// After any move: reflect the new position in the status bar.
fn moved(app: &mut App) -> Effect {
    app.status_message = app.current_reference();
    Effect::SaveState
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_next_verse_moves_and_saves() {
        let mut app = test_app();
        let effect = update(&mut app, Action::NextVerse);
        assert_eq!(effect, Effect::SaveState);
        assert_eq!(app.current_reference(), "MAT 1:2");
        assert_eq!(app.status_message, "MAT 1:2");
    }

    #[test]
    fn test_goto_known_book() {
        let mut app = test_app();
        let effect = update(&mut app, Action::GotoReference(VerseKey::new("MRK", 1, 2)));
        assert_eq!(effect, Effect::SaveState);
        assert_eq!(app.current_reference(), "MRK 1:2");
    }

    #[test]
    fn test_goto_unknown_book_is_rejected() {
        let mut app = test_app();
        let effect = update(&mut app, Action::GotoReference(VerseKey::new("XYZ", 1, 1)));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.current_reference(), "MAT 1:1");
        assert_eq!(app.status_message, "Unknown book: XYZ");
    }

    #[test]
    fn test_cycle_view_mode_updates_status() {
        let mut app = test_app();
        let effect = update(&mut app, Action::CycleViewMode);
        assert_eq!(effect, Effect::SaveState);
        assert_eq!(app.view_mode, ContextViewMode::BySection);
        assert_eq!(app.status_message, "View: section");
    }

    #[test]
    fn test_quit_produces_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_section_navigation_through_update() {
        let mut app = test_app();
        update(&mut app, Action::NextSection);
        assert_eq!(app.current_reference(), "MAT 2:1");
        update(&mut app, Action::PreviousSection);
        assert_eq!(app.current_reference(), "MAT 1:1");
    }
}
