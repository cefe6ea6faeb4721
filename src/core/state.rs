//! # Application State
//!
//! Core business state for Lectern. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── resource: Arc<dyn BibleResource>  // loaded text
//! ├── navigator: Navigator              // current verse + cache
//! ├── view_mode: ContextViewMode        // how much context to show
//! ├── verses_before / verses_after      // window size for context mode
//! └── status_message: String            // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::core::display::{
    ContextViewMode, DEFAULT_VERSES_AFTER, DEFAULT_VERSES_BEFORE, DisplayVerse,
    collect_display_verses,
};
use crate::core::navigation::Navigator;
use crate::core::verse_key::VerseKey;
use crate::resource::BibleResource;

pub struct App {
    pub resource: Arc<dyn BibleResource>,
    pub navigator: Navigator,
    pub view_mode: ContextViewMode,
    pub verses_before: u16,
    pub verses_after: u16,
    pub status_message: String,
}

impl App {
    pub fn new(
        resource: Arc<dyn BibleResource>,
        start: VerseKey,
        view_mode: ContextViewMode,
    ) -> Self {
        Self {
            resource,
            navigator: Navigator::new(start),
            view_mode,
            verses_before: DEFAULT_VERSES_BEFORE,
            verses_after: DEFAULT_VERSES_AFTER,
            status_message: String::from("Welcome to Lectern!"),
        }
    }

    /// The verses to render for the current position and view mode.
    pub fn display_verses(&mut self) -> Vec<DisplayVerse> {
        let resource = self.resource.clone();
        collect_display_verses(
            &mut self.navigator,
            resource.as_ref(),
            self.view_mode,
            self.verses_before,
            self.verses_after,
        )
    }

    /// The current reference as shown in the title bar ("MAT 1:1").
    pub fn current_reference(&self) -> String {
        self.navigator.current().to_string()
    }
}
