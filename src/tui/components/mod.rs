//! # TUI Components
//!
//! Each component follows the persistent state + transient wrapper pattern:
//! long-lived state (scroll offsets, input buffers, list selections) lives
//! in `TuiState`, and a thin wrapper struct borrows it each frame together
//! with whatever props the render needs.

pub mod book_picker;
pub mod reference_box;
pub mod title_bar;
pub mod verse_pane;

pub use book_picker::{BookPicker, BookPickerEvent, BookPickerState};
pub use reference_box::{ReferenceBox, ReferenceBoxState, ReferenceEvent};
pub use title_bar::TitleBar;
pub use verse_pane::{VersePane, VersePaneState};

use ratatui::layout::{Constraint, Layout, Rect};

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Compute a centered rect with a fixed size, clamped to the outer rect.
pub(crate) fn centered_fixed(width: u16, height: u16, outer: Rect) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}
