//! # TitleBar Component
//!
//! Top status bar showing the loaded resource, the current reference, and
//! the active view mode.
//!
//! TitleBar is purely presentational — it receives all data as props and
//! has no internal state, which keeps it trivial to test. Props live as
//! struct fields rather than render() parameters so the component fits the
//! fixed `Component::render` signature.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `resource_name`: name of the loaded text (e.g. "web", "sample")
/// - `reference`: the current position (e.g. "JHN 3:16")
/// - `view_label`: active context view mode (e.g. "section")
pub struct TitleBar {
    pub resource_name: String,
    pub reference: String,
    pub view_label: &'static str,
}

impl Component for TitleBar {
    /// Render the title bar as a single line.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = format!(
            "Lectern ({}) | {} | view: {}",
            self.resource_name, self.reference, self.view_label
        );
        frame.render_widget(Span::raw(title_text), area);
    }
}
