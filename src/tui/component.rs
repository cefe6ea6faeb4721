use ratatui::Frame;
use ratatui::layout::Rect;

/// Anything that can draw itself into a region of the frame.
///
/// Components take everything they need as struct fields: per-frame props
/// as plain values, long-lived state as `&mut` borrows into `TuiState`.
/// `render` takes `&mut self` so a component can adjust its presentation
/// state while drawing — the verse pane moves its scroll offset during
/// render to keep the current verse visible.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns low-level terminal events into a component's own event type.
///
/// The overlays implement this on their persistent state: while one is
/// open the event loop feeds it every `TuiEvent` and acts on whatever
/// higher-level event comes back (`Goto`, `Select`, `Dismiss`, ...).
pub trait EventHandler {
    /// The event type this component emits.
    type Event;

    /// Handle one `TuiEvent`, optionally emitting a component event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
