use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BookPicker, ReferenceBox, TitleBar, VersePane};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub fn draw_ui(frame: &mut Frame, app: &mut App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar {
        resource_name: app.resource.name().to_string(),
        reference: app.current_reference(),
        view_label: app.view_mode.label(),
    };
    title_bar.render(frame, title_area);

    let verses = app.display_verses();
    let mut pane = VersePane {
        verses: &verses,
        state: &mut tui.verse_pane,
    };
    pane.render(frame, main_area);

    draw_status_line(frame, status_area, app);

    // Overlays last, on top of everything
    if let Some(ref state) = tui.reference_box {
        ReferenceBox::new(state).render(frame, frame.area());
    }
    if let Some(ref mut state) = tui.book_picker {
        let current_book = app.navigator.current().book().to_string();
        BookPicker::new(state, &current_book).render(frame, frame.area());
    }
}

fn draw_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.navigator.cache_stats();
    let text = format!(
        " {} | ↑↓ verse  PgUp/PgDn chapter  [ ] section  < > book  v view  g goto  o books  q quit | cache {}h/{}m",
        app.status_message, stats.hits, stats.misses
    );
    frame.render_widget(
        Span::styled(text, Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(app: &mut App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_shows_title_and_current_verse() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let text = render_to_string(&mut app, &mut tui);
        assert!(text.contains("Lectern (test-canon)"));
        assert!(text.contains("MAT 1:1"));
        assert!(text.contains("The book of the genealogy"));
    }

    #[test]
    fn test_draw_ui_shows_status_message() {
        let mut app = test_app();
        app.status_message = "Could not load /no/such/dir (showing built-in sample)".to_string();
        let mut tui = TuiState::new();
        let text = render_to_string(&mut app, &mut tui);
        assert!(text.contains("Could not load /no/such/dir"));
    }

    #[test]
    fn test_draw_ui_renders_overlays() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.reference_box = Some(crate::tui::components::ReferenceBoxState::new("MAT 1:1"));
        let text = render_to_string(&mut app, &mut tui);
        assert!(text.contains("Go to"));
    }
}
