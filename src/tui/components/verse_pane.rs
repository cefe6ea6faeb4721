//! # Verse Pane Component
//!
//! The main reading area. Renders the display verses for the current view
//! mode: section headings on their own styled line, each verse prefixed
//! with its chapter:verse reference and wrapped with a hanging indent so
//! continuation lines align under the text, not under the reference.
//!
//! The pane keeps the current verse in view by adjusting its scroll offset
//! during render (the current verse can move far on a section or book
//! jump).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::display::DisplayVerse;
use crate::tui::component::Component;

/// Persistent scroll state for the verse pane.
pub struct VersePaneState {
    pub scroll: u16,
}

impl VersePaneState {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }
}

/// Transient render wrapper: borrows the verses for this frame plus the
/// persistent scroll state.
pub struct VersePane<'a> {
    pub verses: &'a [DisplayVerse],
    pub state: &'a mut VersePaneState,
}

/// Wrap one verse to `width` columns with a hanging indent under `prefix`.
pub fn wrap_verse(prefix: &str, text: &str, width: usize) -> Vec<String> {
    let indent = " ".repeat(prefix.len());
    let options = textwrap::Options::new(width.max(prefix.len() + 1))
        .initial_indent(prefix)
        .subsequent_indent(&indent);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

impl Component for VersePane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(2) as usize; // borders
        let mut lines: Vec<Line> = Vec::new();
        let mut current_line: Option<u16> = None;

        for verse in self.verses {
            if let Some(heading) = verse.data.heading() {
                if !lines.is_empty() {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(
                    heading.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
            }

            let style = if verse.is_current {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if verse.is_current {
                current_line = Some(lines.len() as u16);
            }

            let prefix = format!("{}:{}  ", verse.key.chapter(), verse.key.verse());
            for wrapped in wrap_verse(&prefix, &verse.data.verse_text(), width) {
                lines.push(Line::from(Span::styled(wrapped, style)));
            }
        }

        // Keep the current verse in view.
        let visible = area.height.saturating_sub(2);
        if let Some(line) = current_line
            && visible > 0
        {
            if line < self.state.scroll {
                self.state.scroll = line;
            } else if line >= self.state.scroll + visible {
                self.state.scroll = line + 1 - visible;
            }
        }
        let total = lines.len() as u16;
        self.state.scroll = self.state.scroll.min(total.saturating_sub(visible));

        let paragraph = Paragraph::new(lines)
            .block(Block::bordered().title(" Text "))
            .scroll((self.state.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::verse_data::{VerseData, VerseEntry};
    use crate::core::verse_key::VerseKey;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_wrap_verse_hanging_indent() {
        let wrapped = wrap_verse("3:16  ", "For God so loved the world that he gave", 20);
        assert!(wrapped.len() > 1);
        assert!(wrapped[0].starts_with("3:16  "));
        for continuation in &wrapped[1..] {
            assert!(continuation.starts_with("      "));
        }
    }

    #[test]
    fn test_wrap_verse_short_text_single_line() {
        let wrapped = wrap_verse("1:1  ", "Short.", 40);
        assert_eq!(wrapped, vec!["1:1  Short."]);
    }

    #[test]
    fn test_render_shows_heading_and_verse() {
        let verses = vec![DisplayVerse {
            key: VerseKey::new("JHN", 1, 1),
            data: VerseData::new(vec![
                VerseEntry::new("s1", "The Word"),
                VerseEntry::new("v", "In the beginning"),
            ]),
            is_current: true,
        }];
        let mut state = VersePaneState::new();
        let mut pane = VersePane {
            verses: &verses,
            state: &mut state,
        };

        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| pane.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("The Word"));
        assert!(text.contains("1:1  In the beginning"));
    }

    #[test]
    fn test_scroll_follows_current_verse() {
        // 30 one-line verses, current at the end, 10-row pane.
        let verses: Vec<DisplayVerse> = (1..=30)
            .map(|v| DisplayVerse {
                key: VerseKey::new("PSA", 1, v),
                data: VerseData::text_only("text"),
                is_current: v == 30,
            })
            .collect();
        let mut state = VersePaneState::new();
        {
            let mut pane = VersePane {
                verses: &verses,
                state: &mut state,
            };
            let backend = TestBackend::new(40, 10);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal.draw(|f| pane.render(f, f.area())).unwrap();
        }
        // Current verse sits on line 29; visible height is 8.
        assert_eq!(state.scroll, 22);
    }
}
