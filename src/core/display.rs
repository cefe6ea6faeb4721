//! # Context View Modes
//!
//! How much text to show around the current verse. The viewer offers five
//! modes, cycled at runtime: a fixed window of surrounding verses, just the
//! verse itself, its whole section, its whole chapter, or its whole book.
//!
//! `collect_display_verses` turns (navigator, mode) into the ordered list
//! of verses the verse pane renders. Positions a backend has no data for
//! (bridged or missing verses) are simply skipped.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::navigation::{Navigator, position_after, position_before};
use crate::core::verse_data::VerseData;
use crate::core::verse_key::VerseKey;
use crate::resource::BibleResource;

/// Verses shown before the current one in before-and-after mode.
pub const DEFAULT_VERSES_BEFORE: u16 = 2;
/// Verses shown after the current one in before-and-after mode.
pub const DEFAULT_VERSES_AFTER: u16 = 6;

/// How much surrounding text the verse pane shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextViewMode {
    /// A fixed window of verses around the current one.
    BeforeAndAfter,
    /// The current verse only.
    #[default]
    ByVerse,
    /// The section containing the current verse.
    BySection,
    /// The chapter containing the current verse.
    ByChapter,
    /// The whole book.
    ByBook,
}

impl ContextViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ContextViewMode::BeforeAndAfter => "context",
            ContextViewMode::ByVerse => "verse",
            ContextViewMode::BySection => "section",
            ContextViewMode::ByChapter => "chapter",
            ContextViewMode::ByBook => "book",
        }
    }

    /// The next mode in the cycle (bound to a single key in the TUI).
    pub fn next(&self) -> Self {
        match self {
            ContextViewMode::BeforeAndAfter => ContextViewMode::ByVerse,
            ContextViewMode::ByVerse => ContextViewMode::BySection,
            ContextViewMode::BySection => ContextViewMode::ByChapter,
            ContextViewMode::ByChapter => ContextViewMode::ByBook,
            ContextViewMode::ByBook => ContextViewMode::BeforeAndAfter,
        }
    }
}

/// One verse ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayVerse {
    pub key: VerseKey,
    pub data: VerseData,
    pub is_current: bool,
}

/// Assembles the verses to display for the given mode, in text order.
///
/// All reads go through the navigator's cache. In by-verse mode a current
/// position without data backtracks to the start of its bridged range
/// (bridged verses store their text at the first verse of the range).
pub fn collect_display_verses(
    navigator: &mut Navigator,
    source: &dyn BibleResource,
    mode: ContextViewMode,
    before: u16,
    after: u16,
) -> Vec<DisplayVerse> {
    let current = navigator.current().clone();
    match mode {
        ContextViewMode::ByVerse => {
            let mut key = current.at(current.chapter(), current.verse());
            let mut data = navigator.cached_verse_data(source, &key);
            while data.is_none() && key.verse() > 1 {
                key = key.at(key.chapter(), key.verse() - 1);
                data = navigator.cached_verse_data(source, &key);
            }
            match data {
                Some(data) => vec![DisplayVerse {
                    key,
                    data,
                    is_current: true,
                }],
                None => Vec::new(),
            }
        }
        ContextViewMode::BeforeAndAfter => {
            let mut start = current.clone();
            for _ in 0..before {
                match position_before(source, &start) {
                    Some(prev) => start = prev,
                    None => break,
                }
            }
            let mut end = current.clone();
            for _ in 0..after {
                match position_after(source, &end) {
                    Some(next) => end = next,
                    None => break,
                }
            }
            collect_range(navigator, source, &start, &end, &current)
        }
        ContextViewMode::BySection => {
            let bounds = navigator.current_section(source);
            collect_range(navigator, source, &bounds.start, &bounds.end, &current)
        }
        ContextViewMode::ByChapter => {
            let chapter = current.chapter();
            let last = source.num_verses(current.book(), chapter).unwrap_or(0);
            let start = current.at(chapter, 0);
            let end = current.at(chapter, last);
            collect_range(navigator, source, &start, &end, &current)
        }
        ContextViewMode::ByBook => {
            let last_chapter = source.num_chapters(current.book());
            let last_verse = source
                .num_verses(current.book(), last_chapter)
                .unwrap_or(0);
            let start = current.at(0, 0);
            let end = current.at(last_chapter, last_verse);
            collect_range(navigator, source, &start, &end, &current)
        }
    }
}

/// Walks the inclusive range `start..=end`, collecting positions that have
/// data.
fn collect_range(
    navigator: &mut Navigator,
    source: &dyn BibleResource,
    start: &VerseKey,
    end: &VerseKey,
    current: &VerseKey,
) -> Vec<DisplayVerse> {
    let mut out = Vec::new();
    let mut key = start.clone();
    loop {
        if let Some(data) = navigator.cached_verse_data(source, &key) {
            let is_current =
                key.chapter() == current.chapter() && key.verse() == current.verse();
            out.push(DisplayVerse {
                key: key.clone(),
                data,
                is_current,
            });
        }
        if key.cmp_in_book(end) != Some(Ordering::Less) {
            break;
        }
        match position_after(source, &key) {
            Some(next) => key = next,
            None => break,
        }
    }
    out
}
