//! # Navigation
//!
//! The `Navigator` tracks the current verse and moves it through a text:
//! verse by verse, chapter by chapter, section by section, book by book.
//!
//! Every move clamps at the edges of the loaded text rather than failing:
//! "next verse" at the last verse of a chapter rolls into the next chapter,
//! "next chapter" at the last chapter rolls into the next book, and "next
//! book" at the end of the text stays put. Chapter 0 / verse 0 are real
//! positions (introduction material), so backward moves land there before
//! crossing a book boundary.
//!
//! The navigator owns the per-viewer verse cache: everything it (and the
//! display layer) reads goes through [`Navigator::cached_verse_data`].

use crate::core::cache::{CacheStats, VerseCache};
use crate::core::section::{SectionBoundary, find_current_section};
use crate::core::verse_data::VerseData;
use crate::core::verse_key::VerseKey;
use crate::core::versification::Versification;
use crate::resource::BibleResource;

/// The position immediately after `key` within its book, or `None` at the
/// end of the book.
pub fn position_after(versification: &dyn Versification, key: &VerseKey) -> Option<VerseKey> {
    let (c, v) = (key.chapter(), key.verse());
    let verses = versification.num_verses(key.book(), c).unwrap_or(0);
    if v < verses {
        Some(key.at(c, v + 1))
    } else if c < versification.num_chapters(key.book()) {
        Some(key.at(c + 1, 0))
    } else {
        None
    }
}

/// The position immediately before `key` within its book, or `None` at the
/// start of the book.
pub fn position_before(versification: &dyn Versification, key: &VerseKey) -> Option<VerseKey> {
    let (c, v) = (key.chapter(), key.verse());
    if v > 0 {
        Some(key.at(c, v - 1))
    } else if c > 0 {
        let verses = versification.num_verses(key.book(), c - 1).unwrap_or(0);
        Some(key.at(c - 1, verses))
    } else {
        None
    }
}

/// Current position plus the verse cache that backs it.
pub struct Navigator {
    current: VerseKey,
    cache: VerseCache,
}

impl Navigator {
    pub fn new(start: VerseKey) -> Self {
        Self {
            current: start,
            cache: VerseCache::new(),
        }
    }

    pub fn current(&self) -> &VerseKey {
        &self.current
    }

    /// Jumps straight to `key` (no bounds checking; callers validate the
    /// book first).
    pub fn goto(&mut self, key: VerseKey) {
        self.current = key;
    }

    /// Display data for `key`, served from the cache when warm.
    pub fn cached_verse_data(
        &mut self,
        source: &dyn BibleResource,
        key: &VerseKey,
    ) -> Option<VerseData> {
        self.cache.get(key, |k| source.context_verse_data(k))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// The section containing the current verse. Scan fetches go through
    /// the cache, so repeated calls while browsing one neighbourhood are
    /// cheap.
    pub fn current_section(&mut self, source: &dyn BibleResource) -> SectionBoundary {
        let cache = &mut self.cache;
        find_current_section(&self.current, source, |k| {
            cache.get(k, |k| source.context_verse_data(k))
        })
    }

    fn verses_in(&self, source: &dyn BibleResource, chapter: u16) -> u16 {
        source
            .num_verses(self.current.book(), chapter)
            .unwrap_or(0)
    }

    pub fn next_verse(&mut self, source: &dyn BibleResource) {
        let (c, v) = (self.current.chapter(), self.current.verse());
        if v < self.verses_in(source, c) {
            self.current = self.current.at(c, v + 1);
        } else {
            self.next_chapter(source);
        }
    }

    pub fn previous_verse(&mut self, source: &dyn BibleResource) {
        let (c, v) = (self.current.chapter(), self.current.verse());
        if v > 0 {
            self.current = self.current.at(c, v - 1);
        } else {
            self.previous_chapter(source, true);
        }
    }

    pub fn next_chapter(&mut self, source: &dyn BibleResource) {
        let c = self.current.chapter();
        if c < source.num_chapters(self.current.book()) {
            self.current = self.current.at(c + 1, 0);
        } else {
            self.next_book(source);
        }
    }

    /// Moves to the previous chapter; `goto_end` lands on its last verse
    /// instead of verse 0 (used when rolling backward verse by verse).
    pub fn previous_chapter(&mut self, source: &dyn BibleResource, goto_end: bool) {
        let c = self.current.chapter();
        if c > 0 {
            let v = if goto_end { self.verses_in(source, c - 1) } else { 0 };
            self.current = self.current.at(c - 1, v);
        } else {
            self.previous_book(source, goto_end);
        }
    }

    /// Moves to the start of the next book; stays put at the end of the
    /// text.
    pub fn next_book(&mut self, source: &dyn BibleResource) {
        if let Some(next) = source.next_book(self.current.book()) {
            self.current = VerseKey::new(next, 0, 0);
        }
    }

    /// Moves to the previous book: its last verse when `goto_end`, its
    /// start otherwise. At the first book, clamps to that book's start.
    pub fn previous_book(&mut self, source: &dyn BibleResource, goto_end: bool) {
        match source.previous_book(self.current.book()) {
            Some(prev) => {
                self.current = if goto_end {
                    let last_chapter = source.num_chapters(prev);
                    let last_verse = source.num_verses(prev, last_chapter).unwrap_or(0);
                    VerseKey::new(prev, last_chapter, last_verse)
                } else {
                    VerseKey::new(prev, 0, 0)
                };
            }
            None => self.current = self.current.at(0, 0),
        }
    }

    /// Jumps to the first verse after the current section; rolls into the
    /// next book when the section runs to the end of this one.
    pub fn next_section(&mut self, source: &dyn BibleResource) {
        let bounds = self.current_section(source);
        match position_after(source, &bounds.end) {
            Some(next) => self.current = next,
            None => self.next_book(source),
        }
    }

    /// Jumps to the start of the section before the current one: backs up
    /// one position from the current section's start and rescans there.
    pub fn previous_section(&mut self, source: &dyn BibleResource) {
        let bounds = self.current_section(source);
        match position_before(source, &bounds.start) {
            Some(prev) => {
                let cache = &mut self.cache;
                let prior = find_current_section(&prev, source, |k| {
                    cache.get(k, |k| source.context_verse_data(k))
                });
                self.current = prior.start;
            }
            None => self.previous_book(source, true),
        }
    }
}
