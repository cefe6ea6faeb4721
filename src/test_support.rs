//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;

use crate::core::verse_data::{VerseData, VerseEntry};
use crate::core::verse_key::VerseKey;
use crate::core::versification::{Versification, canon_index};
use crate::resource::BibleResource;

/// An in-memory Bible resource built verse-by-verse, for tests that don't
/// need files on disk.
///
/// `gap` registers a position in the verse counts without giving it data,
/// which is how bridged verses look to a fetch.
pub struct TestResource {
    name: String,
    books: BTreeMap<String, BTreeMap<u16, BTreeMap<u16, Option<VerseData>>>>,
    book_order: Vec<String>,
}

impl TestResource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            books: BTreeMap::new(),
            book_order: Vec::new(),
        }
    }

    fn entry(&mut self, book: &str, chapter: u16, verse: u16) -> &mut Option<VerseData> {
        if !self.books.contains_key(book) {
            self.books.insert(book.to_string(), BTreeMap::new());
            self.book_order.push(book.to_string());
            self.book_order.sort_by_key(|b| (canon_index(b), b.clone()));
        }
        self.books
            .get_mut(book)
            .expect("just inserted")
            .entry(chapter)
            .or_default()
            .entry(verse)
            .or_insert(None)
    }

    /// Adds verse text at (book, chapter, verse).
    pub fn verse(mut self, book: &str, chapter: u16, verse: u16, text: &str) -> Self {
        self.entry(book, chapter, verse)
            .get_or_insert_with(VerseData::default)
            .entries
            .push(VerseEntry::new("v", text));
        self
    }

    /// Adds a section heading on (book, chapter, verse).
    pub fn heading(mut self, book: &str, chapter: u16, verse: u16, text: &str) -> Self {
        self.entry(book, chapter, verse)
            .get_or_insert_with(VerseData::default)
            .entries
            .push(VerseEntry::new("s1", text));
        self
    }

    /// Registers a verse position with no data (a bridged/missing verse).
    pub fn gap(mut self, book: &str, chapter: u16, verse: u16) -> Self {
        self.entry(book, chapter, verse);
        self
    }

    /// Direct fetch, bypassing any cache.
    pub fn fetch(&self, key: &VerseKey) -> Option<VerseData> {
        self.books
            .get(key.book())?
            .get(&key.chapter())?
            .get(&key.verse())
            .cloned()
            .flatten()
    }
}

impl Versification for TestResource {
    fn num_chapters(&self, book: &str) -> u16 {
        self.books
            .get(book)
            .and_then(|chapters| chapters.keys().next_back().copied())
            .unwrap_or(0)
    }

    fn num_verses(&self, book: &str, chapter: u16) -> Option<u16> {
        let verses = self.books.get(book)?.get(&chapter)?;
        verses.keys().next_back().copied()
    }

    fn book_codes(&self) -> &[String] {
        &self.book_order
    }
}

impl BibleResource for TestResource {
    fn name(&self) -> &str {
        &self.name
    }

    fn context_verse_data(&self, key: &VerseKey) -> Option<VerseData> {
        self.fetch(key)
    }
}

/// A three-book resource with headings, for navigation tests.
pub fn small_canon() -> TestResource {
    TestResource::new("test-canon")
        .heading("MAT", 1, 1, "Genealogy")
        .verse("MAT", 1, 1, "The book of the genealogy")
        .verse("MAT", 1, 2, "Abraham was the father of Isaac")
        .heading("MAT", 2, 1, "The Visit of the Magi")
        .verse("MAT", 2, 1, "Now after Jesus was born")
        .verse("MAT", 2, 2, "Where is he who has been born")
        .heading("MRK", 1, 1, "John the Baptist")
        .verse("MRK", 1, 1, "The beginning of the gospel")
        .verse("MRK", 1, 2, "As it is written")
        .heading("LUK", 1, 1, "Dedication")
        .verse("LUK", 1, 1, "Inasmuch as many have undertaken")
}

/// A default App over [`small_canon`], starting at MAT 1:1.
pub fn test_app() -> crate::core::state::App {
    use std::sync::Arc;

    crate::core::state::App::new(
        Arc::new(small_canon()),
        VerseKey::new("MAT", 1, 1),
        crate::core::display::ContextViewMode::ByVerse,
    )
}
