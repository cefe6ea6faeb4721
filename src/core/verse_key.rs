//! # Verse Keys
//!
//! A `VerseKey` names one location in a Bible text: book code, chapter,
//! verse, and an optional sub-verse suffix (`"JHN 3:16"`, `"GEN 1:1a"`).
//!
//! Chapter 0 and verse 0 are legitimate positions — they hold book and
//! chapter introduction material in the versification systems we read —
//! so nothing here treats zero as a sentinel.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One Bible location: (book code, chapter, verse, optional suffix).
///
/// Immutable once constructed. Two keys are equal iff all four fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseKey {
    book: String,
    chapter: u16,
    verse: u16,
    suffix: Option<char>,
}

impl VerseKey {
    /// Creates a key with no sub-verse suffix. The book code is uppercased.
    pub fn new(book: &str, chapter: u16, verse: u16) -> Self {
        Self {
            book: book.to_ascii_uppercase(),
            chapter,
            verse,
            suffix: None,
        }
    }

    /// Creates a key with a sub-verse suffix (e.g. `GEN 1:1a`).
    pub fn with_suffix(book: &str, chapter: u16, verse: u16, suffix: char) -> Self {
        Self {
            book: book.to_ascii_uppercase(),
            chapter,
            verse,
            suffix: Some(suffix),
        }
    }

    pub fn book(&self) -> &str {
        &self.book
    }

    pub fn chapter(&self) -> u16 {
        self.chapter
    }

    pub fn verse(&self) -> u16 {
        self.verse
    }

    pub fn suffix(&self) -> Option<char> {
        self.suffix
    }

    /// The string used to index this key in a verse cache.
    ///
    /// Stable across runs; distinct keys always produce distinct strings.
    pub fn hash_key(&self) -> String {
        match self.suffix {
            Some(s) => format!("{}_{}:{}{}", self.book, self.chapter, self.verse, s),
            None => format!("{}_{}:{}", self.book, self.chapter, self.verse),
        }
    }

    /// A copy of this key at a different chapter/verse within the same book.
    pub fn at(&self, chapter: u16, verse: u16) -> VerseKey {
        VerseKey {
            book: self.book.clone(),
            chapter,
            verse,
            suffix: None,
        }
    }

    /// Orders two positions within the same book by (chapter, verse, suffix).
    ///
    /// Returns `None` when the keys name different books — book order is a
    /// versification concern, not something a bare key can decide.
    pub fn cmp_in_book(&self, other: &VerseKey) -> Option<Ordering> {
        if self.book != other.book {
            return None;
        }
        Some(
            self.chapter
                .cmp(&other.chapter)
                .then(self.verse.cmp(&other.verse))
                .then(self.suffix.cmp(&other.suffix)),
        )
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)?;
        if let Some(s) = self.suffix {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Error parsing a textual reference like `"JHN 3:16"`.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseKeyError(pub String);

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid verse reference: {}", self.0)
    }
}

impl std::error::Error for ParseKeyError {}

impl FromStr for VerseKey {
    type Err = ParseKeyError;

    /// Parses `"BBB C:V"` with an optional trailing suffix letter
    /// (`"JHN 3:16"`, `"gen 1:1a"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseKeyError(s.to_string());

        let (book, rest) = s.trim().split_once(' ').ok_or_else(err)?;
        if book.is_empty() || !book.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(err());
        }

        let (chapter_str, verse_str) = rest.trim().split_once(':').ok_or_else(err)?;
        let chapter: u16 = chapter_str.trim().parse().map_err(|_| err())?;

        let verse_str = verse_str.trim();
        let (digits, suffix) = match verse_str.chars().last() {
            Some(c) if c.is_ascii_alphabetic() => {
                (&verse_str[..verse_str.len() - c.len_utf8()], Some(c))
            }
            _ => (verse_str, None),
        };
        let verse: u16 = digits.parse().map_err(|_| err())?;

        Ok(VerseKey {
            book: book.to_ascii_uppercase(),
            chapter,
            verse,
            suffix: suffix.map(|c| c.to_ascii_lowercase()),
        })
    }
}
