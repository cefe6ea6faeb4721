//! # Verse Display Data
//!
//! `VerseData` is what a resource backend hands us for one verse: an
//! ordered list of (marker, text) entries in USFM-flavoured form. The verse
//! text itself carries the `v` marker; headings and paragraph/poetry breaks
//! that precede the verse ride along as extra entries.

use serde::{Deserialize, Serialize};

/// Markers whose presence means a new section starts at this verse.
///
/// Headings only: paragraph and poetry markers shape the display but do not
/// bound section navigation.
const SECTION_START_MARKERS: &[&str] = &["s", "s1", "s2", "s3", "ms", "ms1"];

/// One marker/text pair inside a verse's display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseEntry {
    pub marker: String,
    pub text: String,
}

impl VerseEntry {
    pub fn new(marker: &str, text: &str) -> Self {
        Self {
            marker: marker.to_string(),
            text: text.to_string(),
        }
    }

    /// True for section-heading markers (`s`, `s1`, `ms1`, ...).
    pub fn is_heading(&self) -> bool {
        SECTION_START_MARKERS.contains(&self.marker.as_str())
    }
}

/// Structured display data for a single verse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseData {
    pub entries: Vec<VerseEntry>,
}

impl VerseData {
    pub fn new(entries: Vec<VerseEntry>) -> Self {
        Self { entries }
    }

    /// A bare verse-text datum with no leading markers.
    pub fn text_only(text: &str) -> Self {
        Self {
            entries: vec![VerseEntry::new("v", text)],
        }
    }

    /// The section-start predicate: does a section boundary fall on this
    /// verse? True iff any entry carries a section-heading marker.
    pub fn starts_section(&self) -> bool {
        self.entries.iter().any(VerseEntry::is_heading)
    }

    /// The concatenated verse text (entries with the `v` marker).
    pub fn verse_text(&self) -> String {
        self.entries
            .iter()
            .filter(|e| e.marker == "v")
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Heading text preceding this verse, if any.
    pub fn heading(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.is_heading())
            .map(|e| e.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_verse_does_not_start_section() {
        let data = VerseData::text_only("In the beginning");
        assert!(!data.starts_section());
    }

    #[test]
    fn test_heading_marker_starts_section() {
        let data = VerseData::new(vec![
            VerseEntry::new("s1", "The Word Became Flesh"),
            VerseEntry::new("p", ""),
            VerseEntry::new("v", "In the beginning was the Word"),
        ]);
        assert!(data.starts_section());
        assert_eq!(data.heading(), Some("The Word Became Flesh"));
    }

    #[test]
    fn test_paragraph_marker_alone_is_not_a_section() {
        let data = VerseData::new(vec![
            VerseEntry::new("p", ""),
            VerseEntry::new("v", "And God said"),
        ]);
        assert!(!data.starts_section());
    }

    #[test]
    fn test_verse_text_joins_v_entries() {
        let data = VerseData::new(vec![
            VerseEntry::new("s2", "heading"),
            VerseEntry::new("v", "first part"),
            VerseEntry::new("v", "second part"),
        ]);
        assert_eq!(data.verse_text(), "first part second part");
    }

    #[test]
    fn test_ms1_is_a_major_section_heading() {
        let data = VerseData::new(vec![
            VerseEntry::new("ms1", "BOOK ONE"),
            VerseEntry::new("v", "Blessed is the one"),
        ]);
        assert!(data.starts_section());
    }
}
