//! # USFM Backend
//!
//! Loads a directory of `.usfm` files, one book per file, keeping only the
//! markers the viewer renders: `\id` (book code), `\c` (chapter), `\v`
//! (verse, including bridged ranges like `\v 16-17`), and whatever
//! paragraph/heading markers precede each verse.
//!
//! Markers between two verses attach to the *following* verse, so a verse's
//! display data carries the heading that introduces it. A bridged range
//! stores its text at the first verse of the range; the remaining positions
//! count toward the chapter's verse total but have no data of their own.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::core::verse_data::{VerseData, VerseEntry};
use crate::core::verse_key::VerseKey;
use crate::core::versification::{Versification, canon_index};
use crate::resource::{BibleResource, ResourceError};

/// A small built-in text so the viewer starts even with no library on disk.
const SAMPLE_BOOKS: &[(&str, &str)] = &[
    (
        "JHN.usfm",
        r#"\id JHN Built-in sample
\c 1
\s1 The Word Became Flesh
\p
\v 1 In the beginning was the Word, and the Word was with God, and the Word was God.
\v 2 The same was in the beginning with God.
\v 3 All things were made by him; and without him was not any thing made that was made.
\s1 The Light Shines in the Darkness
\p
\v 4 In him was life; and the life was the light of men.
\v 5 And the light shineth in darkness; and the darkness comprehended it not.
\c 2
\s1 The Marriage at Cana
\p
\v 1 And the third day there was a marriage in Cana of Galilee; and the mother of Jesus was there:
\v 2 And both Jesus was called, and his disciples, to the marriage.
\v 3-4 And when they wanted wine, the mother of Jesus saith unto him, They have no wine. Jesus saith unto her, Woman, what have I to do with thee? mine hour is not yet come.
\v 5 His mother saith unto the servants, Whatsoever he saith unto you, do it.
"#,
    ),
    (
        "PHM.usfm",
        r#"\id PHM Built-in sample
\c 1
\s1 Greeting
\p
\v 1 Paul, a prisoner of Jesus Christ, and Timothy our brother, unto Philemon our dearly beloved, and fellowlabourer,
\v 2 And to our beloved Apphia, and Archippus our fellowsoldier, and to the church in thy house:
\s1 Thanksgiving and Prayer
\p
\v 4 I thank my God, making mention of thee always in my prayers,
\v 5 Hearing of thy love and faith, which thou hast toward the Lord Jesus, and toward all saints;
"#,
    ),
];

#[derive(Debug, Default)]
struct Chapter {
    verses: BTreeMap<u16, VerseData>,
    /// Highest verse number in the chapter, bridge ends included.
    last_verse: u16,
}

#[derive(Debug, Default)]
struct Book {
    chapters: BTreeMap<u16, Chapter>,
}

/// A library of USFM books loaded into memory.
pub struct UsfmResource {
    name: String,
    books: HashMap<String, Book>,
    book_order: Vec<String>,
}

impl UsfmResource {
    /// Loads every `.usfm` file in `dir` as one book each.
    pub fn load(dir: &Path) -> Result<Self, ResourceError> {
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("usfm"))
            })
            .collect();
        paths.sort();

        let mut resource = Self {
            name: dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "library".to_string()),
            books: HashMap::new(),
            book_order: Vec::new(),
        };

        for path in paths {
            let file = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let text = fs::read_to_string(&path)?;
            let (code, book) = parse_book(&file, &text)?;
            debug!("Loaded {} ({} chapters) from {}", code, book.chapters.len(), file);
            resource.insert(code, book);
        }

        if resource.books.is_empty() {
            return Err(ResourceError::Empty(dir.to_path_buf()));
        }
        info!(
            "Loaded {} book(s) from {}",
            resource.books.len(),
            dir.display()
        );
        Ok(resource)
    }

    /// The built-in sample text (see [`SAMPLE_BOOKS`]).
    pub fn sample() -> Result<Self, ResourceError> {
        let mut resource = Self {
            name: "sample".to_string(),
            books: HashMap::new(),
            book_order: Vec::new(),
        };
        for (file, text) in SAMPLE_BOOKS {
            let (code, book) = parse_book(file, text)?;
            resource.insert(code, book);
        }
        Ok(resource)
    }

    fn insert(&mut self, code: String, book: Book) {
        if !self.books.contains_key(&code) {
            self.book_order.push(code.clone());
            self.book_order
                .sort_by_key(|b| (canon_index(b), b.clone()));
        }
        self.books.insert(code, book);
    }
}

impl Versification for UsfmResource {
    fn num_chapters(&self, book: &str) -> u16 {
        self.books
            .get(book)
            .and_then(|b| b.chapters.keys().next_back().copied())
            .unwrap_or(0)
    }

    fn num_verses(&self, book: &str, chapter: u16) -> Option<u16> {
        let chapter = self.books.get(book)?.chapters.get(&chapter)?;
        Some(chapter.last_verse)
    }

    fn book_codes(&self) -> &[String] {
        &self.book_order
    }
}

impl BibleResource for UsfmResource {
    fn name(&self) -> &str {
        &self.name
    }

    fn context_verse_data(&self, key: &VerseKey) -> Option<VerseData> {
        self.books
            .get(key.book())?
            .chapters
            .get(&key.chapter())?
            .verses
            .get(&key.verse())
            .cloned()
    }
}

/// Parses one USFM file into (book code, book).
fn parse_book(file: &str, text: &str) -> Result<(String, Book), ResourceError> {
    let parse_err = |line: usize, message: String| ResourceError::Parse {
        file: file.to_string(),
        line,
        message,
    };

    let mut code: Option<String> = None;
    let mut book = Book::default();
    let mut chapter: u16 = 0;
    // Markers seen since the last verse; they attach to the next one.
    let mut pending: Vec<VerseEntry> = Vec::new();
    // Position of the last \v, for continuation lines.
    let mut current: Option<(u16, u16)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(rest) = line.strip_prefix('\\') else {
            // Continuation of the current verse's text.
            if let Some((c, v)) = current
                && let Some(data) = book
                    .chapters
                    .get_mut(&c)
                    .and_then(|ch| ch.verses.get_mut(&v))
                && let Some(entry) = data.entries.iter_mut().rev().find(|e| e.marker == "v")
            {
                if !entry.text.is_empty() {
                    entry.text.push(' ');
                }
                entry.text.push_str(line);
            }
            continue;
        };

        let (marker, arg) = match rest.split_once(char::is_whitespace) {
            Some((m, a)) => (m, a.trim()),
            None => (rest, ""),
        };

        match marker {
            "id" => {
                let book_code = arg
                    .split_whitespace()
                    .next()
                    .ok_or_else(|| parse_err(line_no, "\\id without a book code".to_string()))?;
                code = Some(book_code.to_ascii_uppercase());
            }
            "c" => {
                chapter = arg
                    .parse()
                    .map_err(|_| parse_err(line_no, format!("bad chapter number {arg:?}")))?;
                book.chapters.entry(chapter).or_default();
                current = None;
            }
            "v" => {
                let (num, verse_text) = match arg.split_once(char::is_whitespace) {
                    Some((n, t)) => (n, t.trim()),
                    None => (arg, ""),
                };
                let (start, end) = parse_verse_range(num)
                    .ok_or_else(|| parse_err(line_no, format!("bad verse number {num:?}")))?;
                let mut entries = std::mem::take(&mut pending);
                entries.push(VerseEntry::new("v", verse_text));
                let ch = book.chapters.entry(chapter).or_default();
                ch.verses.insert(start, VerseData::new(entries));
                ch.last_verse = ch.last_verse.max(end);
                current = Some((chapter, start));
            }
            _ => {
                pending.push(VerseEntry::new(marker, arg));
                current = None;
            }
        }
    }

    let code = code.ok_or_else(|| parse_err(1, "missing \\id marker".to_string()))?;
    Ok((code, book))
}

/// Parses `"16"` or a bridge `"16-17"`. Trailing sub-verse letters are
/// tolerated (`"6a"` reads as 6).
fn parse_verse_range(s: &str) -> Option<(u16, u16)> {
    fn one(part: &str) -> Option<u16> {
        let digits: &str = &part[..part
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(part.len())];
        let rest = &part[digits.len()..];
        if digits.is_empty() || !rest.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        digits.parse().ok()
    }

    match s.split_once('-') {
        Some((a, b)) => Some((one(a)?, one(b)?)),
        None => one(s).map(|v| (v, v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\\id TIT Test book\n\\c 1\n\\s1 Opening\n\\p\n\\v 1 Paul, a servant of God,\n\\v 2 In hope of eternal life,\n";

    #[test]
    fn test_parse_basic_book() {
        let (code, book) = parse_book("TIT.usfm", MINIMAL).unwrap();
        assert_eq!(code, "TIT");
        assert_eq!(book.chapters.len(), 1);
        let chapter = &book.chapters[&1];
        assert_eq!(chapter.last_verse, 2);
        assert_eq!(
            chapter.verses[&1].verse_text(),
            "Paul, a servant of God,"
        );
    }

    #[test]
    fn test_heading_attaches_to_following_verse() {
        let (_, book) = parse_book("TIT.usfm", MINIMAL).unwrap();
        let first = &book.chapters[&1].verses[&1];
        assert!(first.starts_section());
        assert_eq!(first.heading(), Some("Opening"));
        assert!(!book.chapters[&1].verses[&2].starts_section());
    }

    #[test]
    fn test_bridged_range_stores_at_start() {
        let text = "\\id JUD\n\\c 1\n\\v 1 one\n\\v 2-3 two and three\n\\v 4 four\n";
        let (_, book) = parse_book("JUD.usfm", text).unwrap();
        let chapter = &book.chapters[&1];
        assert_eq!(chapter.last_verse, 4);
        assert_eq!(chapter.verses[&2].verse_text(), "two and three");
        assert!(!chapter.verses.contains_key(&3));
    }

    #[test]
    fn test_continuation_line_appends_to_verse_text() {
        let text = "\\id PSA\n\\c 117\n\\v 1 O praise the LORD, all ye nations:\npraise him, all ye people.\n";
        let (_, book) = parse_book("PSA.usfm", text).unwrap();
        assert_eq!(
            book.chapters[&117].verses[&1].verse_text(),
            "O praise the LORD, all ye nations: praise him, all ye people."
        );
    }

    #[test]
    fn test_bad_verse_number_reports_file_and_line() {
        let text = "\\id GEN\n\\c 1\n\\v x light\n";
        let err = parse_book("GEN.usfm", text).unwrap_err();
        match err {
            ResourceError::Parse { file, line, .. } => {
                assert_eq!(file, "GEN.usfm");
                assert_eq!(line, 3);
            }
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let err = parse_book("X.usfm", "\\c 1\n\\v 1 text\n").unwrap_err();
        assert!(matches!(err, ResourceError::Parse { .. }));
    }

    #[test]
    fn test_verse_range_parsing() {
        assert_eq!(parse_verse_range("16"), Some((16, 16)));
        assert_eq!(parse_verse_range("16-17"), Some((16, 17)));
        assert_eq!(parse_verse_range("6a"), Some((6, 6)));
        assert_eq!(parse_verse_range(""), None);
        assert_eq!(parse_verse_range("a"), None);
    }

    #[test]
    fn test_sample_resource_loads() {
        let resource = UsfmResource::sample().unwrap();
        assert_eq!(resource.book_codes(), ["JHN", "PHM"]);
        assert_eq!(resource.num_chapters("JHN"), 2);
        assert_eq!(resource.num_verses("JHN", 2), Some(5));

        // The bridge 3-4 leaves verse 4 without data of its own.
        let bridged = resource.context_verse_data(&VerseKey::new("JHN", 2, 4));
        assert!(bridged.is_none());
        let start = resource.context_verse_data(&VerseKey::new("JHN", 2, 3));
        assert!(start.is_some());

        // PHM skips verse 3 but still counts to 5.
        assert_eq!(resource.num_verses("PHM", 1), Some(5));
        assert!(
            resource
                .context_verse_data(&VerseKey::new("PHM", 1, 3))
                .is_none()
        );
    }

    #[test]
    fn test_sample_headings_drive_sections() {
        let resource = UsfmResource::sample().unwrap();
        let first = resource
            .context_verse_data(&VerseKey::new("JHN", 1, 1))
            .unwrap();
        assert!(first.starts_section());
        assert_eq!(first.heading(), Some("The Word Became Flesh"));
        let mid = resource
            .context_verse_data(&VerseKey::new("JHN", 1, 2))
            .unwrap();
        assert!(!mid.starts_section());
    }
}
