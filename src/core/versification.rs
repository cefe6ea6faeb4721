//! # Versification
//!
//! The counting side of a Bible text: how many chapters a book has, how
//! many verses a chapter has, and what order the books come in. The viewer
//! only ever asks these questions through the [`Versification`] trait, so
//! the answers can come from a loaded resource, a fixture, or (later) a
//! reference versification table.

/// Canonical Protestant 66-book order. Resources with books outside this
/// list sort after it, alphabetically.
pub const BOOK_ORDER: &[&str] = &[
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA", "1KI", "2KI", "1CH",
    "2CH", "EZR", "NEH", "EST", "JOB", "PSA", "PRO", "ECC", "SNG", "ISA", "JER", "LAM", "EZK",
    "DAN", "HOS", "JOL", "AMO", "OBA", "JON", "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL",
    "MAT", "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP", "COL", "1TH",
    "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS", "1PE", "2PE", "1JN", "2JN", "3JN", "JUD",
    "REV",
];

/// Position of a book code in the canonical order, for sorting. Unknown
/// codes sort after every known one.
pub fn canon_index(book: &str) -> usize {
    BOOK_ORDER
        .iter()
        .position(|b| *b == book)
        .unwrap_or(BOOK_ORDER.len())
}

/// Chapter/verse counts and book ordering for one text.
pub trait Versification {
    /// Number of chapters in `book`; 0 for an unknown book.
    fn num_chapters(&self, book: &str) -> u16;

    /// Number of verses in `book` chapter `chapter`, or `None` for an
    /// unknown chapter. Scans and navigation treat `None` as zero.
    fn num_verses(&self, book: &str, chapter: u16) -> Option<u16>;

    /// Book codes in this text's order.
    fn book_codes(&self) -> &[String];

    fn first_book(&self) -> Option<&str> {
        self.book_codes().first().map(String::as_str)
    }

    /// The book after `book`, or `None` at the end of the text.
    fn next_book(&self, book: &str) -> Option<&str> {
        let books = self.book_codes();
        let idx = books.iter().position(|b| b == book)?;
        books.get(idx + 1).map(String::as_str)
    }

    /// The book before `book`, or `None` at the start of the text.
    fn previous_book(&self, book: &str) -> Option<&str> {
        let books = self.book_codes();
        let idx = books.iter().position(|b| b == book)?;
        idx.checked_sub(1)
            .and_then(|i| books.get(i))
            .map(String::as_str)
    }
}
