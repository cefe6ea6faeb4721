//! # Section Scanning
//!
//! Finds the structural section (heading-delimited run of verses) that
//! contains a given verse, for "previous/next section" navigation and the
//! whole-section view mode.
//!
//! There is no section index to consult: boundaries are discovered by
//! walking verse-by-verse and asking each verse's display data whether a
//! section starts there. The walk is bounded by the containing book.

use log::trace;

use crate::core::verse_data::VerseData;
use crate::core::verse_key::VerseKey;
use crate::core::versification::Versification;

/// The inclusive verse range of one section: `start <= query <= end` in
/// chapter-then-verse order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBoundary {
    pub start: VerseKey,
    pub end: VerseKey,
}

/// Locates the section containing `key`.
///
/// Scans backward from `key` to the nearest verse whose data carries a
/// section-start marker (or the book start, chapter 0 verse 0, whichever
/// comes first); scans forward to the verse just before the *next*
/// section-start marker (or the last verse of the book).
///
/// Collaborator behaviour is absorbed, never propagated: a `None` fetch
/// means "no marker here", an unknown chapter counts zero verses. The scan
/// mutates nothing except whatever caching `fetch` does internally, so
/// calling it again with any key inside the returned range gives the same
/// range back.
pub fn find_current_section<F>(
    key: &VerseKey,
    versification: &dyn Versification,
    mut fetch: F,
) -> SectionBoundary
where
    F: FnMut(&VerseKey) -> Option<VerseData>,
{
    let book = key.book();
    let num_chapters = versification.num_chapters(book);
    let verses_in = |chapter: u16| versification.num_verses(book, chapter).unwrap_or(0);

    // Backward: first marker at or before the query, clamped at (0, 0).
    let (mut c, mut v) = (key.chapter(), key.verse());
    let start = loop {
        let here = key.at(c, v);
        if fetch(&here).is_some_and(|data| data.starts_section()) {
            break here;
        }
        if v > 0 {
            v -= 1;
        } else if c > 0 {
            c -= 1;
            v = verses_in(c);
        } else {
            break here; // book start
        }
    };

    // Forward: last verse before the next marker, or the end of the book.
    let (mut c, mut v) = (key.chapter(), key.verse());
    let mut end = key.at(c, v);
    loop {
        let next = if v < verses_in(c) {
            Some((c, v + 1))
        } else if c < num_chapters {
            Some((c + 1, 0))
        } else {
            None // end of book
        };
        let Some((nc, nv)) = next else { break };
        let candidate = key.at(nc, nv);
        if fetch(&candidate).is_some_and(|data| data.starts_section()) {
            break;
        }
        (c, v) = (nc, nv);
        end = candidate;
    }

    trace!("section around {key}: {start} .. {end}");
    SectionBoundary { start, end }
}
