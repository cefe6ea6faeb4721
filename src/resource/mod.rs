//! # Resource Backends
//!
//! A resource is one loaded Bible text: it answers the counting questions
//! (through [`Versification`]) and serves display data per verse. The only
//! backend today reads USFM files from a directory; the trait seam exists
//! so remote or database backends can slot in behind the same cache and
//! navigator.

use std::fmt;
use std::path::PathBuf;

use crate::core::verse_data::VerseData;
use crate::core::verse_key::VerseKey;
use crate::core::versification::Versification;

pub mod usfm;

pub use usfm::UsfmResource;

/// One loaded text.
///
/// `context_verse_data` returns `None` for verses the text has no data for
/// (bridged into a range, or simply absent). That is an answer, not an
/// error — callers cache and skip it.
pub trait BibleResource: Versification {
    /// Human-readable name for the title bar.
    fn name(&self) -> &str;

    /// Display data for one verse.
    fn context_verse_data(&self, key: &VerseKey) -> Option<VerseData>;
}

#[derive(Debug)]
pub enum ResourceError {
    Io(std::io::Error),
    Parse {
        file: String,
        line: usize,
        message: String,
    },
    /// The directory exists but holds no loadable books.
    Empty(PathBuf),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Io(e) => write!(f, "resource I/O error: {e}"),
            ResourceError::Parse { file, line, message } => {
                write!(f, "{file}:{line}: {message}")
            }
            ResourceError::Empty(dir) => {
                write!(f, "no USFM books found in {}", dir.display())
            }
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ResourceError {
    fn from(e: std::io::Error) -> Self {
        ResourceError::Io(e)
    }
}
