//! Shared vocabulary types for transcript scoring.
//!
//! Reference words and transcripts meet on a single normalized alphabet:
//! ASCII letters, digits, and spaces, all lower-case. [`normalize`] is the
//! one place that mapping lives, so the loader, the matcher, and the plural
//! estimator cannot drift apart. [`CountEntry`] and [`MatchResult`] carry the
//! matcher's output downstream.
//!
//! ```rust
//! use fluency_types::{CountEntry, normalize};
//!
//! assert_eq!(normalize("Big, CAT!"), "big cat");
//! let entry = CountEntry {
//!     word: "cat".into(),
//!     count: 2,
//! };
//! assert_eq!(entry.count, 2);
//! ```

/// Lower-case `text` and drop every character that is not an ASCII letter,
/// digit, or space.
///
/// Total and idempotent: garbage in yields stripped garbage out, never an
/// error.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A matched reference word (normalized form) and how often it occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CountEntry {
    pub word: String,
    pub count: usize,
}

/// The matched subset of a reference list, in reference-list order.
///
/// Every entry carries `count >= 1`; words that never matched are absent.
pub type MatchResult = Vec<CountEntry>;
