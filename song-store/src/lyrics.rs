//! Verse extraction over stored lyric text.
//!
//! A verse is a paragraph: verses are separated by one blank line inside
//! the stored text. That delimiter is part of the data contract, not a
//! per-song setting.

use serde::{Deserialize, Serialize};

/// Verse separator inside stored song text.
pub const VERSE_DELIMITER: &str = "\n\n";

/// Number of verses returned when the caller does not ask for a count.
pub const DEFAULT_VERSE_COUNT: u32 = 20;
/// Upper bound on the verse count a caller may request.
pub const MAX_VERSE_COUNT: u32 = 50;

/// Window over a song's verses: a starting index and a maximum count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseWindow {
    /// Zero-based index of the first verse to return.
    pub start: u32,
    /// Maximum number of verses to return.
    pub count: u32,
}

impl VerseWindow {
    pub fn new(start: u32, count: u32) -> Self {
        Self { start, count }
    }
}

impl Default for VerseWindow {
    fn default() -> Self {
        Self {
            start: 0,
            count: DEFAULT_VERSE_COUNT,
        }
    }
}

/// Slice a window of verses out of `text`.
///
/// Returns the verses in index range `[start, min(start + count, len))`,
/// borrowed from the input in original order. A start index at or past the
/// last verse yields an empty vec, not an error.
pub fn extract_verses(text: &str, start: u32, count: u32) -> Vec<&str> {
    let verses: Vec<&str> = text.split(VERSE_DELIMITER).collect();

    let start = start as usize;
    if start >= verses.len() {
        return Vec::new();
    }

    let end = verses.len().min(start.saturating_add(count as usize));
    verses[start..end].to_vec()
}
