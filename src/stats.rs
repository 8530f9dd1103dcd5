//! Word count and reading time for a draft.

use serde::Serialize;

/// Reading speed used when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Totals shown next to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WritingStats {
    pub words: usize,
    /// Reading time, rounded up to whole minutes.
    pub minutes: usize,
}

impl WritingStats {
    /// Measure title and body together at the default reading speed.
    pub fn measure(title: &str, content: &str) -> Self {
        Self::measure_at(title, content, DEFAULT_WORDS_PER_MINUTE)
    }

    pub fn measure_at(title: &str, content: &str, words_per_minute: usize) -> Self {
        let words = word_count(title) + word_count(content);
        Self {
            words,
            minutes: words.div_ceil(words_per_minute.max(1)),
        }
    }

    pub fn word_label(&self) -> String {
        format!("{} words", self.words)
    }

    pub fn reading_label(&self) -> String {
        format!("{} min read", self.minutes)
    }
}
