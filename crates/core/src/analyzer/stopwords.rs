//! Stopword filtering
//!
//! Common English function words that carry little meaning in a word cloud.

use std::collections::HashSet;

pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "you", "that", "this", "with", "for", "have", "not", "but", "are", "was", "just",
    "like", "your", "all", "get", "can", "out", "what", "about", "who", "has", "its", "would",
    "from", "they", "one", "when", "there",
];

/// A set of lowercase words excluded from counting.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOPWORDS)
    }
}

impl StopwordFilter {
    /// Create an empty filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Extend the filter with additional words
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Expects an already lowercased token
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
