//! Word frequency analysis over a raw comment corpus.

mod normalize;
mod stopwords;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use normalize::{normalize, tokens};
pub use stopwords::{DEFAULT_STOPWORDS, StopwordFilter};

/// Upper bound on the number of entries handed to the renderer.
pub const MAX_WORDS: usize = 50;

/// Tokens this long or shorter are never counted.
pub const MAX_IGNORED_LEN: usize = 2;

/// One word of the cloud with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub text: String,
    pub value: u32,
}

/// How the counted words are ordered before truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ranking {
    /// Highest count first, ties broken by first appearance.
    #[default]
    Frequency,
    /// The first distinct words in order of appearance, regardless of count.
    ///
    /// Numeric tokens such as `2024` keep their place in that order; they
    /// are not moved ahead of the other words.
    FirstSeen,
}

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: u32,
    first_seen: usize,
}

#[derive(Debug, Clone)]
pub struct Analyzer {
    stopwords: StopwordFilter,
    ranking: Ranking,
    limit: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            ranking: Ranking::default(),
            limit: MAX_WORDS,
        }
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_ranking(mut self, ranking: Ranking) -> Self {
        self.ranking = ranking;
        self
    }

    /// Limits above [`MAX_WORDS`] are clamped.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_WORDS);
        self
    }

    fn keeps(&self, token: &str) -> bool {
        token.len() > MAX_IGNORED_LEN && !self.stopwords.is_stopword(token)
    }

    fn count(&self, corpus: &str) -> HashMap<String, Tally> {
        let normalized = normalize(corpus);
        let mut tallies: HashMap<String, Tally> = HashMap::new();

        for token in tokens(&normalized).filter(|t| self.keeps(t)) {
            let next = tallies.len();
            tallies
                .entry(token.to_string())
                .and_modify(|t| t.count += 1)
                .or_insert(Tally {
                    count: 1,
                    first_seen: next,
                });
        }
        tallies
    }

    /// Count words in `corpus` and return at most `limit` entries ordered
    /// by the configured ranking.
    pub fn analyze(&self, corpus: &str) -> Vec<WordEntry> {
        let mut ranked: Vec<(String, Tally)> = self.count(corpus).into_iter().collect();

        match self.ranking {
            Ranking::Frequency => ranked.sort_unstable_by(|(_, a), (_, b)| {
                b.count
                    .cmp(&a.count)
                    .then_with(|| a.first_seen.cmp(&b.first_seen))
            }),
            Ranking::FirstSeen => ranked.sort_unstable_by_key(|(_, t)| t.first_seen),
        }
        ranked.truncate(self.limit);

        ranked
            .into_iter()
            .map(|(text, tally)| WordEntry {
                text,
                value: tally.count,
            })
            .collect()
    }
}

/// Analyze with the default stopwords, frequency ranking and 50-word cap.
pub fn analyze(corpus: &str) -> Vec<WordEntry> {
    Analyzer::default().analyze(corpus)
}
