//! Token retention predicate.
//!
//! A token survives when it is not a stop word, not punctuation, not
//! whitespace, purely alphabetic, long enough, and its lowercase lemma is
//! not in the exclusion set. Survivors contribute their lemma, original
//! casing kept, in input order.

use crate::config::FilterConfig;
use crate::text::AnnotatedToken;
use rustc_hash::FxHashSet;

/// Counts of tokens seen and kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Tokens examined.
    pub seen: usize,
    /// Tokens retained.
    pub kept: usize,
}

impl FilterStats {
    /// Adds another count to this one.
    pub fn merge(&mut self, other: FilterStats) {
        self.seen += other.seen;
        self.kept += other.kept;
    }
}

/// Decides which annotated tokens contribute a lemma.
#[derive(Debug, Clone)]
pub struct TokenFilter {
    min_token_length: usize,
    /// Lowercase excluded lemmas.
    exclusions: FxHashSet<String>,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl TokenFilter {
    /// Creates a filter with the given configuration.
    pub fn new(config: FilterConfig) -> Self {
        Self {
            min_token_length: config.min_token_length,
            exclusions: config.exclusions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Adds a lemma to the exclusion set.
    pub fn exclude(mut self, lemma: &str) -> Self {
        self.exclusions.insert(lemma.to_lowercase());
        self
    }

    /// Returns true if `token` should contribute its lemma.
    pub fn retains(&self, token: &AnnotatedToken) -> bool {
        !token.is_stop
            && !token.is_punct
            && !token.is_space
            && token.is_alpha
            && token.char_len() >= self.min_token_length
            && !self.exclusions.contains(&token.lemma.to_lowercase())
    }

    /// Lemmas of the retained tokens, in order.
    pub fn filter(&self, tokens: &[AnnotatedToken]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| self.retains(t))
            .map(|t| t.lemma.clone())
            .collect()
    }

    /// Like [`filter`](Self::filter), also returning counts.
    pub fn filter_with_stats(&self, tokens: &[AnnotatedToken]) -> (Vec<String>, FilterStats) {
        let lemmas = self.filter(tokens);
        let stats = FilterStats {
            seen: tokens.len(),
            kept: lemmas.len(),
        };
        (lemmas, stats)
    }
}
