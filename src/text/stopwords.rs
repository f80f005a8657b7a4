//! Stop-word lists.
//!
//! Per-language lists come from the `stop-words` crate; custom lists and
//! additions are supported on top of them.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A case-insensitive stop-word set.
#[derive(Debug, Clone)]
pub struct StopwordList {
    /// Stop words, lowercase.
    words: FxHashSet<String>,
}

impl Default for StopwordList {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordList {
    /// Creates the list for a language code.
    ///
    /// Unknown codes fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            words: Self::load(language),
        }
    }

    /// Creates an empty list.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Creates a list from custom words.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Adds words to the list.
    pub fn add<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Removes words from the list.
    pub fn remove<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Checks whether `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn load(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "pl" | "polish" => LANGUAGE::Polish,
            other => {
                log::warn!("No stop-word list for '{}', using English", other);
                LANGUAGE::English
            }
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}
