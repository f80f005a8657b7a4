//! Annotated tokens produced by taggers.

use serde::{Deserialize, Serialize};

/// A token with the linguistic annotations the filter relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface text as it appeared in the input.
    pub text: String,
    /// Canonical base form.
    pub lemma: String,
    /// High-frequency function word.
    pub is_stop: bool,
    /// Consists of punctuation only.
    pub is_punct: bool,
    /// Consists of whitespace only.
    pub is_space: bool,
    /// Consists of alphabetic characters only.
    pub is_alpha: bool,
}

impl AnnotatedToken {
    /// Creates a token, deriving the character-class flags from `text`.
    pub fn classify(text: impl Into<String>, lemma: impl Into<String>, is_stop: bool) -> Self {
        let text = text.into();
        let is_space = !text.is_empty() && text.chars().all(char::is_whitespace);
        let is_punct = !text.is_empty() && text.chars().all(is_punctuation);
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self {
            lemma: lemma.into(),
            text,
            is_stop,
            is_punct,
            is_space,
            is_alpha,
        }
    }

    /// An alphabetic, non-stop word.
    pub fn word(text: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self::classify(text, lemma, false)
    }

    /// Marks the token as a stop word.
    pub fn stop(mut self) -> Self {
        self.is_stop = true;
        self
    }

    /// Number of characters in the surface text.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Punctuation test covering ASCII and the common Unicode punctuation blocks.
pub(crate) fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}'
                | '\u{2010}'..='\u{2027}'
                | '\u{2030}'..='\u{205E}'
                | '\u{3001}'..='\u{3003}'
                | '\u{3008}'..='\u{3011}'
        )
}
