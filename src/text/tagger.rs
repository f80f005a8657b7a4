//! Tagger trait and the built-in rule-based tagger.

use crate::config::TaggerConfig;
use crate::error::Result;
use crate::text::{AnnotatedToken, Lemmatizer, StopwordList};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Turns raw text into annotated tokens.
///
/// Implementations must be deterministic per call and must not mutate
/// caller state. Any `Fn(&str) -> Result<Vec<AnnotatedToken>>` is a tagger.
pub trait Tagger: Send + Sync {
    /// Segments and annotates `text`.
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> Result<Vec<AnnotatedToken>> + Send + Sync,
{
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>> {
        self(text)
    }
}

/// Tagger built from Unicode word boundaries, a stop-word list and a
/// lemmatizer.
///
/// Every word-boundary segment becomes a token, so runs of whitespace and
/// punctuation marks come out as their own tokens, flagged accordingly.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    stopwords: StopwordList,
    lemmatizer: Lemmatizer,
    unicode_normalize: bool,
}

impl RuleTagger {
    /// Creates a tagger from its parts.
    pub fn new(stopwords: StopwordList, lemmatizer: Lemmatizer) -> Self {
        Self {
            stopwords,
            lemmatizer,
            unicode_normalize: true,
        }
    }

    /// Creates a tagger from configuration, loading the lexicon file if set.
    pub fn from_config(config: &TaggerConfig) -> Result<Self> {
        let mut stopwords = StopwordList::new(&config.language);
        stopwords.add(config.extra_stopwords.as_slice());

        let mut lemmatizer = Lemmatizer::new(config.suffix_rules);
        if let Some(path) = &config.lexicon {
            lemmatizer.load_lexicon(path)?;
        }

        Ok(Self {
            stopwords,
            lemmatizer,
            unicode_normalize: config.unicode_normalize,
        })
    }

    /// Creates a tagger with default configuration.
    pub fn default_config() -> Self {
        Self::new(StopwordList::default(), Lemmatizer::default())
    }

    /// Enables or disables NFC normalization of the input.
    pub fn with_unicode_normalize(mut self, enabled: bool) -> Self {
        self.unicode_normalize = enabled;
        self
    }

    /// The stop-word list in use.
    pub fn stopwords(&self) -> &StopwordList {
        &self.stopwords
    }

    fn annotate_segment(&self, segment: &str) -> AnnotatedToken {
        let is_word = segment.chars().any(char::is_alphanumeric);
        let lemma = if is_word {
            self.lemmatizer.lemmatize(segment)
        } else {
            segment.to_string()
        };
        AnnotatedToken::classify(segment, lemma, self.stopwords.contains(segment))
    }
}

impl Tagger for RuleTagger {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>> {
        let normalized;
        let text = if self.unicode_normalize {
            normalized = text.nfc().collect::<String>();
            normalized.as_str()
        } else {
            text
        };

        Ok(text
            .split_word_bounds()
            .map(|segment| self.annotate_segment(segment))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanError;

    fn tagger() -> RuleTagger {
        RuleTagger::new(StopwordList::from_list(&["the", "are", "in"]), Lemmatizer::default())
    }

    #[test]
    fn test_annotate_sentence() {
        let tokens = tagger().annotate("The cats are running quickly in gardens.").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["The", " ", "cats", " ", "are", " ", "running", " ", "quickly", " ", "in", " ", "gardens", "."]
        );

        assert!(tokens[0].is_stop);
        assert!(tokens[1].is_space);
        assert_eq!(tokens[2].lemma, "cat");
        assert_eq!(tokens[6].lemma, "run");
        assert_eq!(tokens[12].lemma, "garden");
        assert!(tokens[13].is_punct);
        assert!(!tokens[13].is_alpha);
    }

    #[test]
    fn test_stop_flag_case_insensitive() {
        let tokens = tagger().annotate("THE garden").unwrap();
        assert!(tokens[0].is_stop);
        assert!(!tokens[2].is_stop);
    }

    #[test]
    fn test_numbers_not_alpha() {
        let tokens = tagger().annotate("route 66").unwrap();
        assert!(tokens[0].is_alpha);
        assert!(!tokens[2].is_alpha);
        assert_eq!(tokens[2].lemma, "66");
    }

    #[test]
    fn test_empty_text() {
        assert!(tagger().annotate("").unwrap().is_empty());
    }

    #[test]
    fn test_nfc_normalization() {
        // "café" with a combining acute accent
        let decomposed = "cafe\u{0301}";
        let tokens = tagger().annotate(decomposed).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "café");
        assert_eq!(tokens[0].char_len(), 4);
    }

    #[test]
    fn test_from_config_extra_stopwords() {
        let config = TaggerConfig {
            extra_stopwords: vec!["garden".to_string()],
            ..TaggerConfig::default()
        };
        let tagger = RuleTagger::from_config(&config).unwrap();
        assert!(tagger.stopwords().contains("garden"));
        assert!(tagger.stopwords().contains("the"));
    }

    #[test]
    fn test_from_config_missing_lexicon() {
        let config = TaggerConfig {
            lexicon: Some("/nonexistent/lexicon.tsv".into()),
            ..TaggerConfig::default()
        };
        assert!(matches!(RuleTagger::from_config(&config), Err(CleanError::FileNotFound(_))));
    }

    #[test]
    fn test_closure_tagger() {
        let tagger = |text: &str| -> Result<Vec<AnnotatedToken>> {
            Ok(text.split(' ').map(|w| AnnotatedToken::word(w, w)).collect())
        };
        let tokens = tagger.annotate("alpha beta").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].lemma, "beta");
    }
}
