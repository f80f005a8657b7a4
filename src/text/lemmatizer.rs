//! Dictionary and suffix-rule lemmatization.

use crate::error::{CleanError, Result};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// English forms the suffix rules get wrong.
static IRREGULAR: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("having", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("goes", "go"),
        ("went", "go"),
        ("gone", "go"),
        ("ran", "run"),
        ("came", "come"),
        ("got", "get"),
        ("gotten", "get"),
        ("made", "make"),
        ("took", "take"),
        ("taken", "take"),
        ("gave", "give"),
        ("given", "give"),
        ("found", "find"),
        ("thought", "think"),
        ("told", "tell"),
        ("became", "become"),
        ("felt", "feel"),
        ("brought", "bring"),
        ("began", "begin"),
        ("begun", "begin"),
        ("kept", "keep"),
        ("held", "hold"),
        ("wrote", "write"),
        ("written", "write"),
        ("stood", "stand"),
        ("heard", "hear"),
        ("meant", "mean"),
        ("met", "meet"),
        ("paid", "pay"),
        ("said", "say"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("lost", "lose"),
        ("fell", "fall"),
        ("fallen", "fall"),
        ("sent", "send"),
        ("built", "build"),
        ("understood", "understand"),
        ("knew", "know"),
        ("known", "know"),
        ("ate", "eat"),
        ("eaten", "eat"),
        ("bought", "buy"),
        ("sold", "sell"),
        ("taught", "teach"),
        ("caught", "catch"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("mice", "mouse"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("better", "well"),
        ("best", "well"),
        ("using", "use"),
        ("used", "use"),
        ("during", "during"),
        ("news", "news"),
        ("series", "series"),
        ("species", "species"),
        ("analysis", "analysis"),
        ("basis", "basis"),
        ("always", "always"),
        ("perhaps", "perhaps"),
        ("hundred", "hundred"),
    ]
    .into_iter()
    .collect()
});

/// Maps word forms to their lemma.
///
/// Lookups go through the lexicon first (built-in irregular forms plus any
/// loaded entries), then through the English suffix rules if enabled.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    lexicon: FxHashMap<String, String>,
    suffix_rules: bool,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Lemmatizer {
    /// Creates a lemmatizer seeded with the built-in irregular forms.
    pub fn new(suffix_rules: bool) -> Self {
        let lexicon = IRREGULAR
            .iter()
            .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
            .collect();
        Self {
            lexicon,
            suffix_rules,
        }
    }

    /// Creates a lemmatizer with an empty lexicon.
    pub fn empty(suffix_rules: bool) -> Self {
        Self {
            lexicon: FxHashMap::default(),
            suffix_rules,
        }
    }

    /// Adds or overrides one lexicon entry.
    pub fn insert(&mut self, form: &str, lemma: &str) {
        self.lexicon.insert(form.to_lowercase(), lemma.to_string());
    }

    /// Loads `form<TAB>lemma` entries from a file.
    pub fn load_lexicon(&mut self, path: &Path) -> Result<usize> {
        if !path.exists() {
            return Err(CleanError::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let count = self.read_lexicon(BufReader::new(file))?;
        log::debug!("Loaded {} lexicon entries from {}", count, path.display());
        Ok(count)
    }

    /// Reads `form<TAB>lemma` entries. Blank lines and `#` comments are skipped.
    pub fn read_lexicon<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut count = 0;
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (form, lemma) = trimmed.split_once('\t').ok_or_else(|| CleanError::Lexicon {
                line: i + 1,
                message: "expected form and lemma separated by a tab".to_string(),
            })?;
            let (form, lemma) = (form.trim(), lemma.trim());
            if form.is_empty() || lemma.is_empty() {
                return Err(CleanError::Lexicon {
                    line: i + 1,
                    message: "empty form or lemma".to_string(),
                });
            }

            self.insert(form, lemma);
            count += 1;
        }
        Ok(count)
    }

    /// Number of lexicon entries.
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// Checks whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Returns the lemma of `word`.
    ///
    /// A lexicon hit or a rule rewrite yields a lowercase lemma; otherwise
    /// the word is returned unchanged, casing included.
    pub fn lemmatize(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some(lemma) = self.lexicon.get(&lower) {
            return lemma.clone();
        }
        if self.suffix_rules {
            if let Some(stem) = strip_suffix(&lower) {
                return stem;
            }
        }
        word.to_string()
    }
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// English inflection rules. Returns `None` when no rule applies.
fn strip_suffix(word: &str) -> Option<String> {
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    let len = word.len();

    if len > 4 && (word.ends_with("ies") || word.ends_with("ied")) {
        return Some(format!("{}y", &word[..len - 3]));
    }
    if word.ends_with("sses") || (len > 4 && ["ches", "shes", "xes"].iter().any(|s| word.ends_with(s))) {
        return Some(word[..len - 2].to_string());
    }
    if len > 3 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return Some(word[..len - 1].to_string());
    }
    if let Some(stem) = word.strip_suffix("ing") {
        return restore_stem(stem);
    }
    if !word.ends_with("eed") {
        if let Some(stem) = word.strip_suffix("ed") {
            return restore_stem(stem);
        }
    }
    None
}

/// Undoes consonant doubling (`runn` -> `run`) and restores a silent e on
/// short consonant-vowel-consonant stems (`mak` -> `make`).
fn restore_stem(stem: &str) -> Option<String> {
    let b = stem.as_bytes();
    let n = b.len();
    if n < 3 || !b.iter().copied().any(is_vowel) {
        return None;
    }

    let last = b[n - 1];
    if last == b[n - 2] && !is_vowel(last) && !matches!(last, b'l' | b's' | b'z') {
        return Some(stem[..n - 1].to_string());
    }
    if n == 3 && !is_vowel(b[0]) && is_vowel(b[1]) && !is_vowel(last) && !matches!(last, b'w' | b'x' | b'y') {
        return Some(format!("{}e", stem));
    }
    Some(stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_plurals() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("cats"), "cat");
        assert_eq!(lemmatizer.lemmatize("gardens"), "garden");
        assert_eq!(lemmatizer.lemmatize("studies"), "study");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("classes"), "class");
        assert_eq!(lemmatizer.lemmatize("glass"), "glass");
        assert_eq!(lemmatizer.lemmatize("bonus"), "bonus");
    }

    #[test]
    fn test_verb_forms() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("running"), "run");
        assert_eq!(lemmatizer.lemmatize("making"), "make");
        assert_eq!(lemmatizer.lemmatize("reading"), "read");
        assert_eq!(lemmatizer.lemmatize("falling"), "fall");
        assert_eq!(lemmatizer.lemmatize("walked"), "walk");
        assert_eq!(lemmatizer.lemmatize("stopped"), "stop");
        assert_eq!(lemmatizer.lemmatize("liked"), "like");
        assert_eq!(lemmatizer.lemmatize("cried"), "cry");
        assert_eq!(lemmatizer.lemmatize("agreed"), "agreed");
    }

    #[test]
    fn test_rules_leave_short_stems() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("king"), "king");
        assert_eq!(lemmatizer.lemmatize("string"), "string");
        assert_eq!(lemmatizer.lemmatize("red"), "red");
        assert_eq!(lemmatizer.lemmatize("quickly"), "quickly");
    }

    #[test]
    fn test_irregular() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("went"), "go");
        assert_eq!(lemmatizer.lemmatize("Children"), "child");
        assert_eq!(lemmatizer.lemmatize("are"), "be");
    }

    #[test]
    fn test_unknown_keeps_casing() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("London"), "London");
        assert_eq!(lemmatizer.lemmatize("Gardens"), "garden");
    }

    #[test]
    fn test_rules_disabled() {
        let lemmatizer = Lemmatizer::new(false);
        assert_eq!(lemmatizer.lemmatize("cats"), "cats");
        assert_eq!(lemmatizer.lemmatize("went"), "go");
    }

    #[test]
    fn test_non_ascii_untouched() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("cafés"), "cafés");
    }

    #[test]
    fn test_read_lexicon() {
        let mut lemmatizer = Lemmatizer::empty(false);
        let data = "# comment\n\nmice\tmouse\nOxen\tox\n";
        let count = lemmatizer.read_lexicon(Cursor::new(data)).unwrap();

        assert_eq!(count, 2);
        assert_eq!(lemmatizer.len(), 2);
        assert_eq!(lemmatizer.lemmatize("oxen"), "ox");
        assert_eq!(lemmatizer.lemmatize("cats"), "cats");
    }

    #[test]
    fn test_read_lexicon_malformed() {
        let mut lemmatizer = Lemmatizer::empty(true);
        let result = lemmatizer.read_lexicon(Cursor::new("mice\tmouse\ngeese goose\n"));
        match result {
            Err(CleanError::Lexicon { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected lexicon error, got {:?}", other),
        }
    }
}
