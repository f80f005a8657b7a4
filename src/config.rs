//! Configuration for lemmaclean.

use crate::error::{CleanError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Table reading configuration.
    pub table: TableConfig,

    /// Token filter configuration.
    pub filter: FilterConfig,

    /// Built-in tagger configuration.
    pub tagger: TaggerConfig,

    /// Row processing configuration.
    pub processing: ProcessingConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CleanError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if !self.table.delimiter.is_ascii() {
            return Err(CleanError::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.table.delimiter
            )));
        }
        if self.table.suffix.is_empty() {
            return Err(CleanError::Config("derived column suffix must not be empty".to_string()));
        }
        if self.tagger.language.trim().is_empty() {
            return Err(CleanError::Config("tagger language must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Table reading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Field delimiter.
    /// Default: ';'.
    pub delimiter: char,

    /// Suffix appended to a source column name to name its derived column.
    /// Default: "_clean".
    pub suffix: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            suffix: "_clean".to_string(),
        }
    }
}

impl TableConfig {
    /// Name of the derived column for `column`.
    pub fn derived_name(&self, column: &str) -> String {
        format!("{}{}", column, self.suffix)
    }
}

/// Token filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum number of characters a token's text must have.
    /// Default: 3.
    pub min_token_length: usize,

    /// Lemmas dropped regardless of their stop-word flag (case-insensitive).
    /// Default: ["and"].
    pub exclusions: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_token_length: 3,
            exclusions: vec!["and".to_string()],
        }
    }
}

/// Configuration of the built-in rule tagger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// Stop-word language code.
    /// Default: "en".
    pub language: String,

    /// Additional stop words.
    /// Default: empty.
    pub extra_stopwords: Vec<String>,

    /// Optional lexicon file with `form<TAB>lemma` lines.
    /// Default: None.
    pub lexicon: Option<PathBuf>,

    /// Apply English suffix rules to words missing from the lexicon.
    /// Default: true.
    pub suffix_rules: bool,

    /// Apply Unicode normalization (NFC) before segmenting.
    /// Default: true.
    pub unicode_normalize: bool,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
            lexicon: None,
            suffix_rules: true,
            unicode_normalize: true,
        }
    }
}

/// What to do when the tagger fails on a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop and return the error.
    #[default]
    Abort,
    /// Log a warning, store an empty token list and continue.
    Skip,
}

/// Row processing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Policy for tagger failures.
    /// Default: Abort.
    pub on_tagger_error: FailurePolicy,

    /// Annotate the rows of a column in parallel.
    /// Default: false.
    pub parallel: bool,

    /// Number of threads for parallel processing.
    /// Default: 0 (use all available cores).
    pub num_threads: usize,
}
