//! # Lemmaclean - text column cleaning
//!
//! Lemmaclean reads a delimited text table and turns one or more text
//! columns into lists of content lemmas, appended as `<column>_clean`.
//!
//! ## Overview
//!
//! Every cell of a target column goes through two stages:
//!
//! 1. a [`Tagger`] splits the text into [`AnnotatedToken`]s carrying a
//!    lemma and stop-word, punctuation, whitespace and alphabetic flags;
//! 2. the [`TokenFilter`] keeps the lemmas of alphabetic, non-stop tokens
//!    at least three characters long whose lemma is not excluded.
//!
//! Any NLP backend can be plugged in by implementing [`Tagger`]; a
//! lightweight [`RuleTagger`] is included.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lemmaclean::{clean_file, Config, RuleTagger};
//!
//! let config = Config::default();
//! let tagger = RuleTagger::from_config(&config.tagger)?;
//! let table = clean_file(Path::new("reviews.csv"), &["text"], tagger, &config)?;
//!
//! for row in table.rows() {
//!     println!("{:?}", row.get("text_clean"));
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Annotated tokens, the tagger trait, stop words, lemmatization
//! - [`filter`] - Token retention predicate
//! - [`table`] - In-memory tables and delimited-file loading
//! - [`processor`] - Per-column, per-row cleaning

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod filter;
pub mod processor;
pub mod table;
pub mod text;

// Re-export commonly used types
pub use config::{Config, FailurePolicy, FilterConfig, ProcessingConfig, TableConfig, TaggerConfig};
pub use error::{CleanError, Result};
pub use filter::{FilterStats, TokenFilter};
pub use processor::{clean_file, ColumnReport, RowProcessor};
pub use table::{read_table, read_table_from, Row, Table, Value};
pub use text::{AnnotatedToken, Lemmatizer, RuleTagger, StopwordList, Tagger};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ';';

/// Default suffix of derived columns.
pub const DEFAULT_SUFFIX: &str = "_clean";
