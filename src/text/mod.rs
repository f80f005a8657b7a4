//! Text annotation: tokens, taggers, stop words and lemmatization.

mod lemmatizer;
mod stopwords;
mod tagger;
mod token;

pub use lemmatizer::Lemmatizer;
pub use stopwords::StopwordList;
pub use tagger::{RuleTagger, Tagger};
pub use token::AnnotatedToken;
