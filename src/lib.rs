//! Search keyword generation for marketplace listings.
//!
//! A listing title goes in, an ordered and deduplicated set of normalized
//! search keywords comes out: the exact phrase, n-grams, quantity
//! shorthand (`100kg`), abbreviation expansions, informal spellings and a
//! stopword-reduced phrase. Generation is pure and never fails.
//!
//! ```
//! use goodspoint_keywords::{GenerationOptions, generate_keywords};
//!
//! let keywords = generate_keywords("100 kg Maize in Masaka", &GenerationOptions::default());
//! assert!(keywords.contains("100kg maize"));
//! ```

pub mod apex;
pub mod search;

pub use apex::{config::Settings, utils::KeywordError};
pub use search::{
    delegates::{KeywordGenerator, generate_keywords},
    lexicon::{Lexicon, LexiconTable},
    preprocessing::{normalize, tokenize},
    schemas::{GenerationOptions, KeywordRecord, KeywordSet, Title},
};
