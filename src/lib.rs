//! # Correcto
//!
//! A dictionary-backed spell checker with ranked correction suggestions.
//!
//! ## Features
//!
//! - Case-insensitive lookups against a whitespace-separated word list
//! - Prefix completion through a character trie
//! - Levenshtein edit-distance ranking with length-adaptive tolerance
//! - Parallel dictionary scans for large word lists
//!
//! ```
//! use correcto::prelude::*;
//!
//! let dictionary = SpellingDictionary::from_words(["car", "cat", "cats"]);
//! let engine = SuggestionEngine::new(dictionary);
//!
//! assert!(engine.is_correct("Cat"));
//! assert_eq!(engine.suggest("cap", 10), vec!["car", "cat"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::{Token, Tokenizer, WhitespaceTokenizer};
    pub use crate::error::{CorrectoError, Result};
    pub use crate::spelling::{
        CheckReport, LevenshteinMatcher, Misspelling, PrefixIndex, SpellChecker,
        SpellingDictionary, Suggestion, SuggestionConfig, SuggestionEngine, SuggestionSource,
        ToleranceSteps, levenshtein_distance, normalize,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
