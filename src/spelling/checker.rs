//! Free-text spell checking on top of [`SuggestionEngine`].
//!
//! The engine judges one word at a time; [`SpellChecker`] tokenizes a whole
//! input, classifies every token and attaches suggestions to the misspelled
//! ones while keeping each token's original casing for display.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;
use crate::spelling::suggest::{Suggestion, SuggestionEngine};

/// A token that is not in the dictionary, with its suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Misspelling {
    /// The token as it appeared in the input.
    pub token: Token,
    /// Ranked suggestions, possibly empty.
    pub suggestions: Vec<Suggestion>,
}

impl Misspelling {
    /// Whether any suggestion was found.
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Suggested words without distance information.
    pub fn words(&self) -> Vec<&str> {
        self.suggestions.iter().map(|s| s.word.as_str()).collect()
    }
}

/// Result of checking a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Total number of tokens examined.
    pub tokens_checked: usize,
    /// Tokens found in the dictionary.
    pub correct: Vec<Token>,
    /// Tokens not found in the dictionary.
    pub misspelled: Vec<Misspelling>,
}

impl CheckReport {
    /// Whether every token was found in the dictionary.
    pub fn all_correct(&self) -> bool {
        self.misspelled.is_empty()
    }
}

/// Checks whole texts against a shared [`SuggestionEngine`].
pub struct SpellChecker {
    engine: Arc<SuggestionEngine>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl SpellChecker {
    /// Create a checker that splits text on whitespace.
    pub fn new(engine: Arc<SuggestionEngine>) -> Self {
        Self::with_tokenizer(engine, Arc::new(WhitespaceTokenizer::new()))
    }

    /// Create a checker with a custom tokenizer.
    pub fn with_tokenizer(engine: Arc<SuggestionEngine>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        SpellChecker { engine, tokenizer }
    }

    /// The engine used for lookups.
    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    /// Check `text`, collecting up to `max_suggestions` suggestions per misspelled token.
    pub fn check(&self, text: &str, max_suggestions: usize) -> Result<CheckReport> {
        let mut report = CheckReport {
            tokens_checked: 0,
            correct: Vec::new(),
            misspelled: Vec::new(),
        };

        for token in self.tokenizer.tokenize(text)? {
            report.tokens_checked += 1;
            if self.engine.is_correct(&token.text) {
                report.correct.push(token);
            } else {
                let suggestions = self.engine.suggest_detailed(&token.text, max_suggestions);
                report.misspelled.push(Misspelling { token, suggestions });
            }
        }

        debug!(
            tokenizer = self.tokenizer.name(),
            tokens = report.tokens_checked,
            misspelled = report.misspelled.len(),
            "checked text"
        );

        Ok(report)
    }
}
