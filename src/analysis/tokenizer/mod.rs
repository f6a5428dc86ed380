//! Tokenizers that split free-form text into raw word tokens.
//!
//! Tokenization happens on the caller's side of the suggestion engine: the
//! engine only ever sees one word at a time.
//!
//! # Examples
//!
//! ```
//! use correcto::analysis::tokenizer::Tokenizer;
//! use correcto::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod whitespace;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared alongside a
/// [`SuggestionEngine`](crate::spelling::SuggestionEngine) across threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
