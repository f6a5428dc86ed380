//! Text analysis for spell checking.
//!
//! Splits free-form input into raw word tokens before they are handed to the
//! suggestion engine one at a time.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::Tokenizer;
pub use tokenizer::whitespace::WhitespaceTokenizer;
