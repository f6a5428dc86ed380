//! Spelling correction and suggestion system for Correcto.
//!
//! This module provides the dictionary, the prefix index, the edit-distance
//! metric and the suggestion engine that ties them together, plus a text
//! checker for whole inputs.

pub mod checker;
pub mod dictionary;
pub mod levenshtein;
pub mod normalize;
pub mod suggest;
pub mod trie;

// Re-export commonly used types
pub use checker::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use normalize::*;
pub use suggest::*;
pub use trie::*;
