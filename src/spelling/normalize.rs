//! Word normalization.
//!
//! Every comparison, storage key and prefix lookup goes through [`normalize`].
//! Only ASCII letters are folded; every other character passes through
//! unchanged, so the mapping does not depend on the process locale.

/// Map a word to its canonical lowercase form.
pub fn normalize(word: &str) -> String {
    word.to_ascii_lowercase()
}

/// Whether `word` is already in normalized form.
pub fn is_normalized(word: &str) -> bool {
    !word.bytes().any(|b| b.is_ascii_uppercase())
}
