//! Dictionary management for spelling correction.
//!
//! A [`SpellingDictionary`] is the full normalized vocabulary: it answers
//! exact membership in O(1) and serves as the exhaustive scan space for
//! edit-distance candidates. It is also the word-source provider: it can be
//! filled from any iterator, any reader or a file on disk.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use tracing::{info, warn};

use crate::error::Result;
use crate::spelling::normalize::{is_normalized, normalize};

/// A set of unique normalized words.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    /// Set of all words for fast lookup, sharing storage with `words`
    word_set: AHashSet<Arc<str>>,
    /// Words in first-insertion order
    words: Vec<Arc<str>>,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary {
            word_set: AHashSet::new(),
            words: Vec::new(),
        }
    }

    /// Build a dictionary from raw tokens. Duplicates are absorbed.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = SpellingDictionary::new();
        for word in words {
            dictionary.add_word(word.as_ref());
        }
        dictionary
    }

    /// Add a word. Returns `true` if it was not present yet.
    ///
    /// Tokens are only case-folded: punctuation and digits are kept as-is.
    pub fn add_word(&mut self, word: &str) -> bool {
        let normalized = normalize(word);
        if self.word_set.contains(normalized.as_str()) {
            return false;
        }
        let word: Arc<str> = Arc::from(normalized);
        self.word_set.insert(Arc::clone(&word));
        self.words.push(word);
        true
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        if is_normalized(word) {
            self.word_set.contains(word)
        } else {
            self.word_set.contains(normalize(word).as_str())
        }
    }

    /// Get all words in first-insertion order.
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// Iterate over all words in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| &**word)
    }

    /// Get the total number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Read every whitespace-separated token from `reader`.
    ///
    /// A line may carry several words; blank lines are ignored. Bytes that are
    /// not valid UTF-8 become U+FFFD and only affect the token they sit in.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut dictionary = SpellingDictionary::new();
        let mut buffer = Vec::new();
        let mut line_number = 0usize;

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buffer);
            if matches!(line, Cow::Owned(_)) {
                warn!(line = line_number, "invalid UTF-8 in word list, keeping lossy tokens");
            }
            for word in line.split_whitespace() {
                dictionary.add_word(word);
            }
        }

        Ok(dictionary)
    }

    /// Load dictionary from a whitespace-separated word list.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            words = dictionary.word_count(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Load a dictionary, falling back to an empty one if the source cannot be read.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to open dictionary, starting with an empty vocabulary"
                );
                SpellingDictionary::new()
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for SpellingDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
