//! Spelling suggestion generation.
//!
//! [`SuggestionEngine`] merges two sources of candidates into one ranked,
//! deduplicated, capped list:
//!
//! 1. every dictionary word that has the input as a literal prefix, seeded
//!    first and without any distance requirement;
//! 2. every remaining dictionary word within the length-adaptive edit-distance
//!    tolerance, ordered by ascending distance.
//!
//! Equal distances are broken lexicographically, so results are fully
//! deterministic.

use std::fs;
use std::path::Path;
use std::time::Instant;

use ahash::AHashSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CorrectoError, Result};
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::levenshtein::LevenshteinMatcher;
use crate::spelling::normalize::normalize;
use crate::spelling::trie::PrefixIndex;

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    /// The input is a literal prefix of the suggested word.
    Prefix,
    /// The suggested word is within the edit-distance tolerance.
    EditDistance,
}

/// A single ranked suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word, normalized.
    pub word: String,
    /// Edit distance from the normalized input.
    pub distance: usize,
    /// Which stage produced the suggestion.
    pub source: SuggestionSource,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize, source: SuggestionSource) -> Self {
        Suggestion {
            word,
            distance,
            source,
        }
    }
}

/// Step function mapping a word length to the maximum accepted edit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceSteps {
    /// Longest length still treated as a short word.
    pub short_max_len: usize,
    /// Tolerance for short words.
    pub short: usize,
    /// Longest length still treated as a medium word.
    pub medium_max_len: usize,
    /// Tolerance for medium words.
    pub medium: usize,
    /// Tolerance for everything longer.
    pub long: usize,
}

impl Default for ToleranceSteps {
    fn default() -> Self {
        ToleranceSteps {
            short_max_len: 3,
            short: 1,
            medium_max_len: 5,
            medium: 2,
            long: 3,
        }
    }
}

impl ToleranceSteps {
    /// Tolerance for a word of `len` characters.
    pub fn tolerance_for(&self, len: usize) -> usize {
        if len <= self.short_max_len {
            self.short
        } else if len <= self.medium_max_len {
            self.medium
        } else {
            self.long
        }
    }

    /// Reject steps that are not monotonic in length.
    pub fn validate(&self) -> Result<()> {
        if self.short_max_len > self.medium_max_len {
            return Err(CorrectoError::invalid_config(format!(
                "short_max_len ({}) must not exceed medium_max_len ({})",
                self.short_max_len, self.medium_max_len
            )));
        }
        if self.short > self.medium || self.medium > self.long {
            return Err(CorrectoError::invalid_config(format!(
                "tolerances must not decrease with length (short={}, medium={}, long={})",
                self.short, self.medium, self.long
            )));
        }
        Ok(())
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Default number of suggestions for [`SuggestionEngine::suggest_default`].
    pub max_suggestions: usize,
    /// Length-adaptive edit-distance tolerance.
    pub tolerance: ToleranceSteps,
    /// Whether large dictionaries are scanned on the rayon thread pool.
    pub parallel_scan: bool,
    /// Minimum dictionary size before the scan goes parallel.
    pub parallel_min_words: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_suggestions: 10,
            tolerance: ToleranceSteps::default(),
            parallel_scan: true,
            parallel_min_words: 4096,
        }
    }
}

impl SuggestionConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.tolerance.validate()
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SuggestionConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

/// A scored dictionary word. Orders by distance, then by word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate<'a> {
    distance: usize,
    word: &'a str,
}

/// Size information about an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Number of unique dictionary words.
    pub words: usize,
    /// Number of nodes in the prefix index, root included.
    pub trie_nodes: usize,
}

/// Main spelling suggestion engine.
///
/// The engine is read-only once constructed and can be shared across threads
/// without locking.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    dictionary: SpellingDictionary,
    index: PrefixIndex,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the given dictionary.
    pub fn new(dictionary: SpellingDictionary) -> Self {
        Self::with_config(dictionary, SuggestionConfig::default())
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(dictionary: SpellingDictionary, config: SuggestionConfig) -> Self {
        let start = Instant::now();
        let index: PrefixIndex = dictionary.iter().collect();
        debug!(
            words = dictionary.word_count(),
            trie_nodes = index.node_count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "built prefix index"
        );

        SuggestionEngine {
            dictionary,
            index,
            config,
        }
    }

    /// Check if a word is correctly spelled.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Maximum edit distance accepted for `word`, based on its normalized length.
    pub fn adaptive_tolerance(&self, word: &str) -> usize {
        self.config
            .tolerance
            .tolerance_for(normalize(word).chars().count())
    }

    /// Get up to `max_suggestions` suggestions for a word.
    pub fn suggest(&self, word: &str, max_suggestions: usize) -> Vec<String> {
        self.suggest_detailed(word, max_suggestions)
            .into_iter()
            .map(|s| s.word)
            .collect()
    }

    /// Get suggestions using the configured default cap.
    pub fn suggest_default(&self, word: &str) -> Vec<String> {
        self.suggest(word, self.config.max_suggestions)
    }

    /// Get up to `max_suggestions` suggestions with their distance and source.
    ///
    /// Prefix matches come first in lexicographic order, followed by
    /// edit-distance matches ordered by `(distance, word)`.
    pub fn suggest_detailed(&self, word: &str, max_suggestions: usize) -> Vec<Suggestion> {
        if max_suggestions == 0 || self.dictionary.is_empty() {
            return Vec::new();
        }

        let start = Instant::now();
        let normalized = normalize(word);
        let matcher = LevenshteinMatcher::new(&normalized);
        let threshold = self
            .config
            .tolerance
            .tolerance_for(matcher.query_len());

        let mut seen: AHashSet<String> = AHashSet::new();
        let mut results = Vec::with_capacity(max_suggestions.min(self.dictionary.word_count()));

        for candidate in self.index.suggest_prefix(&normalized) {
            if results.len() >= max_suggestions {
                break;
            }
            let distance = matcher.distance(&candidate);
            seen.insert(candidate.clone());
            results.push(Suggestion::new(candidate, distance, SuggestionSource::Prefix));
        }
        let prefix_matches = results.len();

        if results.len() < max_suggestions {
            for candidate in self.scan(&matcher, threshold, &seen) {
                if results.len() >= max_suggestions {
                    break;
                }
                results.push(Suggestion::new(
                    candidate.word.to_string(),
                    candidate.distance,
                    SuggestionSource::EditDistance,
                ));
            }
        }

        debug!(
            word = %normalized,
            threshold,
            prefix_matches,
            returned = results.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "generated suggestions"
        );

        results
    }

    /// Score every dictionary word not in `seen` and keep those within `threshold`.
    fn scan<'a>(
        &'a self,
        matcher: &LevenshteinMatcher,
        threshold: usize,
        seen: &AHashSet<String>,
    ) -> Vec<Candidate<'a>> {
        let words = self.dictionary.words();

        let mut candidates: Vec<Candidate<'a>> = if self.use_parallel_scan() {
            words
                .par_iter()
                .filter_map(|word| Self::score(matcher, threshold, seen, word))
                .collect()
        } else {
            words
                .iter()
                .filter_map(|word| Self::score(matcher, threshold, seen, word))
                .collect()
        };

        // Words are unique, so (distance, word) is a total order.
        candidates.sort_unstable();
        candidates
    }

    fn score<'a>(
        matcher: &LevenshteinMatcher,
        threshold: usize,
        seen: &AHashSet<String>,
        word: &'a str,
    ) -> Option<Candidate<'a>> {
        if seen.contains(word) {
            return None;
        }
        matcher
            .distance_threshold(word, threshold)
            .map(|distance| Candidate { distance, word })
    }

    fn use_parallel_scan(&self) -> bool {
        self.config.parallel_scan && self.dictionary.word_count() >= self.config.parallel_min_words
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &SpellingDictionary {
        &self.dictionary
    }

    /// The prefix index built from the dictionary.
    pub fn prefix_index(&self) -> &PrefixIndex {
        &self.index
    }

    /// The active configuration.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Get dictionary and index statistics.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            words: self.dictionary.word_count(),
            trie_nodes: self.index.node_count(),
        }
    }
}
