//! Levenshtein distance calculation for spelling correction.
//!
//! Distances are counted in `char`s, not bytes. Only two rows of the
//! dynamic-programming table are alive at a time.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    distance_chars(&s1_chars, &s2_chars)
}

fn distance_chars(s1: &[char], s2: &[char]) -> usize {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        for j in 1..=len2 {
            curr_row[j] = if s1[i - 1] == s2[j - 1] {
                prev_row[j - 1]
            } else {
                1 + min(min(prev_row[j], curr_row[j - 1]), prev_row[j - 1])
            };
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

fn distance_chars_threshold(s1: &[char], s2: &[char], threshold: usize) -> Option<usize> {
    let len1 = s1.len();
    let len2 = s2.len();

    // Every edit changes the length by at most one.
    if len1.abs_diff(len2) > threshold {
        return None;
    }

    if len1 == 0 || len2 == 0 {
        let distance = len1.max(len2);
        return (distance <= threshold).then_some(distance);
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            curr_row[j] = if s1[i - 1] == s2[j - 1] {
                prev_row[j - 1]
            } else {
                1 + min(min(prev_row[j], curr_row[j - 1]), prev_row[j - 1])
            };
            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Row minima never decrease, so nothing below can come back under the threshold.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

/// Distance calculator for one query against many candidates.
///
/// The query is decoded into `char`s once, which matters when the same word
/// is compared against every entry of a dictionary.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: &str) -> Self {
        LevenshteinMatcher {
            query_chars: query.chars().collect(),
        }
    }

    /// Number of `char`s in the query.
    pub fn query_len(&self) -> usize {
        self.query_chars.len()
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_chars(&self.query_chars, &candidate_chars)
    }

    /// Calculate distance with threshold for early termination.
    ///
    /// Returns `None` as soon as the distance is known to exceed `threshold`.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        // Cheap length check before decoding the candidate.
        if self.query_chars.len().abs_diff(candidate.chars().count()) > threshold {
            return None;
        }
        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_chars_threshold(&self.query_chars, &candidate_chars, threshold)
    }
}
