//! Property-based tests using proptest
//!
//! Invariants that should hold for any input:
//! - Levenshtein distance is a metric bounded by the word lengths
//! - Normalization is idempotent
//! - The prefix index returns exactly the words sharing a prefix
//! - Suggestions are capped, unique, drawn from the dictionary and ranked

use proptest::prelude::*;

use correcto::prelude::*;
use correcto::spelling::is_normalized;

fn word() -> impl Strategy<Value = String> {
    "[a-e]{1,7}"
}

fn vocabulary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..40)
}

// ============================================================================
// Distance Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// A word is at distance zero from itself and only from itself
    #[test]
    fn prop_distance_identity(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein_distance(&a, &a), 0);
        prop_assert_eq!(levenshtein_distance(&a, &b) == 0, a == b);
    }

    /// Distance does not depend on argument order
    #[test]
    fn prop_distance_symmetric(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
    }

    /// Distance satisfies the triangle inequality
    #[test]
    fn prop_distance_triangle(a in "[a-c]{0,8}", b in "[a-c]{0,8}", c in "[a-c]{0,8}") {
        let ab = levenshtein_distance(&a, &b);
        let bc = levenshtein_distance(&b, &c);
        let ac = levenshtein_distance(&a, &c);
        prop_assert!(ac <= ab + bc, "{} > {} + {}", ac, ab, bc);
    }

    /// Distance lies between the length difference and the longer length
    #[test]
    fn prop_distance_bounds(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        let la = a.chars().count();
        let lb = b.chars().count();
        let d = levenshtein_distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    /// The bounded variant agrees with the full computation
    #[test]
    fn prop_threshold_agrees(a in "[a-d]{0,10}", b in "[a-d]{0,10}", k in 0usize..6) {
        let d = levenshtein_distance(&a, &b);
        let expected = if d <= k { Some(d) } else { None };
        prop_assert_eq!(LevenshteinMatcher::new(&a).distance_threshold(&b, k), expected);
    }

    /// Normalizing twice changes nothing
    #[test]
    fn prop_normalize_idempotent(s in "\\PC{0,20}") {
        let once = normalize(&s);
        prop_assert!(is_normalized(&once));
        prop_assert_eq!(normalize(&once), once);
    }
}

// ============================================================================
// Prefix Index Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Prefix lookup returns every inserted word with the prefix, sorted, nothing else
    #[test]
    fn prop_prefix_completeness(words in vocabulary(), prefix in "[a-e]{0,3}") {
        let index: PrefixIndex = words.iter().collect();

        let mut expected: Vec<String> = words
            .iter()
            .filter(|w| w.starts_with(&prefix))
            .cloned()
            .collect();
        expected.sort();
        expected.dedup();

        prop_assert_eq!(index.suggest_prefix(&prefix), expected);
    }

    /// Every inserted word is found, case-insensitively
    #[test]
    fn prop_prefix_contains_inserted(words in vocabulary()) {
        let index: PrefixIndex = words.iter().collect();
        for w in &words {
            prop_assert!(index.contains(w));
            prop_assert!(index.contains(&w.to_ascii_uppercase()));
        }
    }
}

// ============================================================================
// Suggestion Engine Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Never more suggestions than requested, never duplicates, always dictionary words
    #[test]
    fn prop_suggestions_capped_unique_known(
        words in vocabulary(),
        query in "[a-eA-E]{0,7}",
        cap in 0usize..12,
    ) {
        let engine = SuggestionEngine::new(SpellingDictionary::from_words(&words));
        let suggestions = engine.suggest(&query, cap);

        prop_assert!(suggestions.len() <= cap);

        let mut unique = suggestions.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), suggestions.len());

        for s in &suggestions {
            prop_assert!(engine.is_correct(s));
        }
    }

    /// A dictionary word is its own first suggestion
    #[test]
    fn prop_exact_match_first(words in prop::collection::vec(word(), 1..40), pick in any::<prop::sample::Index>()) {
        let target = pick.get(&words).to_ascii_uppercase();
        let engine = SuggestionEngine::new(SpellingDictionary::from_words(&words));

        prop_assert!(engine.is_correct(&target));
        let suggestions = engine.suggest(&target, 1);
        prop_assert_eq!(suggestions, vec![normalize(&target)]);
    }

    /// Edit-distance matches respect the tolerance and are ranked by (distance, word)
    #[test]
    fn prop_edit_distance_ranked(words in vocabulary(), query in "[a-e]{1,7}") {
        let engine = SuggestionEngine::new(SpellingDictionary::from_words(&words));
        let tolerance = engine.adaptive_tolerance(&query);
        let suggestions = engine.suggest_detailed(&query, usize::MAX);

        let (prefix, edits): (Vec<_>, Vec<_>) = suggestions
            .iter()
            .partition(|s| s.source == SuggestionSource::Prefix);

        // Prefix matches lead the list.
        prop_assert!(suggestions[..prefix.len()].iter().all(|s| s.source == SuggestionSource::Prefix));

        for s in &prefix {
            prop_assert!(s.word.starts_with(&query));
        }
        for s in &edits {
            prop_assert!(s.distance <= tolerance);
            prop_assert_eq!(s.distance, levenshtein_distance(&query, &s.word));
        }
        for pair in edits.windows(2) {
            prop_assert!((pair[0].distance, &pair[0].word) < (pair[1].distance, &pair[1].word));
        }
    }

    /// The parallel scan returns exactly what the sequential scan returns
    #[test]
    fn prop_parallel_scan_matches_sequential(words in vocabulary(), query in "[a-e]{1,7}") {
        let dictionary = SpellingDictionary::from_words(&words);
        let sequential = SuggestionEngine::with_config(
            dictionary.clone(),
            SuggestionConfig { parallel_scan: false, ..SuggestionConfig::default() },
        );
        let parallel = SuggestionEngine::with_config(
            dictionary,
            SuggestionConfig { parallel_scan: true, parallel_min_words: 0, ..SuggestionConfig::default() },
        );

        prop_assert_eq!(sequential.suggest_detailed(&query, 20), parallel.suggest_detailed(&query, 20));
    }
}
