//! End-to-end matching tests against the public API

use fuzzmatch_core::fuzzy::{
    are_phonetically_equal, are_visual_confusables, cosine, dice, generate_ngrams, jaccard,
    keyboard_similarity, longest_common_subsequence, longest_common_substring, metaphone,
    HAMMING_UNDEFINED,
};
use fuzzmatch_core::{
    compare, compare_with_algorithm, damerau_levenshtein, find_best_matches, hamming, jaro,
    jaro_winkler, levenshtein, normalize, optimal_alignment, similarity, soundex, EngineConfig,
    FuzzyAlgorithm, FuzzyEngine, NormalizationConfig,
};
use pretty_assertions::assert_eq;

const WORDS: &[&str] = &[
    "",
    "a",
    "ab",
    "apple",
    "apply",
    "kitten",
    "sitting",
    "Robert",
    "Rupert",
    "night",
    "nacht",
    "crème brûlée",
    "creme brulee",
    "HELL0",
    "hello",
    "日本語",
];

fn in_unit_range(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

#[test]
fn test_kitten_sitting() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
}

#[test]
fn test_martha_jaro_winkler() {
    let score = jaro_winkler("MARTHA", "MARHTA", 0.1);
    assert!((score - 0.961).abs() <= 0.001, "got {score}");
}

#[test]
fn test_robert_rupert_soundex() {
    assert_eq!(soundex("Robert"), "R163");
    assert_eq!(soundex("Rupert"), "R163");
}

#[test]
fn test_identical_comparison_sets_every_field() {
    let m = compare("apple", "apple", true);
    for value in [
        m.normalized_levenshtein,
        m.jaro_similarity,
        m.jaro_winkler_similarity,
        m.dice_coefficient,
        m.jaccard_index,
        m.cosine_similarity,
        m.keyboard_similarity,
        m.best_similarity,
    ] {
        assert_eq!(value, 1.0);
    }
    assert!(m.soundex_match);
    assert!(m.metaphone_match);
    assert!(m.visually_confusable);
}

#[test]
fn test_find_best_matches_jaro_winkler() {
    let candidates = vec!["apple", "apply", "orange"];
    let matches = find_best_matches("aple", &candidates, 2, 0.5, FuzzyAlgorithm::JaroWinkler);
    assert_eq!(matches, vec!["apple".to_string(), "apply".to_string()]);
}

#[test]
fn test_visual_confusables() {
    assert!(are_visual_confusables("100", "lOO"));
    assert!(!are_visual_confusables("cat", "dog"));
}

#[test]
fn test_self_comparison_properties() {
    for &word in WORDS {
        assert_eq!(levenshtein(word, word), 0, "{word:?}");
        assert_eq!(damerau_levenshtein(word, word), 0, "{word:?}");
        if !word.is_empty() {
            assert_eq!(jaro(word, word), 1.0, "{word:?}");
            assert_eq!(dice(word, word, 2), 1.0, "{word:?}");
        }
    }
}

#[test]
fn test_pairwise_properties() {
    for &a in WORDS {
        for &b in WORDS {
            let lev = levenshtein(a, b);
            let dl = damerau_levenshtein(a, b);
            let osa = optimal_alignment(a, b);

            assert_eq!(lev, levenshtein(b, a), "{a:?}/{b:?}");
            assert!(dl <= lev, "{a:?}/{b:?}");
            assert!(dl <= osa, "{a:?}/{b:?}");
            assert!(osa <= lev, "{a:?}/{b:?}");

            let same_len = a.chars().count() == b.chars().count();
            assert_eq!(hamming(a, b) == HAMMING_UNDEFINED, !same_len, "{a:?}/{b:?}");

            for score in [
                jaro(a, b),
                jaro_winkler(a, b, 0.1),
                dice(a, b, 2),
                jaccard(a, b, 2),
                cosine(a, b, 2),
                keyboard_similarity(a, b),
            ] {
                assert!(in_unit_range(score), "{a:?}/{b:?} -> {score}");
            }

            assert!(longest_common_substring(a, b) <= longest_common_subsequence(a, b));
        }
    }
}

#[test]
fn test_similarity_agrees_with_compare_for_every_algorithm() {
    for &a in WORDS {
        for &b in WORDS {
            for algorithm in FuzzyAlgorithm::ALL {
                let fast = similarity(a, b, algorithm, true);
                let full = compare_with_algorithm(a, b, algorithm, true).best_similarity;
                assert_eq!(fast, full, "{a:?}/{b:?} {algorithm}");
                assert!(in_unit_range(fast), "{a:?}/{b:?} {algorithm} -> {fast}");
            }
        }
    }
}

#[test]
fn test_damerau_and_optimal_alignment_differ() {
    assert_eq!(damerau_levenshtein("CA", "ABC"), 2);
    assert_eq!(optimal_alignment("CA", "ABC"), 3);
}

#[test]
fn test_ngram_multiset_invariant() {
    for &word in WORDS {
        for n in 1..=3 {
            let set = generate_ngrams(word, n);
            assert_eq!(set.grams.values().sum::<usize>(), set.total, "{word:?} n={n}");
        }
    }
}

#[test]
fn test_phonetic_families() {
    assert!(are_phonetically_equal("Smith", "Smyth"));
    assert_eq!(metaphone("Thompson", true).len(), 2);
    assert!(!are_phonetically_equal("apple", "orange"));
}

#[test]
fn test_normalized_comparison() {
    let config = NormalizationConfig::default();
    assert_eq!(normalize("  Crème   BRÛLÉE ", &config), "creme brulee");

    let m = compare("Crème Brûlée", "creme brulee", true);
    assert_eq!(m.best_similarity, 1.0);
    assert_eq!(m.levenshtein_distance, 0);
}

#[test]
fn test_engine_with_aggressive_normalization() {
    let engine = FuzzyEngine::with_config(EngineConfig {
        normalization: NormalizationConfig::aggressive(),
        ..Default::default()
    });

    // punctuation and digits are stripped before comparing
    let score = engine.similarity("R2-D2!", "rd", FuzzyAlgorithm::Levenshtein, true);
    assert_eq!(score, 1.0);
}

#[test]
fn test_unicode_is_compared_by_character() {
    assert_eq!(levenshtein("日本語", "日本"), 1);
    assert_eq!(hamming("日本語", "日本人"), 1);
    assert_eq!(longest_common_substring("日本語", "日本"), 2);
}
