//! Cross-checks of the edit distances against strsim

use fuzzmatch_core::fuzzy::hamming_distance;
use fuzzmatch_core::{damerau_levenshtein, levenshtein, optimal_alignment};

const PAIRS: &[(&str, &str)] = &[
    ("kitten", "sitting"),
    ("saturday", "sunday"),
    ("ca", "abc"),
    ("a cat", "an act"),
    ("specter", "spectre"),
    ("abcdef", "badcfe"),
    ("levenshtein", "frankenstein"),
    ("Müller", "Mueller"),
    ("résumé", "resume"),
    ("karolin", "kathrin"),
    ("", "abc"),
    ("abc", ""),
    ("", ""),
    ("transposition", "tarnspositoin"),
    ("日本語", "語本日"),
];

#[test]
fn test_levenshtein_matches_strsim() {
    for &(a, b) in PAIRS {
        assert_eq!(levenshtein(a, b), strsim::levenshtein(a, b), "{a:?}/{b:?}");
    }
}

#[test]
fn test_damerau_matches_strsim() {
    for &(a, b) in PAIRS {
        assert_eq!(damerau_levenshtein(a, b), strsim::damerau_levenshtein(a, b), "{a:?}/{b:?}");
    }
}

#[test]
fn test_optimal_alignment_matches_strsim() {
    for &(a, b) in PAIRS {
        assert_eq!(optimal_alignment(a, b), strsim::osa_distance(a, b), "{a:?}/{b:?}");
    }
}

#[test]
fn test_hamming_matches_strsim() {
    for &(a, b) in PAIRS {
        assert_eq!(hamming_distance(a, b), strsim::hamming(a, b).ok(), "{a:?}/{b:?}");
    }
}
