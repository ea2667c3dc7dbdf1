//! Shared result and selector types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel returned by Hamming distance when the inputs differ in length
pub const HAMMING_UNDEFINED: i64 = -1;

/// Algorithm selector for single-score queries and result emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyAlgorithm {
    Levenshtein,
    DamerauLevenshtein,
    OptimalAlignment,
    Hamming,
    Jaro,
    JaroWinkler,
    /// Longest common subsequence
    Lcs,
    /// Longest common substring
    Lcss,
    Jaccard,
    Dice,
    Cosine,
    Soundex,
    Metaphone,
    KeyboardDistance,
    /// Best of normalized Levenshtein, Jaro-Winkler, Dice, Jaccard and Cosine
    #[default]
    Auto,
}

impl FuzzyAlgorithm {
    pub const ALL: [FuzzyAlgorithm; 15] = [
        Self::Levenshtein,
        Self::DamerauLevenshtein,
        Self::OptimalAlignment,
        Self::Hamming,
        Self::Jaro,
        Self::JaroWinkler,
        Self::Lcs,
        Self::Lcss,
        Self::Jaccard,
        Self::Dice,
        Self::Cosine,
        Self::Soundex,
        Self::Metaphone,
        Self::KeyboardDistance,
        Self::Auto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Levenshtein => "levenshtein",
            Self::DamerauLevenshtein => "damerau_levenshtein",
            Self::OptimalAlignment => "optimal_alignment",
            Self::Hamming => "hamming",
            Self::Jaro => "jaro",
            Self::JaroWinkler => "jaro_winkler",
            Self::Lcs => "lcs",
            Self::Lcss => "lcss",
            Self::Jaccard => "jaccard",
            Self::Dice => "dice",
            Self::Cosine => "cosine",
            Self::Soundex => "soundex",
            Self::Metaphone => "metaphone",
            Self::KeyboardDistance => "keyboard_distance",
            Self::Auto => "auto",
        }
    }

    /// Whether this algorithm produces an edit distance
    pub fn is_edit_distance(&self) -> bool {
        matches!(
            self,
            Self::Levenshtein | Self::DamerauLevenshtein | Self::OptimalAlignment | Self::Hamming
        )
    }
}

impl fmt::Display for FuzzyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an algorithm name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fuzzy algorithm: {0}")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for FuzzyAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "levenshtein" | "lev" => Ok(Self::Levenshtein),
            "damerau_levenshtein" | "damerau" => Ok(Self::DamerauLevenshtein),
            "optimal_alignment" | "osa" => Ok(Self::OptimalAlignment),
            "hamming" => Ok(Self::Hamming),
            "jaro" => Ok(Self::Jaro),
            "jaro_winkler" | "jw" => Ok(Self::JaroWinkler),
            "lcs" | "longest_common_subsequence" => Ok(Self::Lcs),
            "lcss" | "longest_common_substring" => Ok(Self::Lcss),
            "jaccard" => Ok(Self::Jaccard),
            "dice" => Ok(Self::Dice),
            "cosine" => Ok(Self::Cosine),
            "soundex" => Ok(Self::Soundex),
            "metaphone" => Ok(Self::Metaphone),
            "keyboard_distance" | "keyboard" => Ok(Self::KeyboardDistance),
            "auto" => Ok(Self::Auto),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Every metric for one pair of strings
///
/// Distances are character counts; `hamming_distance` is
/// [`HAMMING_UNDEFINED`] when the prepared strings differ in length.
/// Similarities lie in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringMatch {
    pub string_a: String,
    pub string_b: String,

    pub levenshtein_distance: usize,
    pub normalized_levenshtein: f64,
    pub damerau_levenshtein_distance: usize,
    pub optimal_alignment_distance: usize,
    pub hamming_distance: i64,

    pub jaro_similarity: f64,
    pub jaro_winkler_similarity: f64,

    pub longest_common_subsequence: usize,
    pub longest_common_substring: usize,

    pub dice_coefficient: f64,
    pub jaccard_index: f64,
    pub cosine_similarity: f64,

    pub soundex_match: bool,
    pub metaphone_match: bool,
    pub soundex_a: String,
    pub soundex_b: String,

    pub keyboard_similarity: f64,
    pub visually_confusable: bool,

    pub computation_time_ms: f64,
    pub best_similarity: f64,
}

impl StringMatch {
    pub(crate) fn new(string_a: &str, string_b: &str) -> Self {
        Self {
            string_a: string_a.to_string(),
            string_b: string_b.to_string(),
            levenshtein_distance: 0,
            normalized_levenshtein: 0.0,
            damerau_levenshtein_distance: 0,
            optimal_alignment_distance: 0,
            hamming_distance: HAMMING_UNDEFINED,
            jaro_similarity: 0.0,
            jaro_winkler_similarity: 0.0,
            longest_common_subsequence: 0,
            longest_common_substring: 0,
            dice_coefficient: 0.0,
            jaccard_index: 0.0,
            cosine_similarity: 0.0,
            soundex_match: false,
            metaphone_match: false,
            soundex_a: String::new(),
            soundex_b: String::new(),
            keyboard_similarity: 0.0,
            visually_confusable: false,
            computation_time_ms: 0.0,
            best_similarity: 0.0,
        }
    }

    /// Highest of normalized Levenshtein, Jaro-Winkler, Dice, Jaccard and Cosine
    pub fn best_of(&self) -> f64 {
        self.normalized_levenshtein
            .max(self.jaro_winkler_similarity)
            .max(self.dice_coefficient)
            .max(self.jaccard_index)
            .max(self.cosine_similarity)
    }
}

/// A candidate with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub value: String,
    pub score: f64,
}

impl RankedMatch {
    pub(crate) fn new(value: String, score: f64) -> Self {
        Self { value, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in FuzzyAlgorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<FuzzyAlgorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_algorithm_aliases() {
        assert_eq!("Jaro-Winkler".parse::<FuzzyAlgorithm>(), Ok(FuzzyAlgorithm::JaroWinkler));
        assert_eq!("OSA".parse::<FuzzyAlgorithm>(), Ok(FuzzyAlgorithm::OptimalAlignment));
        assert_eq!(
            "unknown".parse::<FuzzyAlgorithm>(),
            Err(ParseAlgorithmError("unknown".to_string()))
        );
    }

    #[test]
    fn test_default_match_is_empty() {
        let m = StringMatch::new("a", "");
        assert_eq!(m.hamming_distance, HAMMING_UNDEFINED);
        assert_eq!(m.best_of(), 0.0);
        assert!(!m.soundex_match);
    }

    #[test]
    fn test_best_of_takes_max() {
        let mut m = StringMatch::new("a", "b");
        m.normalized_levenshtein = 0.2;
        m.jaro_winkler_similarity = 0.7;
        m.cosine_similarity = 0.9;
        m.jaro_similarity = 0.95; // not part of the reducer
        assert_eq!(m.best_of(), 0.9);
    }

    #[test]
    fn test_match_serializes() {
        let json = serde_json::to_value(StringMatch::new("x", "y")).unwrap();
        assert_eq!(json["string_a"], "x");
        assert_eq!(json["hamming_distance"], -1);
    }
}
