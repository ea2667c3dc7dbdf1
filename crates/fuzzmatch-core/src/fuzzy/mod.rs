//! Fuzzy Matching Engine
//!
//! Algorithm families, each a set of pure functions over `&str`:
//!
//! - **Edit distance**: Levenshtein, Damerau-Levenshtein, optimal string
//!   alignment, Hamming
//! - **Similarity**: Jaro, Jaro-Winkler
//! - **Subsequence**: longest common subsequence / substring
//! - **N-gram**: Dice, Jaccard, Cosine over character n-grams
//! - **Phonetic**: Soundex, simplified double Metaphone
//! - **Visual**: QWERTY keyboard proximity, look-alike characters
//!
//! [`FuzzyEngine`] runs them together. [`FuzzyEngine::compare`] fills a
//! [`StringMatch`] with every metric; [`FuzzyEngine::similarity`] computes a
//! single score; [`FuzzyEngine::find_best_matches`] ranks candidates, in
//! parallel with rayon for large lists when the `parallel` feature is on.
//!
//! # Example
//!
//! ```rust
//! use fuzzmatch_core::fuzzy::{find_best_matches, FuzzyAlgorithm};
//!
//! let candidates = ["apple", "apply", "orange"];
//! let matches = find_best_matches("aple", &candidates, 2, 0.5, FuzzyAlgorithm::JaroWinkler);
//! assert_eq!(matches, vec!["apple", "apply"]);
//! ```

mod edit;
mod engine;
mod jaro;
mod ngram;
mod phonetic;
mod subsequence;
mod types;
mod visual;

pub use edit::{damerau_levenshtein, hamming, hamming_distance, levenshtein, optimal_alignment};
pub use engine::{
    compare, compare_with_algorithm, edit_distance, find_best_matches, find_best_matches_scored,
    similarity, EngineConfig, FuzzyEngine,
};
pub use jaro::{jaro, jaro_winkler, DEFAULT_PREFIX_SCALE};
pub use ngram::{cosine, dice, generate_ngrams, jaccard, NGramSet, DEFAULT_NGRAM_SIZE};
pub use phonetic::{are_phonetically_equal, metaphone, metaphone_match, soundex, soundex_class};
pub use subsequence::{longest_common_subsequence, longest_common_substring};
pub use types::{
    FuzzyAlgorithm, ParseAlgorithmError, RankedMatch, StringMatch, HAMMING_UNDEFINED,
};
pub use visual::{
    are_visual_confusables, compare_chars, is_confusable, key_similarity, keyboard_similarity,
    CharacterMatch,
};
