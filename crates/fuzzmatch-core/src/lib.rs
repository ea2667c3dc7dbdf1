//! fuzzmatch core engine
//!
//! Approximate string matching: edit distances, Jaro-Winkler, n-gram
//! coefficients, phonetic codes and keyboard/visual typo models, plus the
//! text normalizer they share.
//!
//! # Features
//!
//! - `parallel` - Parallel candidate ranking via rayon for large lists
//!
//! # Example
//!
//! ```rust
//! use fuzzmatch_core::{compare, levenshtein, soundex};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert_eq!(soundex("Robert"), soundex("Rupert"));
//!
//! let result = compare("Crème Brûlée", "creme brulee", true);
//! assert_eq!(result.best_similarity, 1.0);
//! ```

pub mod fuzzy;
pub mod normalize;

// Re-export main types at crate root
pub use fuzzy::{
    compare, compare_with_algorithm, damerau_levenshtein, edit_distance, find_best_matches,
    find_best_matches_scored, hamming, jaro, jaro_winkler, levenshtein, optimal_alignment,
    similarity, soundex, EngineConfig, FuzzyAlgorithm, FuzzyEngine, ParseAlgorithmError,
    RankedMatch, StringMatch,
};
pub use normalize::{normalize, NormalizationConfig, NormalizationMode, ParseModeError};
