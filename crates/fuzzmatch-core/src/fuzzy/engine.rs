//! FuzzyEngine - comparator and batch matcher

use std::borrow::Cow;
use std::cmp::Ordering;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::edit::{
    damerau_levenshtein_chars, hamming_chars, levenshtein_chars, normalized_similarity,
    optimal_alignment_chars,
};
use super::jaro::{jaro_chars, jaro_winkler_chars, DEFAULT_PREFIX_SCALE};
use super::ngram::{all_coefficients, ngrams_from_chars, DEFAULT_NGRAM_SIZE};
use super::phonetic::{metaphone_match, soundex};
use super::subsequence::{lcs_chars, lcss_chars};
use super::types::{FuzzyAlgorithm, RankedMatch, StringMatch, HAMMING_UNDEFINED};
use super::visual::{are_visual_confusables, keyboard_similarity_chars};
use crate::normalize::{normalize, NormalizationConfig};

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Preset applied when a call asks for normalization
    pub normalization: NormalizationConfig,
    pub ngram_size: usize,
    pub prefix_scale: f64,
    pub max_results: usize,
    pub min_similarity: f64,
    pub algorithm: FuzzyAlgorithm,
    /// Candidate count at which batch scoring goes parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationConfig::default(),
            ngram_size: DEFAULT_NGRAM_SIZE,
            prefix_scale: DEFAULT_PREFIX_SCALE,
            max_results: 5,
            min_similarity: 0.5,
            algorithm: FuzzyAlgorithm::Auto,
            parallel_threshold: 1000,
        }
    }
}

/// A string after optional normalization, with its characters
struct Prepared<'a> {
    text: Cow<'a, str>,
    chars: Vec<char>,
}

impl<'a> Prepared<'a> {
    fn new(text: Cow<'a, str>) -> Self {
        let chars = text.chars().collect();
        Self { text, chars }
    }

    fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Stateless fuzzy comparator
///
/// Every operation is a pure function of its inputs and the configuration,
/// so one engine can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct FuzzyEngine {
    config: EngineConfig,
}

impl FuzzyEngine {
    /// Create a new FuzzyEngine with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn prepare<'a>(&self, text: &'a str, normalize_first: bool) -> Prepared<'a> {
        let text = if normalize_first {
            Cow::Owned(normalize(text, &self.config.normalization))
        } else {
            Cow::Borrowed(text)
        };
        Prepared::new(text)
    }

    /// Compute every metric for a pair of strings
    ///
    /// `best_similarity` holds the best-of reducer (see
    /// [`StringMatch::best_of`]).
    pub fn compare(&self, a: &str, b: &str, normalize: bool) -> StringMatch {
        self.compare_with_algorithm(a, b, FuzzyAlgorithm::Auto, normalize)
    }

    /// Compute every metric and surface `algorithm`'s score as
    /// `best_similarity`
    pub fn compare_with_algorithm(
        &self,
        a: &str,
        b: &str,
        algorithm: FuzzyAlgorithm,
        normalize: bool,
    ) -> StringMatch {
        let start = Instant::now();

        let pa = self.prepare(a, normalize);
        let pb = self.prepare(b, normalize);

        let mut result = StringMatch::new(a, b);

        if pa.text == pb.text {
            fill_identical(&mut result, &pa);
        } else if !pa.is_empty() && !pb.is_empty() {
            self.fill_metrics(&mut result, &pa, &pb);
            result.best_similarity =
                select_metric(&result, algorithm, pa.chars.len(), pb.chars.len());
        }

        result.computation_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        trace!(
            algorithm = %algorithm,
            best = result.best_similarity,
            elapsed_ms = result.computation_time_ms,
            "Compared strings"
        );

        result
    }

    fn fill_metrics(&self, result: &mut StringMatch, pa: &Prepared<'_>, pb: &Prepared<'_>) {
        let (a, b) = (&pa.chars[..], &pb.chars[..]);

        result.levenshtein_distance = levenshtein_chars(a, b);
        result.normalized_levenshtein =
            normalized_similarity(result.levenshtein_distance, a.len(), b.len());
        result.damerau_levenshtein_distance = damerau_levenshtein_chars(a, b);
        result.optimal_alignment_distance = optimal_alignment_chars(a, b);
        result.hamming_distance = hamming_chars(a, b).map_or(HAMMING_UNDEFINED, |d| d as i64);

        result.jaro_similarity = jaro_chars(a, b);
        result.jaro_winkler_similarity = jaro_winkler_chars(a, b, self.config.prefix_scale);

        result.longest_common_subsequence = lcs_chars(a, b);
        result.longest_common_substring = lcss_chars(a, b);

        let grams_a = ngrams_from_chars(&pa.text, a, self.config.ngram_size);
        let grams_b = ngrams_from_chars(&pb.text, b, self.config.ngram_size);
        let (dice, jaccard, cosine) = all_coefficients(&grams_a, &grams_b);
        result.dice_coefficient = dice;
        result.jaccard_index = jaccard;
        result.cosine_similarity = cosine;

        result.soundex_a = soundex(&pa.text);
        result.soundex_b = soundex(&pb.text);
        result.soundex_match = result.soundex_a == result.soundex_b;
        result.metaphone_match = metaphone_match(&pa.text, &pb.text);

        result.keyboard_similarity = keyboard_similarity_chars(a, b);
        result.visually_confusable = are_visual_confusables(&pa.text, &pb.text);
    }

    /// Single score for `algorithm`, computing only what it needs
    ///
    /// Equal to `compare_with_algorithm(..).best_similarity`.
    pub fn similarity(
        &self,
        a: &str,
        b: &str,
        algorithm: FuzzyAlgorithm,
        normalize: bool,
    ) -> f64 {
        let pa = self.prepare(a, normalize);
        let pb = self.prepare(b, normalize);
        self.score_prepared(&pa, &pb, algorithm)
    }

    fn score_prepared(
        &self,
        pa: &Prepared<'_>,
        pb: &Prepared<'_>,
        algorithm: FuzzyAlgorithm,
    ) -> f64 {
        if pa.text == pb.text {
            return 1.0;
        }
        if pa.is_empty() || pb.is_empty() {
            return 0.0;
        }

        let (a, b) = (&pa.chars[..], &pb.chars[..]);
        let (la, lb) = (a.len(), b.len());
        let n = self.config.ngram_size;

        match algorithm {
            FuzzyAlgorithm::Levenshtein => normalized_similarity(levenshtein_chars(a, b), la, lb),
            FuzzyAlgorithm::DamerauLevenshtein => {
                normalized_similarity(damerau_levenshtein_chars(a, b), la, lb)
            }
            FuzzyAlgorithm::OptimalAlignment => {
                normalized_similarity(optimal_alignment_chars(a, b), la, lb)
            }
            FuzzyAlgorithm::Hamming => {
                hamming_chars(a, b).map_or(0.0, |d| normalized_similarity(d, la, lb))
            }
            FuzzyAlgorithm::Jaro => jaro_chars(a, b),
            FuzzyAlgorithm::JaroWinkler => jaro_winkler_chars(a, b, self.config.prefix_scale),
            FuzzyAlgorithm::Lcs => ratio(lcs_chars(a, b), la, lb),
            FuzzyAlgorithm::Lcss => ratio(lcss_chars(a, b), la, lb),
            FuzzyAlgorithm::Jaccard => {
                ngrams_from_chars(&pa.text, a, n).jaccard(&ngrams_from_chars(&pb.text, b, n))
            }
            FuzzyAlgorithm::Dice => {
                ngrams_from_chars(&pa.text, a, n).dice(&ngrams_from_chars(&pb.text, b, n))
            }
            FuzzyAlgorithm::Cosine => {
                ngrams_from_chars(&pa.text, a, n).cosine(&ngrams_from_chars(&pb.text, b, n))
            }
            FuzzyAlgorithm::Soundex => indicator(soundex(&pa.text) == soundex(&pb.text)),
            FuzzyAlgorithm::Metaphone => indicator(metaphone_match(&pa.text, &pb.text)),
            FuzzyAlgorithm::KeyboardDistance => keyboard_similarity_chars(a, b),
            FuzzyAlgorithm::Auto => {
                let grams_a = ngrams_from_chars(&pa.text, a, n);
                let grams_b = ngrams_from_chars(&pb.text, b, n);
                let (dice, jaccard, cosine) = all_coefficients(&grams_a, &grams_b);

                normalized_similarity(levenshtein_chars(a, b), la, lb)
                    .max(jaro_winkler_chars(a, b, self.config.prefix_scale))
                    .max(dice)
                    .max(jaccard)
                    .max(cosine)
            }
        }
    }

    /// Raw edit distance; non-edit algorithms fall back to Levenshtein
    ///
    /// Hamming yields [`HAMMING_UNDEFINED`] for unequal lengths. Inputs are
    /// not normalized.
    pub fn edit_distance(&self, a: &str, b: &str, algorithm: FuzzyAlgorithm) -> i64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let distance = match algorithm {
            FuzzyAlgorithm::DamerauLevenshtein => damerau_levenshtein_chars(&a, &b),
            FuzzyAlgorithm::OptimalAlignment => optimal_alignment_chars(&a, &b),
            FuzzyAlgorithm::Hamming => match hamming_chars(&a, &b) {
                Some(d) => d,
                None => return HAMMING_UNDEFINED,
            },
            _ => levenshtein_chars(&a, &b),
        };

        distance as i64
    }

    /// Best candidates for `query`, highest score first
    pub fn find_best_matches<S>(
        &self,
        query: &str,
        candidates: &[S],
        max_results: usize,
        min_similarity: f64,
        algorithm: FuzzyAlgorithm,
    ) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        self.find_best_matches_scored(query, candidates, max_results, min_similarity, algorithm)
            .into_iter()
            .map(|m| m.value)
            .collect()
    }

    /// Like [`find_best_matches`](Self::find_best_matches) but keeps scores
    ///
    /// Both strings are normalized with the configured preset. Scores below
    /// `min_similarity` are dropped; equal scores keep candidate order.
    pub fn find_best_matches_scored<S>(
        &self,
        query: &str,
        candidates: &[S],
        max_results: usize,
        min_similarity: f64,
        algorithm: FuzzyAlgorithm,
    ) -> Vec<RankedMatch>
    where
        S: AsRef<str> + Sync,
    {
        let query = self.prepare(query, true);

        let mut matches = self.score_candidates(&query, candidates, min_similarity, algorithm);

        // Stable sort: ties stay in input order
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches.truncate(max_results);

        debug!(
            candidates = candidates.len(),
            returned = matches.len(),
            algorithm = %algorithm,
            "Ranked candidates"
        );

        matches
    }

    /// Rank with the configured limit, threshold and algorithm
    pub fn rank<S>(&self, query: &str, candidates: &[S]) -> Vec<RankedMatch>
    where
        S: AsRef<str> + Sync,
    {
        self.find_best_matches_scored(
            query,
            candidates,
            self.config.max_results,
            self.config.min_similarity,
            self.config.algorithm,
        )
    }

    /// Score candidates - parallel above the threshold on native
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    fn score_candidates<S>(
        &self,
        query: &Prepared<'_>,
        candidates: &[S],
        min_similarity: f64,
        algorithm: FuzzyAlgorithm,
    ) -> Vec<RankedMatch>
    where
        S: AsRef<str> + Sync,
    {
        if candidates.len() >= self.config.parallel_threshold {
            candidates
                .par_iter()
                .filter_map(|candidate| {
                    self.score_candidate(query, candidate.as_ref(), min_similarity, algorithm)
                })
                .collect()
        } else {
            self.score_sequential(query, candidates, min_similarity, algorithm)
        }
    }

    /// Sequential scoring (WASM or when parallel feature disabled)
    #[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
    fn score_candidates<S>(
        &self,
        query: &Prepared<'_>,
        candidates: &[S],
        min_similarity: f64,
        algorithm: FuzzyAlgorithm,
    ) -> Vec<RankedMatch>
    where
        S: AsRef<str> + Sync,
    {
        self.score_sequential(query, candidates, min_similarity, algorithm)
    }

    fn score_sequential<S>(
        &self,
        query: &Prepared<'_>,
        candidates: &[S],
        min_similarity: f64,
        algorithm: FuzzyAlgorithm,
    ) -> Vec<RankedMatch>
    where
        S: AsRef<str>,
    {
        candidates
            .iter()
            .filter_map(|candidate| {
                self.score_candidate(query, candidate.as_ref(), min_similarity, algorithm)
            })
            .collect()
    }

    fn score_candidate(
        &self,
        query: &Prepared<'_>,
        candidate: &str,
        min_similarity: f64,
        algorithm: FuzzyAlgorithm,
    ) -> Option<RankedMatch> {
        let prepared = self.prepare(candidate, true);
        let score = self.score_prepared(query, &prepared, algorithm);
        (score >= min_similarity).then(|| RankedMatch::new(candidate.to_string(), score))
    }
}

/// Result for two strings that prepare to the same text
fn fill_identical(result: &mut StringMatch, prepared: &Prepared<'_>) {
    let len = prepared.chars.len();
    let code = soundex(&prepared.text);

    result.levenshtein_distance = 0;
    result.normalized_levenshtein = 1.0;
    result.damerau_levenshtein_distance = 0;
    result.optimal_alignment_distance = 0;
    result.hamming_distance = 0;
    result.jaro_similarity = 1.0;
    result.jaro_winkler_similarity = 1.0;
    result.longest_common_subsequence = len;
    result.longest_common_substring = len;
    result.dice_coefficient = 1.0;
    result.jaccard_index = 1.0;
    result.cosine_similarity = 1.0;
    result.soundex_a = code.clone();
    result.soundex_b = code;
    result.soundex_match = true;
    result.metaphone_match = true;
    result.keyboard_similarity = 1.0;
    result.visually_confusable = true;
    result.best_similarity = 1.0;
}

/// Map an algorithm to its score in an already computed result
fn select_metric(
    result: &StringMatch,
    algorithm: FuzzyAlgorithm,
    len_a: usize,
    len_b: usize,
) -> f64 {
    match algorithm {
        FuzzyAlgorithm::Levenshtein => result.normalized_levenshtein,
        FuzzyAlgorithm::DamerauLevenshtein => {
            normalized_similarity(result.damerau_levenshtein_distance, len_a, len_b)
        }
        FuzzyAlgorithm::OptimalAlignment => {
            normalized_similarity(result.optimal_alignment_distance, len_a, len_b)
        }
        FuzzyAlgorithm::Hamming => match usize::try_from(result.hamming_distance) {
            Ok(d) => normalized_similarity(d, len_a, len_b),
            Err(_) => 0.0,
        },
        FuzzyAlgorithm::Jaro => result.jaro_similarity,
        FuzzyAlgorithm::JaroWinkler => result.jaro_winkler_similarity,
        FuzzyAlgorithm::Lcs => ratio(result.longest_common_subsequence, len_a, len_b),
        FuzzyAlgorithm::Lcss => ratio(result.longest_common_substring, len_a, len_b),
        FuzzyAlgorithm::Jaccard => result.jaccard_index,
        FuzzyAlgorithm::Dice => result.dice_coefficient,
        FuzzyAlgorithm::Cosine => result.cosine_similarity,
        FuzzyAlgorithm::Soundex => indicator(result.soundex_match),
        FuzzyAlgorithm::Metaphone => indicator(result.metaphone_match),
        FuzzyAlgorithm::KeyboardDistance => result.keyboard_similarity,
        FuzzyAlgorithm::Auto => result.best_of(),
    }
}

#[inline]
fn ratio(length: usize, len_a: usize, len_b: usize) -> f64 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 0.0;
    }
    length as f64 / max_len as f64
}

#[inline]
fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// [`FuzzyEngine::compare`] with the default configuration
pub fn compare(a: &str, b: &str, normalize: bool) -> StringMatch {
    FuzzyEngine::new().compare(a, b, normalize)
}

/// [`FuzzyEngine::compare_with_algorithm`] with the default configuration
pub fn compare_with_algorithm(
    a: &str,
    b: &str,
    algorithm: FuzzyAlgorithm,
    normalize: bool,
) -> StringMatch {
    FuzzyEngine::new().compare_with_algorithm(a, b, algorithm, normalize)
}

/// [`FuzzyEngine::similarity`] with the default configuration
pub fn similarity(a: &str, b: &str, algorithm: FuzzyAlgorithm, normalize: bool) -> f64 {
    FuzzyEngine::new().similarity(a, b, algorithm, normalize)
}

/// [`FuzzyEngine::edit_distance`] with the default configuration
pub fn edit_distance(a: &str, b: &str, algorithm: FuzzyAlgorithm) -> i64 {
    FuzzyEngine::new().edit_distance(a, b, algorithm)
}

/// [`FuzzyEngine::find_best_matches`] with the default configuration
pub fn find_best_matches<S>(
    query: &str,
    candidates: &[S],
    max_results: usize,
    min_similarity: f64,
    algorithm: FuzzyAlgorithm,
) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    FuzzyEngine::new().find_best_matches(query, candidates, max_results, min_similarity, algorithm)
}

/// [`FuzzyEngine::find_best_matches_scored`] with the default configuration
pub fn find_best_matches_scored<S>(
    query: &str,
    candidates: &[S],
    max_results: usize,
    min_similarity: f64,
    algorithm: FuzzyAlgorithm,
) -> Vec<RankedMatch>
where
    S: AsRef<str> + Sync,
{
    FuzzyEngine::new().find_best_matches_scored(
        query,
        candidates,
        max_results,
        min_similarity,
        algorithm,
    )
}
