//! Character n-gram multisets and the coefficients built on them
//!
//! Dice counts shared grams with multiplicity, Jaccard uses distinct grams
//! only, Cosine treats the counts as a vector.

use ahash::{AHashMap, AHashSet};

/// Gram size used when none is given
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Multiset of the contiguous `n`-character windows of `source`
///
/// A source shorter than `n` is kept whole as a single gram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGramSet {
    pub n: usize,
    pub source: String,
    pub grams: AHashMap<String, usize>,
    pub total: usize,
}

impl NGramSet {
    /// Number of distinct grams
    pub fn distinct(&self) -> usize {
        self.grams.len()
    }

    pub fn count(&self, gram: &str) -> usize {
        self.grams.get(gram).copied().unwrap_or(0)
    }

    /// Dice coefficient against another set
    pub fn dice(&self, other: &NGramSet) -> f64 {
        let denom = self.total + other.total;
        if denom == 0 {
            return 0.0;
        }

        let shared: usize = self
            .grams
            .iter()
            .map(|(gram, &count)| count.min(other.count(gram)))
            .sum();

        2.0 * shared as f64 / denom as f64
    }

    /// Jaccard index over distinct grams
    pub fn jaccard(&self, other: &NGramSet) -> f64 {
        let union: AHashSet<&str> = self
            .grams
            .keys()
            .chain(other.grams.keys())
            .map(String::as_str)
            .collect();

        if union.is_empty() {
            return 0.0;
        }

        let intersection = self
            .grams
            .keys()
            .filter(|gram| other.grams.contains_key(*gram))
            .count();

        intersection as f64 / union.len() as f64
    }

    /// Cosine of the angle between the two count vectors
    ///
    /// Returns 0.0 if either vector has zero magnitude.
    pub fn cosine(&self, other: &NGramSet) -> f64 {
        let mut dot = 0.0f64;
        let mut norm_a = 0.0f64;
        let mut norm_b = 0.0f64;

        for (gram, &count) in &self.grams {
            let count = count as f64;
            norm_a += count * count;
            dot += count * other.count(gram) as f64;
        }
        for &count in other.grams.values() {
            let count = count as f64;
            norm_b += count * count;
        }

        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom == 0.0 {
            return 0.0;
        }

        (dot / denom).min(1.0)
    }
}

/// Collect the n-gram multiset of `text`
///
/// `n == 0` is treated as 1.
pub fn generate_ngrams(text: &str, n: usize) -> NGramSet {
    let chars: Vec<char> = text.chars().collect();
    ngrams_from_chars(text, &chars, n)
}

pub(crate) fn ngrams_from_chars(source: &str, chars: &[char], n: usize) -> NGramSet {
    let n = n.max(1);
    let mut grams: AHashMap<String, usize> = AHashMap::new();

    if chars.len() < n {
        grams.insert(source.to_string(), 1);
        return NGramSet {
            n,
            source: source.to_string(),
            grams,
            total: 1,
        };
    }

    let mut total = 0;
    for window in chars.windows(n) {
        *grams.entry(window.iter().collect()).or_insert(0) += 1;
        total += 1;
    }

    NGramSet {
        n,
        source: source.to_string(),
        grams,
        total,
    }
}

/// Which n-gram coefficient to compute
#[derive(Debug, Clone, Copy)]
pub(crate) enum Coefficient {
    Dice,
    Jaccard,
    Cosine,
}

/// Shared guard for the three coefficients: 0.0 for an empty input,
/// 1.0 for identical inputs
fn coefficient(a: &str, b: &str, n: usize, which: Coefficient) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let grams_a = generate_ngrams(a, n);
    let grams_b = generate_ngrams(b, n);

    match which {
        Coefficient::Dice => grams_a.dice(&grams_b),
        Coefficient::Jaccard => grams_a.jaccard(&grams_b),
        Coefficient::Cosine => grams_a.cosine(&grams_b),
    }
}

/// Dice coefficient `2·|A∩B| / (|A|+|B|)` over n-gram multisets
pub fn dice(a: &str, b: &str, n: usize) -> f64 {
    coefficient(a, b, n, Coefficient::Dice)
}

/// Jaccard index `|A∩B| / |A∪B|` over distinct n-grams
pub fn jaccard(a: &str, b: &str, n: usize) -> f64 {
    coefficient(a, b, n, Coefficient::Jaccard)
}

/// Cosine similarity of n-gram count vectors
pub fn cosine(a: &str, b: &str, n: usize) -> f64 {
    coefficient(a, b, n, Coefficient::Cosine)
}

/// All three coefficients from one pair of gram sets
pub(crate) fn all_coefficients(a: &NGramSet, b: &NGramSet) -> (f64, f64, f64) {
    (a.dice(b), a.jaccard(b), a.cosine(b))
}
