//! Edit distances
//!
//! All distances count Unicode scalar values, not bytes.
//!
//! | Function | Operations | Space |
//! |---|---|---|
//! | [`levenshtein`] | insert, delete, substitute | two rows |
//! | [`damerau_levenshtein`] | + unrestricted transposition | full table |
//! | [`optimal_alignment`] | + adjacent transposition, no substring edited twice | three rows |
//! | [`hamming`] | substitute only, equal lengths | none |
//!
//! For any pair, `damerau_levenshtein <= optimal_alignment <= levenshtein`.

use ahash::AHashMap;

use super::types::HAMMING_UNDEFINED;

/// Levenshtein distance
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

pub(crate) fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    // Keep the shorter string in the row
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Damerau-Levenshtein distance with unrestricted transpositions
///
/// Lowrance-Wagner: a transposition may have any number of insertions and
/// deletions between the swapped characters, so `"CA" -> "ABC"` costs 2.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    damerau_levenshtein_chars(&a, &b)
}

pub(crate) fn damerau_levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let len_a = a.len();
    let len_b = b.len();

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let max_dist = len_a + len_b;
    let width = len_b + 2;

    // (len_a + 2) x (len_b + 2) table, row/column 0 hold the max_dist border
    let mut h = vec![0usize; (len_a + 2) * width];
    let idx = |i: usize, j: usize| i * width + j;

    h[idx(0, 0)] = max_dist;
    for i in 0..=len_a {
        h[idx(i + 1, 0)] = max_dist;
        h[idx(i + 1, 1)] = i;
    }
    for j in 0..=len_b {
        h[idx(0, j + 1)] = max_dist;
        h[idx(1, j + 1)] = j;
    }

    // Last row (1-based) of `a` in which each symbol was seen
    let mut last_row: AHashMap<char, usize> = AHashMap::new();

    for i in 1..=len_a {
        // Last column (1-based) in this row where a[i-1] matched
        let mut last_match_col = 0usize;

        for j in 1..=len_b {
            let k = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let l = last_match_col;

            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = h[idx(i, j)] + cost;
            let insertion = h[idx(i + 1, j)] + 1;
            let deletion = h[idx(i, j + 1)] + 1;
            let transposition = h[idx(k, l)] + (i - k - 1) + 1 + (j - l - 1);

            h[idx(i + 1, j + 1)] = substitution
                .min(insertion)
                .min(deletion)
                .min(transposition);
        }

        last_row.insert(a[i - 1], i);
    }

    h[idx(len_a + 1, len_b + 1)]
}

/// Optimal string alignment distance (restricted Damerau-Levenshtein)
pub fn optimal_alignment(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    optimal_alignment_chars(&a, &b)
}

pub(crate) fn optimal_alignment_chars(a: &[char], b: &[char]) -> usize {
    let len_a = a.len();
    let len_b = b.len();

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    // Rows i-2, i-1 and i
    let mut before: Vec<usize> = vec![0; len_b + 1];
    let mut prev: Vec<usize> = (0..=len_b).collect();
    let mut curr: Vec<usize> = vec![0; len_b + 1];

    for i in 1..=len_a {
        curr[0] = i;
        for j in 1..=len_b {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            let mut d = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d = d.min(before[j - 2] + cost);
            }

            curr[j] = d;
        }

        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[len_b]
}

/// Hamming distance, or [`HAMMING_UNDEFINED`] when lengths differ
pub fn hamming(a: &str, b: &str) -> i64 {
    hamming_distance(a, b).map_or(HAMMING_UNDEFINED, |d| d as i64)
}

/// Hamming distance as an `Option`, `None` when lengths differ
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    hamming_chars(&a, &b)
}

pub(crate) fn hamming_chars(a: &[char], b: &[char]) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

/// `1 - distance / max_len`, or 0.0 when both lengths are zero
#[inline]
pub(crate) fn normalized_similarity(distance: usize, len_a: usize, len_b: usize) -> f64 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 0.0;
    }
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_vectors() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
    }

    #[test]
    fn test_levenshtein_symmetric() {
        for (a, b) in [("kitten", "sitting"), ("a", "abcdef"), ("gumbo", "gambol")] {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }

    #[test]
    fn test_damerau_vectors() {
        assert_eq!(damerau_levenshtein("ca", "abc"), 2);
        assert_eq!(damerau_levenshtein("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein("abcdef", "abcfed"), 2);
        assert_eq!(damerau_levenshtein("a cat", "an act"), 2);
        assert_eq!(damerau_levenshtein("kitten", "sitting"), 3);
        assert_eq!(damerau_levenshtein("", "xyz"), 3);
        assert_eq!(damerau_levenshtein("xyz", ""), 3);
    }

    #[test]
    fn test_optimal_alignment_vectors() {
        assert_eq!(optimal_alignment("ca", "abc"), 3);
        assert_eq!(optimal_alignment("ab", "ba"), 1);
        assert_eq!(optimal_alignment("kitten", "sitting"), 3);
        assert_eq!(optimal_alignment("", "ab"), 2);
    }

    #[test]
    fn test_distance_ordering() {
        let pairs = [
            ("ca", "abc"),
            ("specter", "spectre"),
            ("abcdef", "badcfe"),
            ("hello", "ehlol"),
        ];
        for (a, b) in pairs {
            let dl = damerau_levenshtein(a, b);
            let osa = optimal_alignment(a, b);
            let lev = levenshtein(a, b);
            assert!(dl <= osa, "{a}/{b}: {dl} > {osa}");
            assert!(osa <= lev, "{a}/{b}: {osa} > {lev}");
        }
    }

    #[test]
    fn test_hamming() {
        assert_eq!(hamming("karolin", "kathrin"), 3);
        assert_eq!(hamming("", ""), 0);
        assert_eq!(hamming("abc", "ab"), HAMMING_UNDEFINED);
        assert_eq!(hamming_distance("abc", "ab"), None);
        assert_eq!(hamming_distance("abc", "abd"), Some(1));
    }

    #[test]
    fn test_normalized_similarity() {
        assert_eq!(normalized_similarity(0, 0, 0), 0.0);
        assert_eq!(normalized_similarity(1, 4, 2), 0.75);
        assert_eq!(normalized_similarity(4, 4, 4), 0.0);
    }
}
