//! Jaro and Jaro-Winkler similarity

/// Prefix weight used by Jaro-Winkler unless the caller overrides it
pub const DEFAULT_PREFIX_SCALE: f64 = 0.1;

/// Jaro-Winkler only boosts scores at or above this Jaro similarity
const BOOST_THRESHOLD: f64 = 0.7;

/// Longest prefix that earns a bonus
const MAX_PREFIX: usize = 4;

/// Jaro similarity in `[0, 1]`
///
/// Returns 0.0 when either string is empty or no characters match.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    jaro_chars(&a, &b)
}

pub(crate) fn jaro_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let len_a = a.len();
    let len_b = b.len();

    let window = (len_a.max(len_b) / 2).saturating_sub(1).max(1);

    let mut matched_a = vec![false; len_a];
    let mut matched_b = vec![false; len_b];
    let mut matches = 0usize;

    for i in 0..len_a {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len_b);

        for j in start..end {
            if matched_b[j] || a[i] != b[j] {
                continue;
            }
            matched_a[i] = true;
            matched_b[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Matched characters that appear in a different order
    let mut half_transpositions = 0usize;
    let mut k = 0usize;
    for i in 0..len_a {
        if !matched_a[i] {
            continue;
        }
        while !matched_b[k] {
            k += 1;
        }
        if a[i] != b[k] {
            half_transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;

    (m / len_a as f64 + m / len_b as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler similarity in `[0, 1]`
///
/// Adds `min(prefix, 4) * prefix_scale * (1 - jaro)` once Jaro reaches 0.7.
/// `prefix_scale` should not exceed 0.25 or the score can pass 1.0.
pub fn jaro_winkler(a: &str, b: &str, prefix_scale: f64) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    jaro_winkler_chars(&a, &b, prefix_scale)
}

pub(crate) fn jaro_winkler_chars(a: &[char], b: &[char], prefix_scale: f64) -> f64 {
    let jaro = jaro_chars(a, b);
    if jaro < BOOST_THRESHOLD {
        return jaro;
    }

    let prefix = a
        .iter()
        .zip(b)
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();

    (jaro + prefix as f64 * prefix_scale * (1.0 - jaro)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-3
    }

    #[test]
    fn test_jaro_vectors() {
        assert!(approx(jaro("MARTHA", "MARHTA"), 0.944));
        assert!(approx(jaro("DIXON", "DICKSONX"), 0.767));
        assert!(approx(jaro("DWAYNE", "DUANE"), 0.822));
    }

    #[test]
    fn test_jaro_edges() {
        assert_eq!(jaro("", "abc"), 0.0);
        assert_eq!(jaro("abc", ""), 0.0);
        assert_eq!(jaro("", ""), 0.0);
        assert_eq!(jaro("abc", "abc"), 1.0);
        assert_eq!(jaro("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_jaro_window_minimum_is_one() {
        // max_len / 2 - 1 would be 0 here; the window is clamped to 1
        assert!(jaro("ab", "ba") > 0.0);
    }

    #[test]
    fn test_jaro_winkler_vectors() {
        assert!(approx(jaro_winkler("MARTHA", "MARHTA", DEFAULT_PREFIX_SCALE), 0.961));
        assert!(approx(jaro_winkler("DIXON", "DICKSONX", DEFAULT_PREFIX_SCALE), 0.813));
        assert!(approx(jaro_winkler("DWAYNE", "DUANE", DEFAULT_PREFIX_SCALE), 0.84));
    }

    #[test]
    fn test_jaro_winkler_no_boost_below_threshold() {
        let j = jaro("abcxyz", "abqrst");
        assert!(j < BOOST_THRESHOLD);
        assert_eq!(jaro_winkler("abcxyz", "abqrst", DEFAULT_PREFIX_SCALE), j);
    }

    #[test]
    fn test_jaro_winkler_bounds() {
        for (a, b) in [("a", "a"), ("aaaa", "aaab"), ("prefix", "prefixes")] {
            let s = jaro_winkler(a, b, DEFAULT_PREFIX_SCALE);
            assert!((0.0..=1.0).contains(&s), "{a}/{b} -> {s}");
        }
    }
}
