//! Typo and look-alike models
//!
//! Keyboard similarity scores substitutions by how far apart the keys sit on
//! a row-staggered QWERTY layout. Visual confusables accept strings that
//! differ only in characters that are commonly misread for one another.

use phf::phf_map;
use serde::Serialize;

use super::phonetic::soundex_class;

/// Key centres in key widths; row 0 is the digit row
static KEYBOARD: phf::Map<char, (f64, f64)> = phf_map! {
    '1' => (0.0, 0.0), '2' => (1.0, 0.0), '3' => (2.0, 0.0), '4' => (3.0, 0.0),
    '5' => (4.0, 0.0), '6' => (5.0, 0.0), '7' => (6.0, 0.0), '8' => (7.0, 0.0),
    '9' => (8.0, 0.0), '0' => (9.0, 0.0),

    'q' => (0.0, 1.0), 'w' => (1.0, 1.0), 'e' => (2.0, 1.0), 'r' => (3.0, 1.0),
    't' => (4.0, 1.0), 'y' => (5.0, 1.0), 'u' => (6.0, 1.0), 'i' => (7.0, 1.0),
    'o' => (8.0, 1.0), 'p' => (9.0, 1.0),

    'a' => (0.25, 2.0), 's' => (1.25, 2.0), 'd' => (2.25, 2.0), 'f' => (3.25, 2.0),
    'g' => (4.25, 2.0), 'h' => (5.25, 2.0), 'j' => (6.25, 2.0), 'k' => (7.25, 2.0),
    'l' => (8.25, 2.0),

    'z' => (0.5, 3.0), 'x' => (1.5, 3.0), 'c' => (2.5, 3.0), 'v' => (3.5, 3.0),
    'b' => (4.5, 3.0), 'n' => (5.5, 3.0), 'm' => (6.5, 3.0),
};

/// Distance at which two keys stop contributing any similarity
const KEYBOARD_SPAN: f64 = 10.0;

/// Characters each key is commonly misread as
static CONFUSABLES: phf::Map<char, &'static str> = phf_map! {
    '0' => "Oo",
    'O' => "0o",
    'o' => "0O",
    '1' => "lI|",
    'l' => "1I|",
    'I' => "1l|",
    '|' => "1lI",
    '5' => "Ss",
    'S' => "5s",
    's' => "5S",
    '2' => "Zz",
    'Z' => "2z",
    'z' => "2Z",
    '8' => "B",
    'B' => "8",
    '6' => "Gb",
    'G' => "6",
    'b' => "6d",
    'd' => "b",
    'm' => "n",
    'n' => "m",
    'v' => "w",
    'w' => "v",
};

/// Similarity of two single keys, 0.0 if either is off the layout
pub fn key_similarity(a: char, b: char) -> f64 {
    let (a, b) = (fold(a), fold(b));
    if a == b {
        return 1.0;
    }
    match (KEYBOARD.get(&a), KEYBOARD.get(&b)) {
        (Some(&(xa, ya)), Some(&(xb, yb))) => {
            let distance = ((xa - xb).powi(2) + (ya - yb).powi(2)).sqrt();
            (1.0 - distance / KEYBOARD_SPAN).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Position-wise keyboard similarity scaled by a length-difference penalty
///
/// Returns 0.0 when either string is empty and 1.0 for identical strings.
pub fn keyboard_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    keyboard_similarity_chars(&a, &b)
}

pub(crate) fn keyboard_similarity_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let compared = a.len().min(b.len());
    let total: f64 = a
        .iter()
        .zip(b)
        .map(|(&ca, &cb)| key_similarity(ca, cb))
        .sum();

    let longest = a.len().max(b.len());
    let length_penalty = 1.0 - a.len().abs_diff(b.len()) as f64 / longest as f64;

    (total / compared as f64) * length_penalty
}

/// Whether `a` and `b` read alike: equal length and every differing
/// position is a known look-alike pair
pub fn are_visual_confusables(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    if a.chars().count() != b.chars().count() {
        return false;
    }
    a.chars()
        .zip(b.chars())
        .all(|(ca, cb)| ca == cb || is_confusable(ca, cb))
}

/// Whether `b` is listed as a look-alike of `a`
pub fn is_confusable(a: char, b: char) -> bool {
    CONFUSABLES
        .get(&a)
        .is_some_and(|alikes| alikes.contains(b))
}

/// Broad character class used for category similarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    Digit,
    Whitespace,
    Punctuation,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_alphabetic() {
            Self::Letter
        } else if c.is_numeric() {
            Self::Digit
        } else if c.is_whitespace() {
            Self::Whitespace
        } else if c.is_ascii_punctuation() {
            Self::Punctuation
        } else {
            Self::Other
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(fold(c), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Per-character comparison across several similarity notions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterMatch {
    pub character_a: char,
    pub character_b: char,
    /// 1.0 identical, 0.5 equal ignoring case
    pub exact: f64,
    pub keyboard: f64,
    pub visual: f64,
    /// 1.0 when both share a Soundex class or are both vowels
    pub phonetic: f64,
    pub category: f64,
}

impl CharacterMatch {
    /// `0.4·exact + 0.2·keyboard + 0.15·visual + 0.15·phonetic + 0.1·category`
    pub fn weighted(&self) -> f64 {
        self.exact * 0.4
            + self.keyboard * 0.2
            + self.visual * 0.15
            + self.phonetic * 0.15
            + self.category * 0.1
    }
}

/// Compare two characters
pub fn compare_chars(a: char, b: char) -> CharacterMatch {
    let exact = if a == b {
        1.0
    } else if fold(a) == fold(b) {
        0.5
    } else {
        0.0
    };

    let visual = if a == b || is_confusable(a, b) { 1.0 } else { 0.0 };

    let same_class = matches!(
        (soundex_class(a), soundex_class(b)),
        (Some(x), Some(y)) if x == y
    );
    let phonetic = if fold(a) == fold(b) || same_class || (is_vowel(a) && is_vowel(b)) {
        1.0
    } else {
        0.0
    };

    let category = if CharClass::of(a) == CharClass::of(b) { 1.0 } else { 0.0 };

    CharacterMatch {
        character_a: a,
        character_b: b,
        exact,
        keyboard: key_similarity(a, b),
        visual,
        phonetic,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn test_key_similarity() {
        assert_eq!(key_similarity('a', 'A'), 1.0);
        assert!(approx(key_similarity('q', 'w'), 0.9));
        // a (0.25, 2) and s (1.25, 2) are one key apart
        assert!(approx(key_similarity('a', 's'), 0.9));
        assert!(key_similarity('q', 'p') < key_similarity('q', 'w'));
        assert_eq!(key_similarity('a', '!'), 0.0);
    }

    #[test]
    fn test_keyboard_similarity_edges() {
        assert_eq!(keyboard_similarity("", "abc"), 0.0);
        assert_eq!(keyboard_similarity("abc", ""), 0.0);
        assert_eq!(keyboard_similarity("abc", "abc"), 1.0);
    }

    #[test]
    fn test_keyboard_similarity_adjacent_typo() {
        // one adjacent substitution over four positions
        assert!(approx(keyboard_similarity("test", "tesr"), (3.0 + 0.9) / 4.0));
    }

    #[test]
    fn test_keyboard_similarity_length_penalty() {
        // three matching positions, one extra character
        assert!(approx(keyboard_similarity("abc", "abcd"), 0.75));
    }

    #[test]
    fn test_keyboard_case_insensitive() {
        assert_eq!(keyboard_similarity("Hello", "hello"), 1.0);
    }

    #[test]
    fn test_confusables() {
        assert!(are_visual_confusables("HELL0", "HELLO"));
        assert!(are_visual_confusables("1ce", "Ice"));
        assert!(are_visual_confusables("abc", "abc"));
        assert!(are_visual_confusables("", ""));
        assert!(!are_visual_confusables("abc", "abd"));
        assert!(!are_visual_confusables("O", "0O"));
    }

    #[test]
    fn test_confusables_are_directional_where_listed() {
        assert!(is_confusable('6', 'b'));
        assert!(is_confusable('b', '6'));
        assert!(is_confusable('6', 'G'));
        // G only lists 6
        assert!(!is_confusable('d', '6'));
    }

    #[test]
    fn test_compare_chars_identical() {
        let m = compare_chars('a', 'a');
        assert!(approx(m.weighted(), 1.0));
    }

    #[test]
    fn test_compare_chars_look_alike() {
        let m = compare_chars('0', 'O');
        assert_eq!(m.exact, 0.0);
        assert_eq!(m.visual, 1.0);
        assert_eq!(m.category, 0.0);
        assert!(m.keyboard > 0.0);
    }

    #[test]
    fn test_compare_chars_case_and_sound() {
        let m = compare_chars('c', 'K');
        assert_eq!(m.exact, 0.0);
        assert_eq!(m.phonetic, 1.0);
        assert_eq!(m.category, 1.0);

        let m = compare_chars('a', 'A');
        assert_eq!(m.exact, 0.5);
        assert_eq!(m.keyboard, 1.0);
    }
}
