//! Phonetic codes
//!
//! Soundex maps a word to its first letter plus three consonant-class
//! digits. Metaphone here is a simplified single pass that yields a primary
//! code and, when `TH` is involved, a secondary code. Both are tuned for
//! common English words and make no claim beyond that.

use phf::phf_map;

/// Consonant classes. Vowels and H, W, Y are absent and never coded.
static SOUNDEX: phf::Map<char, char> = phf_map! {
    'B' => '1', 'F' => '1', 'P' => '1', 'V' => '1',
    'C' => '2', 'G' => '2', 'J' => '2', 'K' => '2',
    'Q' => '2', 'S' => '2', 'X' => '2', 'Z' => '2',
    'D' => '3', 'T' => '3',
    'L' => '4',
    'M' => '5', 'N' => '5',
    'R' => '6',
};

const SOUNDEX_LEN: usize = 4;
const METAPHONE_LEN: usize = 4;

/// Soundex digit class of a letter, case-insensitive
pub fn soundex_class(c: char) -> Option<char> {
    SOUNDEX.get(&c.to_ascii_uppercase()).copied()
}

/// Four-character Soundex code, `"0000"` for empty input
///
/// The first character is kept (uppercased) as-is. A digit equal to the
/// previous emitted digit is dropped; a non-letter in between resets that,
/// an uncoded letter does not.
pub fn soundex(text: &str) -> String {
    let mut chars = text.chars().flat_map(char::to_uppercase);

    let Some(first) = chars.next() else {
        return "0".repeat(SOUNDEX_LEN);
    };

    let mut code = String::with_capacity(SOUNDEX_LEN);
    code.push(first);

    let mut last = '0';
    for c in chars {
        if code.chars().count() >= SOUNDEX_LEN {
            break;
        }
        match SOUNDEX.get(&c) {
            Some(&digit) => {
                if digit != last {
                    code.push(digit);
                    last = digit;
                }
            }
            None if !c.is_alphabetic() => last = '0',
            None => {}
        }
    }

    while code.chars().count() < SOUNDEX_LEN {
        code.push('0');
    }
    code
}

/// Primary and secondary code under construction
#[derive(Default)]
struct Codes {
    primary: String,
    secondary: String,
}

impl Codes {
    fn push(&mut self, code: &str) {
        self.primary.push_str(code);
        self.secondary.push_str(code);
    }

    fn push_split(&mut self, primary: &str, secondary: &str) {
        self.primary.push_str(primary);
        self.secondary.push_str(secondary);
    }

    fn is_full(&self) -> bool {
        self.primary.chars().count() >= METAPHONE_LEN
    }
}

/// Simplified double Metaphone
///
/// Returns `[primary]`, or `[primary, secondary]` when `double` is set and
/// the codes differ. Empty input yields `[""]`. A multi-letter code emitted
/// at the limit may leave the primary slightly longer than four characters.
pub fn metaphone(text: &str, double: bool) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let word: Vec<char> = text.chars().flat_map(char::to_uppercase).collect();
    let len = word.len();
    let at = |i: usize| word.get(i).copied();

    let mut codes = Codes::default();
    let mut pos = 0usize;

    if len > 1 {
        match (word[0], word[1]) {
            ('G', 'N') | ('K', 'N') | ('P', 'N') | ('W', 'R') => pos = 1,
            ('X', _) => {
                codes.push("S");
                pos = 1;
            }
            _ => {}
        }
    }

    while pos < len && !codes.is_full() {
        let next = at(pos + 1);

        match word[pos] {
            c @ ('A' | 'E' | 'I' | 'O' | 'U' | 'Y') => {
                if pos == 0 {
                    codes.push(c.encode_utf8(&mut [0; 4]));
                }
            }
            'B' => {
                codes.push("B");
                if next == Some('B') {
                    pos += 1;
                }
            }
            'C' => match next {
                Some('H') => {
                    codes.push("X");
                    pos += 1;
                }
                Some('I' | 'E' | 'Y') => codes.push("S"),
                _ => codes.push("K"),
            },
            'D' => codes.push("T"),
            'G' => {
                if next == Some('H') {
                    pos += 1;
                }
                codes.push("K");
            }
            'H' => {
                let after_break = pos == 0 || !word[pos - 1].is_alphabetic();
                let before_letter = next.is_some_and(char::is_alphabetic);
                if after_break && before_letter {
                    codes.push("H");
                }
            }
            'P' => {
                if next == Some('H') {
                    codes.push("F");
                    pos += 1;
                } else {
                    codes.push("P");
                }
            }
            'Q' => codes.push("K"),
            'T' => {
                if next == Some('H') {
                    codes.push_split("0", "T");
                    pos += 1;
                } else {
                    codes.push("T");
                }
            }
            'V' => codes.push("F"),
            'X' => codes.push("KS"),
            'Z' => codes.push("S"),
            c @ ('F' | 'J' | 'K' | 'L' | 'M' | 'N' | 'R' | 'S' | 'W') => {
                codes.push(c.encode_utf8(&mut [0; 4]));
            }
            _ => {}
        }

        pos += 1;
    }

    let Codes { primary, secondary } = codes;
    if double && secondary != primary {
        vec![primary, secondary]
    } else {
        vec![primary]
    }
}

/// Whether any double-Metaphone code of `a` equals any code of `b`
pub fn metaphone_match(a: &str, b: &str) -> bool {
    let codes_b = metaphone(b, true);
    metaphone(a, true).iter().any(|code| codes_b.contains(code))
}

/// Soundex codes agree, or the Metaphone codes overlap
pub fn are_phonetically_equal(a: &str, b: &str) -> bool {
    soundex(a) == soundex(b) || metaphone_match(a, b)
}
