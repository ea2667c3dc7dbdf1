//! Text normalization
//!
//! Stateless cleanup applied before comparison. Every operation is total:
//! characters a step does not understand pass through unchanged.
//!
//! [`normalize`] applies the enabled switches of a [`NormalizationConfig`]
//! in a fixed order so the output does not depend on which combination is
//! enabled:
//!
//! 1. accent folding
//! 2. case folding
//! 3. punctuation stripping
//! 4. number stripping
//! 5. whitespace (trim, then collapse)
//!
//! # Example
//!
//! ```rust
//! use fuzzmatch_core::normalize::{normalize, NormalizationConfig};
//!
//! let text = normalize("  Crème   BRÛLÉE ", &NormalizationConfig::default());
//! assert_eq!(text, "creme brulee");
//! ```

use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Latin-1 Supplement letters folded to their ASCII base letter.
static ACCENTS: phf::Map<char, char> = phf_map! {
    // Lowercase
    'à' => 'a', 'á' => 'a', 'â' => 'a', 'ã' => 'a', 'ä' => 'a', 'å' => 'a', 'æ' => 'a',
    'ç' => 'c',
    'è' => 'e', 'é' => 'e', 'ê' => 'e', 'ë' => 'e',
    'ì' => 'i', 'í' => 'i', 'î' => 'i', 'ï' => 'i',
    'ñ' => 'n',
    'ò' => 'o', 'ó' => 'o', 'ô' => 'o', 'õ' => 'o', 'ö' => 'o', 'ø' => 'o',
    'ù' => 'u', 'ú' => 'u', 'û' => 'u', 'ü' => 'u',
    'ý' => 'y', 'ÿ' => 'y',

    // Uppercase
    'À' => 'A', 'Á' => 'A', 'Â' => 'A', 'Ã' => 'A', 'Ä' => 'A', 'Å' => 'A', 'Æ' => 'A',
    'Ç' => 'C',
    'È' => 'E', 'É' => 'E', 'Ê' => 'E', 'Ë' => 'E',
    'Ì' => 'I', 'Í' => 'I', 'Î' => 'I', 'Ï' => 'I',
    'Ñ' => 'N',
    'Ò' => 'O', 'Ó' => 'O', 'Ô' => 'O', 'Õ' => 'O', 'Ö' => 'O', 'Ø' => 'O',
    'Ù' => 'U', 'Ú' => 'U', 'Û' => 'U', 'Ü' => 'U',
    'Ý' => 'Y', 'Ÿ' => 'Y',
};

/// Independent normalization switches
///
/// No switch depends on another; any combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Fold to lowercase (ignored when `preserve_case` is set)
    pub lowercase: bool,
    /// Strip leading and trailing whitespace
    pub trim_whitespace: bool,
    /// Replace every whitespace run with a single space
    pub collapse_whitespace: bool,
    /// Fold Latin-1 accented letters to their base letter
    pub remove_accents: bool,
    /// Drop everything that is not alphanumeric or whitespace
    pub remove_punctuation: bool,
    /// Drop numeric characters
    pub remove_numbers: bool,
    /// Keep the original case even if `lowercase` is set
    pub preserve_case: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            trim_whitespace: true,
            collapse_whitespace: true,
            remove_accents: true,
            remove_punctuation: false,
            remove_numbers: false,
            preserve_case: false,
        }
    }
}

impl NormalizationConfig {
    /// Maximum normalization: default plus punctuation and number stripping
    pub fn aggressive() -> Self {
        Self {
            remove_punctuation: true,
            remove_numbers: true,
            ..Self::default()
        }
    }

    /// Trim only, case preserved
    pub fn minimal() -> Self {
        Self {
            lowercase: false,
            trim_whitespace: true,
            collapse_whitespace: false,
            remove_accents: false,
            remove_punctuation: false,
            remove_numbers: false,
            preserve_case: true,
        }
    }

    fn folds_case(&self) -> bool {
        self.lowercase && !self.preserve_case
    }
}

/// Single-step normalization shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    None,
    Lowercase,
    Uppercase,
    TrimWhitespace,
    RemoveAccents,
    /// The default preset
    Full,
}

/// Error returned when a mode name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown normalization mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for NormalizationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "none" => Ok(Self::None),
            "lowercase" | "lower" => Ok(Self::Lowercase),
            "uppercase" | "upper" => Ok(Self::Uppercase),
            "trim" | "trim_whitespace" => Ok(Self::TrimWhitespace),
            "remove_accents" | "accents" => Ok(Self::RemoveAccents),
            "full" => Ok(Self::Full),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::TrimWhitespace => "trim_whitespace",
            Self::RemoveAccents => "remove_accents",
            Self::Full => "full",
        };
        f.write_str(name)
    }
}

/// Normalize with the given configuration
pub fn normalize(text: &str, config: &NormalizationConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = text.to_string();

    if config.remove_accents {
        result = remove_accents(&result);
    }

    if config.folds_case() {
        result = to_lowercase(&result);
    }

    if config.remove_punctuation {
        result = remove_punctuation(&result, true);
    }

    if config.remove_numbers {
        result = remove_numbers(&result);
    }

    if config.trim_whitespace {
        result = trim_whitespace(&result);
    }

    if config.collapse_whitespace {
        result = collapse_whitespace(&result);
    }

    result
}

/// Normalize with the default preset
pub fn normalize_default(text: &str) -> String {
    normalize(text, &NormalizationConfig::default())
}

/// Apply a single normalization mode
pub fn normalize_with_mode(text: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::None => text.to_string(),
        NormalizationMode::Lowercase => to_lowercase(text),
        NormalizationMode::Uppercase => to_uppercase(text),
        NormalizationMode::TrimWhitespace => trim_whitespace(text),
        NormalizationMode::RemoveAccents => remove_accents(text),
        NormalizationMode::Full => normalize_default(text),
    }
}

#[inline]
pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

#[inline]
pub fn to_uppercase(text: &str) -> String {
    text.to_uppercase()
}

#[inline]
pub fn trim_whitespace(text: &str) -> String {
    text.trim().to_string()
}

/// Replace each run of whitespace with a single ASCII space
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last_was_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
        } else {
            result.push(c);
            last_was_space = false;
        }
    }

    result
}

pub fn remove_accents(text: &str) -> String {
    text.chars().map(remove_accent).collect()
}

/// Keep alphanumeric characters, and whitespace when `keep_spaces` is set
pub fn remove_punctuation(text: &str, keep_spaces: bool) -> String {
    keep_alphanumeric(text, keep_spaces)
}

pub fn remove_numbers(text: &str) -> String {
    text.chars().filter(|c| !c.is_numeric()).collect()
}

pub fn keep_alphanumeric(text: &str, keep_spaces: bool) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || (keep_spaces && c.is_whitespace()))
        .collect()
}

/// Normalize a single character
///
/// Returns an empty string when the character is filtered out, and may
/// return more than one character when case folding expands it.
pub fn normalize_char(c: char, config: &NormalizationConfig) -> String {
    let c = if config.remove_accents {
        remove_accent(c)
    } else {
        c
    };

    let folded: String = if config.folds_case() {
        c.to_lowercase().collect()
    } else {
        c.to_string()
    };

    let mut result = String::with_capacity(folded.len());
    for c in folded.chars() {
        if config.remove_punctuation && !(c.is_alphanumeric() || c.is_whitespace()) {
            continue;
        }
        if config.remove_numbers && c.is_numeric() {
            continue;
        }
        if config.collapse_whitespace && c.is_whitespace() {
            result.push(' ');
            continue;
        }
        result.push(c);
    }
    result
}

/// Fold one accented letter; anything outside the table is returned as is
#[inline]
pub fn remove_accent(c: char) -> char {
    ACCENTS.get(&c).copied().unwrap_or(c)
}

#[inline]
pub fn is_accented(c: char) -> bool {
    ACCENTS.contains_key(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize("", &NormalizationConfig::default()), "");
        assert_eq!(normalize("", &NormalizationConfig::aggressive()), "");
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(normalize_default("  Héllo   WÖRLD  "), "hello world");
    }

    #[test]
    fn test_aggressive_preset() {
        let config = NormalizationConfig::aggressive();
        assert_eq!(normalize("Agent 007, licensed!", &config), "agent licensed");
    }

    #[test]
    fn test_minimal_preset() {
        let config = NormalizationConfig::minimal();
        assert_eq!(normalize("  Café  Au Lait ", &config), "Café  Au Lait");
    }

    #[test]
    fn test_preserve_case_wins_over_lowercase() {
        let config = NormalizationConfig {
            preserve_case: true,
            ..NormalizationConfig::default()
        };
        assert_eq!(normalize("ÉCOLE", &config), "ECOLE");
    }

    #[test]
    fn test_accent_table() {
        assert_eq!(
            remove_accents("àáâãäåæçèéêëìíîïñòóôõöøùúûüýÿ"),
            "aaaaaaaceeeeiiiinoooooouuuuyy"
        );
        assert_eq!(remove_accents("ÀÆÇÑØÜÝŸ"), "AACNOUYY");
        assert!(is_accented('é'));
        assert!(!is_accented('e'));
        // Outside Latin-1 passes through
        assert_eq!(remove_accent('ł'), 'ł');
    }

    #[test]
    fn test_punctuation_keeps_spaces() {
        assert_eq!(remove_punctuation("a-b, c!", true), "ab c");
        assert_eq!(remove_punctuation("a-b, c!", false), "abc");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(remove_numbers("r2d2 c3po"), "rd cpo");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a \t\n b"), "a b");
        assert_eq!(collapse_whitespace("  a  "), " a ");
    }

    #[test]
    fn test_modes() {
        assert_eq!(normalize_with_mode("AbC", NormalizationMode::None), "AbC");
        assert_eq!(normalize_with_mode("AbC", NormalizationMode::Lowercase), "abc");
        assert_eq!(normalize_with_mode("AbC", NormalizationMode::Uppercase), "ABC");
        assert_eq!(normalize_with_mode(" x ", NormalizationMode::TrimWhitespace), "x");
        assert_eq!(normalize_with_mode("Ém", NormalizationMode::RemoveAccents), "Em");
        assert_eq!(normalize_with_mode(" Ém  X ", NormalizationMode::Full), "em x");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("full".parse::<NormalizationMode>(), Ok(NormalizationMode::Full));
        assert_eq!(
            "remove-accents".parse::<NormalizationMode>(),
            Ok(NormalizationMode::RemoveAccents)
        );
        assert!("sideways".parse::<NormalizationMode>().is_err());
    }

    #[test]
    fn test_normalize_char() {
        let config = NormalizationConfig::aggressive();
        assert_eq!(normalize_char('É', &config), "e");
        assert_eq!(normalize_char('!', &config), "");
        assert_eq!(normalize_char('7', &config), "");
        assert_eq!(normalize_char('\t', &config), " ");
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: NormalizationConfig =
            serde_json::from_str(r#"{"remove_numbers": true}"#).unwrap();
        assert!(config.remove_numbers);
        assert!(config.lowercase);
        assert!(!config.remove_punctuation);
    }
}
