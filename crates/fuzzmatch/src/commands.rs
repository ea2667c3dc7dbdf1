//! Subcommand implementations
//!
//! Each command returns the text to print so it can be tested without a
//! terminal.

use std::path::Path;

use clap::ValueEnum;
use fuzzmatch_core::fuzzy::{are_phonetically_equal, metaphone, soundex};
use fuzzmatch_core::{
    normalize, EngineConfig, FuzzyAlgorithm, FuzzyEngine, NormalizationConfig, NormalizationMode,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;

/// Named normalization preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Default,
    Aggressive,
    Minimal,
}

impl Preset {
    pub fn config(self) -> NormalizationConfig {
        match self {
            Self::Default => NormalizationConfig::default(),
            Self::Aggressive => NormalizationConfig::aggressive(),
            Self::Minimal => NormalizationConfig::minimal(),
        }
    }
}

/// Overrides for `rank` taken from the command line
#[derive(Debug, Clone, Default)]
pub struct RankOptions {
    pub max_results: Option<usize>,
    pub min_similarity: Option<f64>,
    pub algorithm: Option<FuzzyAlgorithm>,
    pub scores: bool,
}

#[derive(Debug, Serialize)]
struct PhoneticCodes<'a> {
    text: &'a str,
    soundex: String,
    metaphone: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PhoneticComparison<'a> {
    a: PhoneticCodes<'a>,
    b: PhoneticCodes<'a>,
    equal: bool,
}

fn phonetic_codes(text: &str) -> PhoneticCodes<'_> {
    PhoneticCodes {
        text,
        soundex: soundex(text),
        metaphone: metaphone(text, true),
    }
}

/// Full metric record as pretty JSON
pub fn compare(
    engine: &FuzzyEngine,
    a: &str,
    b: &str,
    algorithm: Option<FuzzyAlgorithm>,
    raw: bool,
) -> Result<String> {
    let algorithm = algorithm.unwrap_or(engine.config().algorithm);
    let result = engine.compare_with_algorithm(a, b, algorithm, !raw);
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Single score
pub fn similarity(
    engine: &FuzzyEngine,
    a: &str,
    b: &str,
    algorithm: Option<FuzzyAlgorithm>,
    raw: bool,
) -> String {
    let algorithm = algorithm.unwrap_or(engine.config().algorithm);
    let score = engine.similarity(a, b, algorithm, !raw);
    format!("{score:.6}")
}

/// Raw edit distance, `-1` for an undefined Hamming distance
pub fn distance(
    engine: &FuzzyEngine,
    a: &str,
    b: &str,
    algorithm: Option<FuzzyAlgorithm>,
) -> String {
    let algorithm = algorithm.unwrap_or(FuzzyAlgorithm::Levenshtein);
    engine.edit_distance(a, b, algorithm).to_string()
}

/// Read candidates from a file, one per line, skipping blank lines
pub fn read_candidates(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let candidates: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    debug!(path = %path.display(), count = candidates.len(), "Read candidates");
    Ok(candidates)
}

/// Ranked candidates, one per line or as scored JSON
pub fn rank(
    engine: &FuzzyEngine,
    query: &str,
    candidates: &[String],
    options: &RankOptions,
) -> Result<String> {
    let config = engine.config();
    let max_results = options.max_results.unwrap_or(config.max_results);
    let min_similarity = options.min_similarity.unwrap_or(config.min_similarity);
    let algorithm = options.algorithm.unwrap_or(config.algorithm);

    let matches =
        engine.find_best_matches_scored(query, candidates, max_results, min_similarity, algorithm);

    info!(
        query = query,
        candidates = candidates.len(),
        matches = matches.len(),
        "Ranked"
    );

    if options.scores {
        return Ok(serde_json::to_string_pretty(&matches)?);
    }

    Ok(matches
        .into_iter()
        .map(|m| m.value)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Normalized text for a single mode or a preset
pub fn normalize_text(
    text: &str,
    mode: Option<NormalizationMode>,
    preset: Option<Preset>,
) -> String {
    match (mode, preset) {
        (Some(mode), _) => fuzzmatch_core::normalize::normalize_with_mode(text, mode),
        (None, Some(preset)) => normalize(text, &preset.config()),
        (None, None) => normalize(text, &NormalizationConfig::default()),
    }
}

/// Phonetic codes for one text, or a comparison for two
pub fn phonetic(text: &str, other: Option<&str>) -> Result<String> {
    let json = match other {
        Some(other) => serde_json::to_string_pretty(&PhoneticComparison {
            a: phonetic_codes(text),
            b: phonetic_codes(other),
            equal: are_phonetically_equal(text, other),
        })?,
        None => serde_json::to_string_pretty(&phonetic_codes(text))?,
    };
    Ok(json)
}

/// Build the engine for a loaded configuration
pub fn engine(config: EngineConfig) -> FuzzyEngine {
    FuzzyEngine::with_config(config)
}
