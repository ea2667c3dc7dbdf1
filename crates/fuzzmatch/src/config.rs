//! Engine configuration loading
//!
//! Layers, later wins:
//!
//! 1. [`EngineConfig::default`]
//! 2. JSON file given with `--config` (missing keys keep their defaults)
//! 3. Environment variables:
//!    - `FUZZMATCH_MIN_SIMILARITY`: minimum score 0.0-1.0
//!    - `FUZZMATCH_MAX_RESULTS`: result limit for `rank`
//!    - `FUZZMATCH_ALGORITHM`: algorithm name, e.g. `jaro_winkler`
//!    - `FUZZMATCH_NGRAM_SIZE`: n-gram size
//! 4. Command-line flags (applied by the caller)

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use fuzzmatch_core::{EngineConfig, FuzzyAlgorithm};
use tracing::debug;

use crate::error::{Error, Result};

pub const ENV_MIN_SIMILARITY: &str = "FUZZMATCH_MIN_SIMILARITY";
pub const ENV_MAX_RESULTS: &str = "FUZZMATCH_MAX_RESULTS";
pub const ENV_ALGORITHM: &str = "FUZZMATCH_ALGORITHM";
pub const ENV_NGRAM_SIZE: &str = "FUZZMATCH_NGRAM_SIZE";

/// Load configuration from an optional file and the process environment
pub fn load(path: Option<&Path>) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => from_file(path)?,
        None => EngineConfig::default(),
    };
    apply_env(&mut config, |key| std::env::var(key).ok())?;
    validate(&config)?;
    Ok(config)
}

/// Read a JSON config file
pub fn from_file(path: &Path) -> Result<EngineConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: EngineConfig = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Apply overrides from `lookup`, usually the process environment
pub fn apply_env<F>(config: &mut EngineConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = parse_var::<_, f64>(&lookup, ENV_MIN_SIMILARITY)? {
        config.min_similarity = value;
    }
    if let Some(value) = parse_var::<_, usize>(&lookup, ENV_MAX_RESULTS)? {
        config.max_results = value;
    }
    if let Some(value) = parse_var::<_, FuzzyAlgorithm>(&lookup, ENV_ALGORITHM)? {
        config.algorithm = value;
    }
    if let Some(value) = parse_var::<_, usize>(&lookup, ENV_NGRAM_SIZE)? {
        config.ngram_size = value;
    }
    Ok(())
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::parse(key, e)),
        _ => Ok(None),
    }
}

/// Reject values the engine cannot use
pub fn validate(config: &EngineConfig) -> Result<()> {
    if !(0.0..=1.0).contains(&config.min_similarity) {
        return Err(Error::Config(format!(
            "min_similarity must be within 0.0-1.0, got {}",
            config.min_similarity
        )));
    }
    if !(0.0..=0.25).contains(&config.prefix_scale) {
        return Err(Error::Config(format!(
            "prefix_scale must be within 0.0-0.25, got {}",
            config.prefix_scale
        )));
    }
    Ok(())
}
