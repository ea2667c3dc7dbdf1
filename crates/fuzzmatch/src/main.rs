use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fuzzmatch::commands::{self, Preset, RankOptions};
use fuzzmatch::{config, logging, Result};
use fuzzmatch_core::{FuzzyAlgorithm, NormalizationMode};
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "fuzzmatch")]
#[command(about = "Fuzzy string comparison and ranking")]
#[command(version)]
struct Cli {
    /// JSON engine configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every metric for a pair of strings as JSON
    Compare {
        a: String,
        b: String,
        /// Algorithm reported as best_similarity
        #[arg(short, long)]
        algorithm: Option<FuzzyAlgorithm>,
        /// Compare the strings as given, without normalization
        #[arg(long)]
        raw: bool,
    },

    /// Print a single similarity score
    Similarity {
        a: String,
        b: String,
        #[arg(short, long)]
        algorithm: Option<FuzzyAlgorithm>,
        #[arg(long)]
        raw: bool,
    },

    /// Print the raw edit distance (Levenshtein unless told otherwise)
    Distance {
        a: String,
        b: String,
        #[arg(short, long)]
        algorithm: Option<FuzzyAlgorithm>,
    },

    /// Rank candidates against a query
    Rank {
        query: String,
        candidates: Vec<String>,
        /// Read additional candidates from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(short = 'n', long)]
        max_results: Option<usize>,
        #[arg(short, long)]
        min_similarity: Option<f64>,
        #[arg(short, long)]
        algorithm: Option<FuzzyAlgorithm>,
        /// Print scores as JSON
        #[arg(long)]
        scores: bool,
    },

    /// Normalize text
    Normalize {
        text: String,
        /// Single normalization step
        #[arg(short, long, conflicts_with = "preset")]
        mode: Option<NormalizationMode>,
        #[arg(short, long, value_enum)]
        preset: Option<Preset>,
    },

    /// Print Soundex and Metaphone codes
    Phonetic { text: String, other: Option<String> },
}

fn run(cli: Cli) -> Result<String> {
    let config = config::load(cli.config.as_deref())?;
    debug!(?config, "Engine configuration");
    let engine = commands::engine(config);

    match cli.command {
        Command::Compare {
            a,
            b,
            algorithm,
            raw,
        } => commands::compare(&engine, &a, &b, algorithm, raw),
        Command::Similarity {
            a,
            b,
            algorithm,
            raw,
        } => Ok(commands::similarity(&engine, &a, &b, algorithm, raw)),
        Command::Distance { a, b, algorithm } => Ok(commands::distance(&engine, &a, &b, algorithm)),
        Command::Rank {
            query,
            mut candidates,
            file,
            max_results,
            min_similarity,
            algorithm,
            scores,
        } => {
            if let Some(path) = file {
                candidates.extend(commands::read_candidates(&path)?);
            }
            let options = RankOptions {
                max_results,
                min_similarity,
                algorithm,
                scores,
            };
            commands::rank(&engine, &query, &candidates, &options)
        }
        Command::Normalize { text, mode, preset } => {
            Ok(commands::normalize_text(&text, mode, preset))
        }
        Command::Phonetic { text, other } => commands::phonetic(&text, other.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
