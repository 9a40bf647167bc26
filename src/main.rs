//! # Fuzzy Movie Ranking CLI (`movierank`)
//!
//! Ranks a movie dataset against the user's preferences and prints the
//! top matches.
//!
//! ## Usage
//!
//! ```bash
//! movierank [--config ./config/movierank.toml] [<command>]
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `movierank` | Prompt for preferences and print recommendations |
//! | `movierank recommend` | Same, with preferences optionally given as flags |
//! | `movierank stats` | Summarize a dataset file |
//!
//! ## Examples
//!
//! ```bash
//! # Fully interactive
//! movierank
//!
//! # Non-interactive, JSON with per-signal scores
//! movierank recommend --genre "Action, Thriller" --keywords heist \
//!     --min-rating 6.5 --max-runtime 130 --format json --explain
//!
//! # Inspect the dataset
//! movierank stats --dataset ./movie_dataset.csv
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use movie_ranking::config;
use movie_ranking::prompt::PreferenceOverrides;
use movie_ranking::recommend::{self, RecommendOptions};
use movie_ranking::stats;

/// Fuzzy movie ranking — score a movie dataset against your preferences.
///
/// Every movie is scored on rating, runtime, genre overlap, keyword
/// overlap, and popularity. The best matches are printed in order.
#[derive(Parser)]
#[command(
    name = "movierank",
    about = "Fuzzy movie ranking — score a movie dataset against your preferences",
    version
)]
struct Cli {
    /// Path to a configuration file (TOML).
    ///
    /// Optional. Without it every setting uses its default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the dataset against your preferences.
    ///
    /// Any preference not given as a flag is asked for interactively,
    /// in the order genre, keywords, minimum rating, maximum runtime.
    Recommend(RecommendArgs),

    /// Print a summary of a dataset file.
    ///
    /// Shows how many rows were kept and the rating and popularity
    /// maxima used for normalization.
    Stats {
        /// Dataset file. Defaults to `[dataset].path` from config.
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct RecommendArgs {
    /// Dataset file. Defaults to `[dataset].path` from config.
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Preferred genres, comma-separated.
    #[arg(long)]
    genre: Option<String>,

    /// Preferred keywords, comma-separated.
    #[arg(long)]
    keywords: Option<String>,

    /// Minimum vote average.
    #[arg(long, allow_negative_numbers = true, value_parser = parse_rating)]
    min_rating: Option<f64>,

    /// Maximum runtime in minutes.
    #[arg(long, allow_negative_numbers = true)]
    max_runtime: Option<i64>,

    /// Number of movies to show. Defaults to `[ranking].top_n` (10).
    #[arg(long)]
    limit: Option<usize>,

    /// Output format: `text` or `json`.
    #[arg(long)]
    format: Option<String>,

    /// Include the per-signal score breakdown.
    #[arg(long)]
    explain: bool,

    /// Print a dataset load summary on stderr.
    #[arg(long)]
    verbose: bool,
}

/// Parse a finite decimal for `--min-rating`.
fn parse_rating(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid rating '{}': expected a decimal number", s))?;
    if !value.is_finite() {
        return Err(format!("invalid rating '{}': must be finite", s));
    }
    Ok(value)
}

impl From<RecommendArgs> for RecommendOptions {
    fn from(args: RecommendArgs) -> Self {
        RecommendOptions {
            dataset: args.dataset,
            limit: args.limit,
            format: args.format,
            explain: args.explain,
            verbose: args.verbose,
            preferences: PreferenceOverrides {
                genre: args.genre,
                keywords: args.keywords,
                min_rating: args.min_rating,
                max_runtime: args.max_runtime,
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::Config::minimal(),
    };

    match cli.command.unwrap_or(Commands::Recommend(RecommendArgs::default())) {
        Commands::Recommend(args) => {
            recommend::run_recommend(&cfg, args.into())?;
        }
        Commands::Stats { dataset } => {
            let dataset = dataset.unwrap_or_else(|| cfg.dataset.path.clone());
            stats::run_stats(&dataset);
        }
    }

    Ok(())
}
