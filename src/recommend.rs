//! The `movierank recommend` pipeline.
//!
//! Collects preferences, loads the dataset, computes the dataset maxima
//! once, scores and ranks every movie, and prints the top of the list.

use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use movie_ranking_core::models::DatasetMaxima;
use movie_ranking_core::rank::{rank_movies, score_all};

use crate::config::{validate_format, Config};
use crate::loader;
use crate::present;
use crate::prompt::{collect_preferences, PreferenceOverrides, Prompter};

/// Command-line settings for one recommend run. `None` falls back to config.
#[derive(Debug, Clone, Default)]
pub struct RecommendOptions {
    pub dataset: Option<PathBuf>,
    pub limit: Option<usize>,
    pub format: Option<String>,
    pub explain: bool,
    pub verbose: bool,
    pub preferences: PreferenceOverrides,
}

pub fn run_recommend(config: &Config, opts: RecommendOptions) -> Result<()> {
    let format = opts
        .format
        .clone()
        .unwrap_or_else(|| config.output.format.clone());
    validate_format(&format)?;

    let limit = opts.limit.unwrap_or(config.ranking.top_n);
    if limit == 0 {
        anyhow::bail!("--limit must be >= 1");
    }
    let explain = opts.explain || config.output.explain;
    let dataset = opts
        .dataset
        .clone()
        .unwrap_or_else(|| config.dataset.path.clone());

    // Keep stdout clean for JSON consumers.
    let stdin = io::stdin();
    let prefs = if format == "json" {
        let mut prompter = Prompter::new(stdin.lock(), io::stderr());
        collect_preferences(&mut prompter, opts.preferences)?
    } else {
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        collect_preferences(&mut prompter, opts.preferences)?
    };

    let movies = loader::load_movies(&dataset);
    let maxima = DatasetMaxima::from_records(&movies);

    if opts.verbose {
        eprintln!(
            "loaded {} movies from {} (max rating {}, max popularity {})",
            movies.len(),
            dataset.display(),
            maxima.max_rating,
            maxima.max_popularity
        );
    }

    let ranked = rank_movies(score_all(&movies, &prefs, &maxima), limit);
    let recs = present::build_recommendations(&ranked, &prefs, &maxima, explain);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if format == "json" {
        present::write_json(&mut out, &recs)?;
    } else {
        present::write_text(&mut out, &recs)?;
    }
    out.flush()?;

    Ok(())
}
