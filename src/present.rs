//! Rendering of ranked recommendations.
//!
//! Two output shapes:
//!
//! - **text**: one labelled block per movie, for people.
//! - **json**: an array of [`Recommendation`] objects, for scripts.
//!
//! Neither influences the ranking; both take the already ranked list.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use movie_ranking_core::models::{DatasetMaxima, ScoredMovie, UserPreferences};
use movie_ranking_core::score::{score_breakdown, ScoreBreakdown, ScoreWeights};

const SEPARATOR: &str = "-----------------------------------------------------";

/// A ranked movie in the shape written by `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub rank: usize,
    pub title: String,
    pub original_title: String,
    pub genres: String,
    pub keywords: String,
    pub overview: String,
    pub homepage: String,
    pub vote_average: f64,
    pub vote_count: String,
    pub popularity: f64,
    pub release_date: String,
    pub runtime: u32,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<ScoreBreakdown>,
}

/// Build display rows, attaching a per-signal breakdown when `explain` is set.
pub fn build_recommendations(
    ranked: &[ScoredMovie<'_>],
    prefs: &UserPreferences,
    maxima: &DatasetMaxima,
    explain: bool,
) -> Vec<Recommendation> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, scored)| {
            let m = scored.movie;
            Recommendation {
                rank: i + 1,
                title: m.title.clone(),
                original_title: m.original_title.clone(),
                genres: m.genres.clone(),
                keywords: m.keywords.clone(),
                overview: m.overview.clone(),
                homepage: m.homepage.clone(),
                vote_average: m.vote_average,
                vote_count: m.vote_count.clone(),
                popularity: m.popularity,
                release_date: m.release_date.clone(),
                runtime: m.runtime,
                score: scored.score,
                explain: explain
                    .then(|| score_breakdown(m, prefs, maxima, &ScoreWeights::DEFAULT)),
            }
        })
        .collect()
}

pub fn write_text<W: Write>(out: &mut W, recs: &[Recommendation]) -> Result<()> {
    if recs.is_empty() {
        writeln!(out, "No recommendations.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Top {} movie recommendations:", recs.len())?;
    writeln!(out)?;

    for rec in recs {
        writeln!(out, "Movie #{}", rec.rank)?;
        writeln!(out, "Title: {}", rec.title)?;
        if !rec.original_title.is_empty() && rec.original_title != rec.title {
            writeln!(out, "Original Title: {}", rec.original_title)?;
        }
        writeln!(out, "Genres: {}", rec.genres)?;
        writeln!(out, "Keywords: {}", rec.keywords)?;
        writeln!(out, "Overview: {}", rec.overview)?;
        writeln!(out, "Homepage: {}", rec.homepage)?;
        writeln!(out, "Vote Average: {}", rec.vote_average)?;
        writeln!(out, "Vote Count: {}", rec.vote_count)?;
        writeln!(out, "Popularity: {}", rec.popularity)?;
        writeln!(out, "Release Date: {}", rec.release_date)?;
        writeln!(out, "Runtime: {} mins", rec.runtime)?;
        writeln!(out, "Fuzzy Score: {:.4}", rec.score)?;
        if let Some(ref b) = rec.explain {
            writeln!(
                out,
                "  rating={:.3} runtime={:.3} genre={:.3} keyword={:.3} popularity={:.3}",
                b.rating, b.runtime, b.genre, b.keyword, b.popularity
            )?;
        }
        writeln!(out, "{}", SEPARATOR)?;
    }

    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, recs: &[Recommendation]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, recs)?;
    writeln!(out)?;
    Ok(())
}
