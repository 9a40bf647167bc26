//! Scoring every record and selecting the top of the list.
//!
//! # Ranking Algorithm
//!
//! 1. Compute [`DatasetMaxima`] once over the full dataset.
//! 2. Score each record in load order.
//! 3. Stable sort by score, descending. Ties keep load order.
//! 4. Truncate to `limit`.

use std::cmp::Ordering;

use crate::models::{DatasetMaxima, MovieRecord, ScoredMovie, UserPreferences};
use crate::score::score_movie;

/// Number of recommendations shown when nothing else is configured.
pub const DEFAULT_LIMIT: usize = 10;

/// Score every record against `prefs`, preserving load order.
pub fn score_all<'a>(
    records: &'a [MovieRecord],
    prefs: &UserPreferences,
    maxima: &DatasetMaxima,
) -> Vec<ScoredMovie<'a>> {
    records
        .iter()
        .map(|movie| ScoredMovie {
            movie,
            score: score_movie(movie, prefs, maxima),
        })
        .collect()
}

/// Order `scored` by score (desc) and keep the first `limit` entries.
///
/// `Vec::sort_by` is stable, so equal scores stay in the order they came
/// in. Scores that cannot be compared are treated as equal.
pub fn rank_movies(mut scored: Vec<ScoredMovie<'_>>, limit: usize) -> Vec<ScoredMovie<'_>> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored
}

/// Full pipeline over an in-memory dataset: maxima, scores, ranking.
pub fn recommend<'a>(
    records: &'a [MovieRecord],
    prefs: &UserPreferences,
    limit: usize,
) -> Vec<ScoredMovie<'a>> {
    let maxima = DatasetMaxima::from_records(records);
    rank_movies(score_all(records, prefs, &maxima), limit)
}
