//! Fuzzy suitability scoring.
//!
//! Every movie gets five independent signals, each normalized to `[0, 1]`:
//!
//! | Signal | Normalization |
//! |--------|---------------|
//! | rating | `(vote_average - min_rating) / (max_rating - min_rating)`, capped at 1 |
//! | runtime | `(max_runtime - runtime) / max_runtime`; shorter is better |
//! | genre | matched movie tokens / distinct desired genres |
//! | keyword | matched movie tokens / distinct desired keywords |
//! | popularity | `popularity / max_popularity`, capped at 1 |
//!
//! The final score is the weighted sum using [`ScoreWeights::DEFAULT`].
//!
//! Scoring is a pure function of the movie, the preferences, and the
//! precomputed [`DatasetMaxima`]. Nothing is cached between calls.

use serde::Serialize;
use std::collections::HashSet;

use crate::models::{DatasetMaxima, MovieRecord, UserPreferences};

/// Per-signal weights for the final score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub rating: f64,
    pub runtime: f64,
    pub genre: f64,
    pub keyword: f64,
    pub popularity: f64,
}

impl ScoreWeights {
    /// Hand-tuned weights. They sum to 1.7, not 1.0, so a total can
    /// exceed 1.
    // TODO: the 1.7 sum looks accidental. Compare against a normalized
    // weighting once there is a labelled set of good recommendations.
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        rating: 0.3,
        runtime: 0.2,
        genre: 0.5,
        keyword: 0.4,
        popularity: 0.3,
    };
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The five normalized signals for one movie plus their weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub rating: f64,
    pub runtime: f64,
    pub genre: f64,
    pub keyword: f64,
    pub popularity: f64,
    pub total: f64,
}

/// Rating signal.
///
/// 0 when the movie is below `min_rating`, or when the observed scale is
/// degenerate (`max_rating <= min_rating`).
pub fn rating_score(vote_average: f64, min_rating: f64, max_rating: f64) -> f64 {
    if vote_average < min_rating || max_rating <= min_rating {
        return 0.0;
    }
    ((vote_average - min_rating) / (max_rating - min_rating)).min(1.0)
}

/// Runtime signal. Linear from 1.0 at 0 minutes down to 0.0 at the ceiling.
///
/// 0 when the movie runs longer than `max_runtime` or when `max_runtime`
/// is not positive.
pub fn runtime_score(runtime: u32, max_runtime: i64) -> f64 {
    let runtime = i64::from(runtime);
    if max_runtime <= 0 || runtime > max_runtime {
        return 0.0;
    }
    (max_runtime - runtime) as f64 / max_runtime as f64
}

/// Distinct, lowercased, non-empty entries of a comma-separated preference.
pub fn desired_terms(preference: &str) -> HashSet<String> {
    preference
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Overlap between a whitespace-separated tag field and the desired terms.
///
/// Every movie token found in `desired` counts once, so a tag repeated in
/// the movie field counts each time it appears. The result is divided by
/// the number of distinct desired terms; with no desired terms it is 0.
pub fn overlap_score(tags: &str, desired: &HashSet<String>) -> f64 {
    if desired.is_empty() {
        return 0.0;
    }
    let matched = tags
        .split_whitespace()
        .filter(|tok| desired.contains(&tok.to_ascii_lowercase()))
        .count();
    (matched as f64 / desired.len() as f64).min(1.0)
}

/// Popularity signal, relative to the most popular movie in the dataset.
pub fn popularity_score(popularity: f64, max_popularity: f64) -> f64 {
    if max_popularity > 0.0 {
        (popularity / max_popularity).min(1.0)
    } else {
        0.0
    }
}

/// Compute every signal for `movie` and combine them with `weights`.
pub fn score_breakdown(
    movie: &MovieRecord,
    prefs: &UserPreferences,
    maxima: &DatasetMaxima,
    weights: &ScoreWeights,
) -> ScoreBreakdown {
    let rating = rating_score(movie.vote_average, prefs.min_rating, maxima.max_rating);
    let runtime = runtime_score(movie.runtime, prefs.max_runtime);
    let genre = overlap_score(&movie.genres, &desired_terms(&prefs.preferred_genre));
    let keyword = overlap_score(&movie.keywords, &desired_terms(&prefs.preferred_keywords));
    let popularity = popularity_score(movie.popularity, maxima.max_popularity);

    let total = weights.rating * rating
        + weights.runtime * runtime
        + weights.genre * genre
        + weights.keyword * keyword
        + weights.popularity * popularity;

    ScoreBreakdown {
        rating,
        runtime,
        genre,
        keyword,
        popularity,
        total,
    }
}

/// Fuzzy score of `movie` with the default weights.
pub fn score_movie(movie: &MovieRecord, prefs: &UserPreferences, maxima: &DatasetMaxima) -> f64 {
    score_breakdown(movie, prefs, maxima, &ScoreWeights::DEFAULT).total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(vote_average: f64, runtime: u32, genres: &str, popularity: f64) -> MovieRecord {
        MovieRecord {
            title: genres.to_string(),
            genres: genres.to_string(),
            vote_average,
            runtime,
            popularity,
            ..Default::default()
        }
    }

    fn prefs(genre: &str, keywords: &str, min_rating: f64, max_runtime: i64) -> UserPreferences {
        UserPreferences {
            preferred_genre: genre.to_string(),
            preferred_keywords: keywords.to_string(),
            min_rating,
            max_runtime,
        }
    }

    fn in_unit(x: f64) -> bool {
        (0.0..=1.0).contains(&x)
    }

    #[test]
    fn test_default_weights_are_literal() {
        let w = ScoreWeights::default();
        assert_eq!(w.rating, 0.3);
        assert_eq!(w.runtime, 0.2);
        assert_eq!(w.genre, 0.5);
        assert_eq!(w.keyword, 0.4);
        assert_eq!(w.popularity, 0.3);
        let sum = w.rating + w.runtime + w.genre + w.keyword + w.popularity;
        assert!((sum - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_rating_below_minimum_is_zero() {
        assert_eq!(rating_score(4.9, 5.0, 9.0), 0.0);
    }

    #[test]
    fn test_rating_degenerate_scale_is_zero() {
        assert_eq!(rating_score(9.0, 9.0, 9.0), 0.0);
        assert_eq!(rating_score(9.0, 9.5, 9.0), 0.0);
        assert_eq!(rating_score(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_rating_linear_and_capped() {
        assert!((rating_score(5.0, 5.0, 9.0) - 0.0).abs() < 1e-9);
        assert!((rating_score(7.0, 5.0, 9.0) - 0.5).abs() < 1e-9);
        assert!((rating_score(9.0, 5.0, 9.0) - 1.0).abs() < 1e-9);
        // A movie above the supplied maximum still caps at 1.
        assert!((rating_score(10.0, 5.0, 9.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rating_monotonic_in_vote_average() {
        let mut prev = 0.0;
        for tenth in 0..=100 {
            let s = rating_score(tenth as f64 / 10.0, 3.0, 8.0);
            assert!(s >= prev, "rating score decreased at {}", tenth);
            assert!(in_unit(s));
            prev = s;
        }
    }

    #[test]
    fn test_runtime_bounds() {
        assert!((runtime_score(0, 120) - 1.0).abs() < 1e-9);
        assert!((runtime_score(90, 120) - 0.25).abs() < 1e-9);
        assert_eq!(runtime_score(120, 120), 0.0);
        assert_eq!(runtime_score(121, 120), 0.0);
    }

    #[test]
    fn test_runtime_zero_or_negative_ceiling() {
        assert_eq!(runtime_score(0, 0), 0.0);
        assert_eq!(runtime_score(90, 0), 0.0);
        assert_eq!(runtime_score(0, -10), 0.0);
    }

    #[test]
    fn test_runtime_monotonic_non_increasing() {
        let mut prev = f64::INFINITY;
        for runtime in 0..=200 {
            let s = runtime_score(runtime, 150);
            assert!(s <= prev, "runtime score increased at {}", runtime);
            assert!(in_unit(s));
            prev = s;
        }
    }

    #[test]
    fn test_desired_terms_normalized() {
        let terms = desired_terms(" Action, drama ,ACTION,, ");
        assert_eq!(terms.len(), 2);
        assert!(terms.contains("action"));
        assert!(terms.contains("drama"));
    }

    #[test]
    fn test_overlap_empty_preferences() {
        for pref in ["", ",,,", "  ,  , ", "\t"] {
            let desired = desired_terms(pref);
            assert_eq!(overlap_score("Action Drama", &desired), 0.0, "pref {:?}", pref);
        }
    }

    #[test]
    fn test_overlap_fraction_of_desired() {
        let desired = desired_terms("action, comedy");
        assert!((overlap_score("Action Drama", &desired) - 0.5).abs() < 1e-9);
        assert!((overlap_score("comedy ACTION", &desired) - 1.0).abs() < 1e-9);
        assert_eq!(overlap_score("", &desired), 0.0);
    }

    #[test]
    fn test_overlap_counts_each_movie_token() {
        let desired = desired_terms("action, comedy");
        // Two matching tokens for one desired genre still count twice.
        assert!((overlap_score("Action action", &desired) - 1.0).abs() < 1e-9);
        // But the signal never leaves [0, 1].
        assert!((overlap_score("Action action action", &desired) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_popularity_normalized() {
        assert!((popularity_score(50.0, 100.0) - 0.5).abs() < 1e-9);
        assert!((popularity_score(150.0, 100.0) - 1.0).abs() < 1e-9);
        assert_eq!(popularity_score(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_sub_scores_in_unit_interval_for_degenerate_inputs() {
        let maxima_cases = [
            DatasetMaxima::default(),
            DatasetMaxima {
                max_rating: 10.0,
                max_popularity: 300.0,
            },
        ];
        let pref_cases = [
            prefs("", "", 0.0, 0),
            prefs("action", "space", 5.0, 120),
            prefs(",", " , ", 11.0, -1),
        ];
        let movies = [
            movie(0.0, 0, "", 0.0),
            movie(10.0, 500, "Action Action Action", 300.0),
            movie(7.5, 95, "Drama", 12.0),
        ];
        for maxima in &maxima_cases {
            for p in &pref_cases {
                for m in &movies {
                    let b = score_breakdown(m, p, maxima, &ScoreWeights::DEFAULT);
                    for s in [b.rating, b.runtime, b.genre, b.keyword, b.popularity] {
                        assert!(in_unit(s), "{:?} out of range for {:?}", b, m);
                    }
                }
            }
        }
    }

    #[test]
    fn test_keywords_scored_like_genres() {
        let mut m = movie(0.0, 0, "", 0.0);
        m.keywords = "space alien future".to_string();
        let p = prefs("", "Space, time travel", 0.0, 0);
        let b = score_breakdown(&m, &p, &DatasetMaxima::default(), &ScoreWeights::DEFAULT);
        assert!((b.keyword - 0.5).abs() < 1e-9);
        assert!((b.total - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_conformance_example() {
        let a = movie(8.0, 90, "Action Drama", 50.0);
        let b = movie(5.0, 150, "Comedy", 10.0);
        let c = movie(9.0, 100, "Action", 100.0);
        let maxima = DatasetMaxima::from_records(&[a.clone(), b.clone(), c.clone()]);
        assert!((maxima.max_rating - 9.0).abs() < 1e-9);
        assert!((maxima.max_popularity - 100.0).abs() < 1e-9);

        let p = prefs("Action", "", 5.0, 120);
        let sa = score_movie(&a, &p, &maxima);
        let sb = score_movie(&b, &p, &maxima);
        let sc = score_movie(&c, &p, &maxima);

        // A: 0.3*0.75 + 0.2*0.25 + 0.5*1 + 0.3*0.5
        assert!((sa - 0.925).abs() < 0.005, "A = {}", sa);
        // B: only popularity contributes, 0.3*0.1
        assert!((sb - 0.03).abs() < 0.005, "B = {}", sb);
        // C: 0.3*1 + 0.2*(20/120) + 0.5*1 + 0.3*1
        assert!((sc - 1.1333).abs() < 0.005, "C = {}", sc);
        assert!(sc > sa && sa > sb);
    }
}
