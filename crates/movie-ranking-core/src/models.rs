//! Core data models for movie ranking.
//!
//! A [`MovieRecord`] is one row of the dataset, built once at load time and
//! never mutated. [`UserPreferences`] captures what the user asked for, and
//! [`DatasetMaxima`] holds the two dataset-wide scales the scorer normalizes
//! against.

/// One row of the movie dataset.
///
/// Only `popularity`, `runtime`, and `vote_average` are parsed to numbers.
/// Everything else, including numeric-looking columns such as `budget`,
/// `revenue`, and `vote_count`, is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieRecord {
    pub index: String,
    pub budget: String,
    /// Whitespace-separated genre tags.
    pub genres: String,
    pub homepage: String,
    pub id: String,
    /// Whitespace-separated keyword tags.
    pub keywords: String,
    pub original_language: String,
    pub original_title: String,
    pub overview: String,
    /// Non-negative; 0 when the field did not parse.
    pub popularity: f64,
    pub production_companies: String,
    pub production_countries: String,
    pub release_date: String,
    pub revenue: String,
    /// Minutes; 0 when the field did not parse.
    pub runtime: u32,
    pub spoken_languages: String,
    pub status: String,
    pub tagline: String,
    pub title: String,
    /// Rating on a 0–10 scale; 0 when the field did not parse.
    pub vote_average: f64,
    pub vote_count: String,
    pub cast: String,
    pub crew: String,
    pub director: String,
}

/// Preferences collected from the user for a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPreferences {
    /// Comma-separated genre names, as typed.
    pub preferred_genre: String,
    /// Comma-separated keywords, as typed.
    pub preferred_keywords: String,
    pub min_rating: f64,
    /// Upper runtime bound in minutes. Zero or negative means no runtime
    /// score is attainable.
    pub max_runtime: i64,
}

/// Dataset-wide maxima used to normalize rating and popularity.
///
/// Computed once over the full loaded dataset, before any scoring call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DatasetMaxima {
    pub max_rating: f64,
    pub max_popularity: f64,
}

impl DatasetMaxima {
    /// Scan `records` for the highest vote average and popularity.
    ///
    /// Both maxima start at 0, so an empty dataset yields `(0, 0)`.
    pub fn from_records(records: &[MovieRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, m| Self {
            max_rating: acc.max_rating.max(m.vote_average),
            max_popularity: acc.max_popularity.max(m.popularity),
        })
    }
}

/// A movie paired with its computed score. Only lives inside ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMovie<'a> {
    pub movie: &'a MovieRecord,
    pub score: f64,
}
