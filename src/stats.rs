//! Dataset summary.
//!
//! Gives a quick look at what a dataset file contributes before ranking
//! against it: how many rows survived parsing and the scales the scorer
//! will normalize against. Used by `movierank stats`.

use std::path::Path;

use movie_ranking_core::models::{DatasetMaxima, MovieRecord};

use crate::loader;

/// Summary numbers for a loaded dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub movies: usize,
    pub maxima: DatasetMaxima,
    /// Mean runtime over movies whose runtime parsed to a non-zero value.
    pub mean_runtime: Option<f64>,
}

pub fn compute_stats(movies: &[MovieRecord]) -> DatasetStats {
    let runtimes: Vec<u32> = movies
        .iter()
        .map(|m| m.runtime)
        .filter(|&r| r > 0)
        .collect();
    let mean_runtime = if runtimes.is_empty() {
        None
    } else {
        Some(runtimes.iter().map(|&r| f64::from(r)).sum::<f64>() / runtimes.len() as f64)
    };

    DatasetStats {
        movies: movies.len(),
        maxima: DatasetMaxima::from_records(movies),
        mean_runtime,
    }
}

/// Load `dataset` and print its summary.
pub fn run_stats(dataset: &Path) {
    let movies = loader::load_movies(dataset);
    let stats = compute_stats(&movies);

    println!("Movie Dataset Stats");
    println!("===================");
    println!();
    println!("  Dataset:         {}", dataset.display());
    println!("  Movies:          {}", stats.movies);
    println!("  Max rating:      {}", stats.maxima.max_rating);
    println!("  Max popularity:  {}", stats.maxima.max_popularity);
    match stats.mean_runtime {
        Some(mean) => println!("  Mean runtime:    {:.1} mins", mean),
        None => println!("  Mean runtime:    n/a"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(runtime: u32, vote_average: f64, popularity: f64) -> MovieRecord {
        MovieRecord {
            runtime,
            vote_average,
            popularity,
            ..Default::default()
        }
    }

    #[test]
    fn test_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.movies, 0);
        assert_eq!(stats.maxima, DatasetMaxima::default());
        assert_eq!(stats.mean_runtime, None);
    }

    #[test]
    fn test_stats_ignores_unknown_runtimes() {
        let stats = compute_stats(&[movie(90, 6.0, 3.0), movie(0, 8.5, 1.0), movie(110, 7.0, 9.0)]);
        assert_eq!(stats.movies, 3);
        assert!((stats.mean_runtime.unwrap() - 100.0).abs() < 1e-9);
        assert!((stats.maxima.max_rating - 8.5).abs() < 1e-9);
        assert!((stats.maxima.max_popularity - 9.0).abs() < 1e-9);
    }
}
