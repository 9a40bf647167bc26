//! Record parser for comma-delimited movie rows.
//!
//! Lines are split on literal commas. Quoting and escaped commas are not
//! supported, so a field containing a comma shifts every later column.
//! Rows with fewer than [`FIELD_COUNT`] fields are rejected; extra fields
//! past the last column are ignored.
//!
//! The three numeric columns go through [`parse_or_default`]: a bad value
//! becomes 0 and the rest of the record is kept.

use anyhow::{bail, Result};
use std::str::FromStr;

use crate::models::MovieRecord;

/// Minimum number of comma-separated fields for a row to be kept.
pub const FIELD_COUNT: usize = 24;

/// Parse `raw` as `T`, falling back to `T::default()` on failure.
///
/// Surrounding whitespace is ignored.
pub fn parse_or_default<T>(raw: &str) -> T
where
    T: FromStr + Default,
{
    raw.trim().parse().unwrap_or_default()
}

/// Parse a real-valued column that must be finite and non-negative.
///
/// `f64::from_str` accepts `NaN`, `inf`, and negative values; all of those
/// are treated like any other unparseable token and become 0.
fn parse_non_negative(raw: &str) -> f64 {
    let value: f64 = parse_or_default(raw);
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse one dataset line into a [`MovieRecord`].
///
/// Fails only when the line has fewer than [`FIELD_COUNT`] fields. The
/// caller is expected to drop such lines without reporting them.
///
/// # Example
///
/// ```rust
/// use movie_ranking_core::parse::parse_record;
///
/// let line = "0,1000,Action Drama,,42,hero,en,Orig,Plot,12.5,,,2009-12-10,,N/A,,Released,,Title,7.2,100,,,Someone";
/// let movie = parse_record(line).unwrap();
/// assert_eq!(movie.title, "Title");
/// assert_eq!(movie.runtime, 0);
/// assert!((movie.popularity - 12.5).abs() < 1e-9);
/// ```
pub fn parse_record(line: &str) -> Result<MovieRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELD_COUNT {
        bail!(
            "expected at least {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        );
    }

    let text = |i: usize| fields[i].to_string();

    Ok(MovieRecord {
        index: text(0),
        budget: text(1),
        genres: text(2),
        homepage: text(3),
        id: text(4),
        keywords: text(5),
        original_language: text(6),
        original_title: text(7),
        overview: text(8),
        popularity: parse_non_negative(fields[9]),
        production_companies: text(10),
        production_countries: text(11),
        release_date: text(12),
        revenue: text(13),
        runtime: parse_or_default(fields[14]),
        spoken_languages: text(15),
        status: text(16),
        tagline: text(17),
        title: text(18),
        vote_average: parse_non_negative(fields[19]),
        vote_count: text(20),
        cast: text(21),
        crew: text(22),
        director: text(23),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with(popularity: &str, runtime: &str, vote_average: &str) -> String {
        let mut fields = vec![String::new(); FIELD_COUNT];
        fields[0] = "7".into();
        fields[1] = "237000000".into();
        fields[2] = "Action Adventure".into();
        fields[5] = "space war".into();
        fields[7] = "Avatar".into();
        fields[9] = popularity.into();
        fields[14] = runtime.into();
        fields[18] = "Avatar".into();
        fields[19] = vote_average.into();
        fields[20] = "11800".into();
        fields[23] = "James Cameron".into();
        fields.join(",")
    }

    #[test]
    fn test_parse_full_record() {
        let movie = parse_record(&line_with("150.43", "162", "7.2")).unwrap();
        assert_eq!(movie.index, "7");
        assert_eq!(movie.budget, "237000000");
        assert_eq!(movie.genres, "Action Adventure");
        assert_eq!(movie.keywords, "space war");
        assert_eq!(movie.title, "Avatar");
        assert_eq!(movie.runtime, 162);
        assert!((movie.popularity - 150.43).abs() < 1e-9);
        assert!((movie.vote_average - 7.2).abs() < 1e-9);
        assert_eq!(movie.vote_count, "11800");
        assert_eq!(movie.director, "James Cameron");
    }

    #[test]
    fn test_too_few_fields_rejected() {
        let line = vec!["x"; FIELD_COUNT - 1].join(",");
        let err = parse_record(&line).unwrap_err();
        assert!(err.to_string().contains("found 23"));
    }

    #[test]
    fn test_exactly_enough_empty_fields_accepted() {
        let line = ",".repeat(FIELD_COUNT - 1);
        let movie = parse_record(&line).unwrap();
        assert_eq!(movie, MovieRecord::default());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut line = line_with("1", "90", "6");
        line.push_str(",extra,columns");
        let movie = parse_record(&line).unwrap();
        assert_eq!(movie.director, "James Cameron");
    }

    #[test]
    fn test_non_numeric_runtime_defaults_to_zero() {
        let movie = parse_record(&line_with("1.0", "N/A", "6.0")).unwrap();
        assert_eq!(movie.runtime, 0);
        assert!((movie.vote_average - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_bad_reals_default_to_zero() {
        let movie = parse_record(&line_with("lots", "100", "")).unwrap();
        assert_eq!(movie.popularity, 0.0);
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.runtime, 100);
    }

    #[test]
    fn test_non_finite_and_negative_reals_default_to_zero() {
        let movie = parse_record(&line_with("NaN", "-5", "-1.5")).unwrap();
        assert_eq!(movie.popularity, 0.0);
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.runtime, 0);

        let movie = parse_record(&line_with("inf", "90", "7")).unwrap();
        assert_eq!(movie.popularity, 0.0);
    }

    #[test]
    fn test_padded_numeric_fields_accepted() {
        let movie = parse_record(&line_with(" 9.5", " 120", "7.1 ")).unwrap();
        assert_eq!(movie.runtime, 120);
        assert!((movie.popularity - 9.5).abs() < 1e-9);
        assert!((movie.vote_average - 7.1).abs() < 1e-9);
    }

    #[test]
    fn test_parse_or_default_trims() {
        assert_eq!(parse_or_default::<u32>(" 120 "), 120);
        assert_eq!(parse_or_default::<u32>("12.5"), 0);
        assert_eq!(parse_or_default::<f64>(""), 0.0);
    }
}
