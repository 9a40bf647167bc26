//! Dataset loading.
//!
//! Reads a comma-delimited movie file, skips its header line, and parses
//! every following line with [`parse_record`]. Lines with too few fields
//! are dropped without comment.
//!
//! A file that cannot be opened or read is not fatal: the failure is
//! reported on stderr and the loader returns an empty dataset, which later
//! yields no recommendations.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use movie_ranking_core::models::MovieRecord;
use movie_ranking_core::parse::parse_record;

/// Load all movie records from `path`, in file order.
pub fn load_movies(path: &Path) -> Vec<MovieRecord> {
    match try_load_movies(path) {
        Ok(movies) => movies,
        Err(e) => {
            eprintln!("Error reading file: {}", path.display());
            eprintln!("  {:#}", e);
            Vec::new()
        }
    }
}

fn try_load_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    read_movies(BufReader::new(file))
}

/// Parse records from any buffered reader. The first line is always
/// treated as a header and discarded.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the load.
pub fn read_movies<R: BufRead>(mut reader: R) -> Result<Vec<MovieRecord>> {
    let mut movies = Vec::new();
    let mut buf = Vec::new();
    let mut header = true;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .context("failed to read dataset line")?;
        if n == 0 {
            break;
        }
        if header {
            header = false;
            continue;
        }
        let raw = buf
            .strip_suffix(b"\n")
            .map(|b| b.strip_suffix(b"\r").unwrap_or(b))
            .unwrap_or(&buf[..]);
        let line = String::from_utf8_lossy(raw);
        if let Ok(movie) = parse_record(&line) {
            movies.push(movie);
        }
    }
    Ok(movies)
}
