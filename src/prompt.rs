//! Interactive preference collection.
//!
//! Preferences that were not supplied on the command line are asked for
//! in a fixed order: genres, keywords, minimum rating, maximum runtime.
//! Numeric prompts repeat until the answer parses; running out of input
//! before that is an error because there is nothing left to retry with.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use movie_ranking_core::models::UserPreferences;

pub const GENRE_PROMPT: &str = "Enter your preferred genre(s) (comma-separated): ";
pub const KEYWORD_PROMPT: &str = "Enter your preferred keyword(s) (comma-separated): ";
pub const MIN_RATING_PROMPT: &str = "Enter minimum vote average rating (e.g., 5.0): ";
pub const MIN_RATING_RETRY: &str = "Please enter a valid number for min rating: ";
pub const MAX_RUNTIME_PROMPT: &str = "Enter maximum runtime (in minutes): ";
pub const MAX_RUNTIME_RETRY: &str = "Please enter a valid integer for max runtime: ";

/// Preferences already known from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct PreferenceOverrides {
    pub genre: Option<String>,
    pub keywords: Option<String>,
    pub min_rating: Option<f64>,
    pub max_runtime: Option<i64>,
}

impl PreferenceOverrides {
    /// True when every preference is known and no prompt is needed.
    pub fn is_complete(&self) -> bool {
        self.genre.is_some()
            && self.keywords.is_some()
            && self.min_rating.is_some()
            && self.max_runtime.is_some()
    }
}

/// Line-oriented question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn show(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let n = self
            .input
            .read_line(&mut buf)
            .context("failed to read from input")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Ask a free-text question. End of input counts as an empty answer.
    pub fn ask_text(&mut self, prompt: &str) -> Result<String> {
        self.show(prompt)?;
        Ok(self.read_line()?.unwrap_or_default().trim().to_string())
    }

    /// Ask until `parse` accepts the trimmed answer.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        self.show(prompt)?;
        loop {
            let Some(line) = self.read_line()? else {
                bail!("input ended before a valid value was entered");
            };
            if let Some(value) = parse(line.trim()) {
                return Ok(value);
            }
            self.show(retry)?;
        }
    }
}

fn parse_rating(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_runtime(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

/// Fill in every preference missing from `known` by prompting.
pub fn collect_preferences<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    known: PreferenceOverrides,
) -> Result<UserPreferences> {
    let preferred_genre = match known.genre {
        Some(g) => g.trim().to_string(),
        None => prompter.ask_text(GENRE_PROMPT)?,
    };
    let preferred_keywords = match known.keywords {
        Some(k) => k.trim().to_string(),
        None => prompter.ask_text(KEYWORD_PROMPT)?,
    };
    let min_rating = match known.min_rating {
        Some(r) => r,
        None => prompter.ask_until(MIN_RATING_PROMPT, MIN_RATING_RETRY, parse_rating)?,
    };
    let max_runtime = match known.max_runtime {
        Some(m) => m,
        None => prompter.ask_until(MAX_RUNTIME_PROMPT, MAX_RUNTIME_RETRY, parse_runtime)?,
    };

    Ok(UserPreferences {
        preferred_genre,
        preferred_keywords,
        min_rating,
        max_runtime,
    })
}
