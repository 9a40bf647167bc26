//! # Movie Ranking Core
//!
//! Pure logic for fuzzy movie ranking: record models, tolerant row
//! parsing, the weighted scorer, and the ranker.
//!
//! This crate does no file, console, or network I/O. Callers load rows,
//! hand them to [`parse::parse_record`], and pass the resulting records
//! to [`rank::recommend`] (or to [`score`] and [`rank`] step by step).

pub mod models;
pub mod parse;
pub mod rank;
pub mod score;
