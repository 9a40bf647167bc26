//! # Fuzzy Movie Ranking
//!
//! Loads a comma-delimited movie dataset, asks for the user's preferences,
//! scores every movie with a weighted fuzzy heuristic, and prints the best
//! matches.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌────────────┐   ┌─────────┐   ┌────────┐   ┌───────────┐
//! │  Loader  │──▶│   Maxima   │──▶│ Scorer  │──▶│ Ranker │──▶│ Presenter │
//! │ CSV rows │   │ rating/pop │   │ 5 sigs  │   │ top N  │   │ text/json │
//! └──────────┘   └────────────┘   └─────────┘   └────────┘   └───────────┘
//! ```
//!
//! Parsing, scoring, and ranking live in `movie_ranking_core`; this crate
//! adds file and console I/O around them.
//!
//! ## Quick Start
//!
//! ```bash
//! movierank                                   # prompt for everything
//! movierank recommend --genre Action --keywords "" --min-rating 6 --max-runtime 120
//! movierank recommend --format json --explain
//! movierank stats --dataset ./movie_dataset.csv
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`loader`] | Dataset file loading |
//! | [`prompt`] | Interactive preference collection |
//! | [`present`] | Text and JSON rendering |
//! | [`recommend`] | The recommend pipeline |
//! | [`stats`] | Dataset summary |

pub mod config;
pub mod loader;
pub mod present;
pub mod prompt;
pub mod recommend;
pub mod stats;
