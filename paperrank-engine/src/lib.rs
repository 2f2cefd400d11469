//! Ranking and filtering engine for preprint feeds.
//!
//! The two entry points are [`apply_filters`] and [`recommend`]. Everything
//! else is exposed for hosts that need finer control (explicit clock,
//! tuned weights) or the individual building blocks.

pub mod card;
pub mod config;
pub mod cosine;
pub mod error;
pub mod filters;
pub mod protocol;
pub mod query;
pub mod ranking;
pub mod scoring;
pub mod server;
pub mod summarization;
pub mod tfidf;
pub mod transport;
pub mod types;
pub mod vectorize;

pub use filters::apply_filters;
pub use ranking::{recommend, recommend_at};
pub use scoring::RankingConfig;
pub use types::{FilterCriteria, Paper, PaperEntry, ScoredPaper, Scores};
