use clap::Parser;

use crate::scoring::{normalize_weights, RankingConfig, WeightOverrides};

#[derive(Parser, Debug)]
#[command(name = "paperrank-engine", about = "Paper ranking and filtering engine over JSON-RPC / NDJSON stdio")]
pub struct CliArgs {
	/// Number of recommendations returned when a request omits maxResults
	#[arg(long, default_value = "50", env = "PAPERRANK_MAX_RESULTS")]
	pub max_results: usize,

	/// Weight of the similarity signal (normalized with the other two)
	#[arg(long, env = "PAPERRANK_SIMILARITY_WEIGHT")]
	pub similarity_weight: Option<f64>,

	/// Weight of the recency signal (normalized with the other two)
	#[arg(long, env = "PAPERRANK_RECENCY_WEIGHT")]
	pub recency_weight: Option<f64>,

	/// Weight of the foundational signal (normalized with the other two)
	#[arg(long, env = "PAPERRANK_FOUNDATIONAL_WEIGHT")]
	pub foundational_weight: Option<f64>,

	/// Server name in the initialize response
	#[arg(long, default_value = "paperrank-engine")]
	pub server_name: String,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "info", env = "PAPERRANK_LOG_LEVEL")]
	pub log_level: String,
}

impl CliArgs {
	/// Scoring configuration with any weight overrides applied.
	pub fn ranking_config(&self) -> RankingConfig {
		RankingConfig {
			weights: normalize_weights(&WeightOverrides {
				similarity: self.similarity_weight,
				recency: self.recency_weight,
				foundational: self.foundational_weight,
			}),
			..RankingConfig::default()
		}
	}
}
