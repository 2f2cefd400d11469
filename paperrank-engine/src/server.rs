use std::io::{self, BufRead};

use serde::de::DeserializeOwned;

use crate::card::PaperCard;
use crate::error::EngineError;
use crate::filters::apply_filters;
use crate::protocol::*;
use crate::ranking::recommend_at;
use crate::scoring::RankingConfig;
use crate::summarization::{key_points, DEFAULT_MAX_POINTS};
use crate::transport::NdjsonTransport;

const EMPTY_POOL_MESSAGE: &str = "No papers match the current filters";

// ── Server configuration ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub server_name: String,
	pub server_version: String,
	pub default_max_results: usize,
	pub ranking: RankingConfig,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			server_name: "paperrank-engine".to_string(),
			server_version: env!("CARGO_PKG_VERSION").to_string(),
			default_max_results: 50,
			ranking: RankingConfig::default(),
		}
	}
}

// ── Server ────────────────────────────────────────────────────────────────

pub struct PaperRankServer {
	config: ServerConfig,
	transport: NdjsonTransport,
}

fn parse_params<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, EngineError> {
	serde_json::from_value(params).map_err(|e| EngineError::InvalidParams(e.to_string()))
}

impl PaperRankServer {
	pub fn new(config: ServerConfig, transport: NdjsonTransport) -> Self {
		Self { config, transport }
	}

	/// Main loop: read one request per line from stdin until EOF.
	pub fn run(&mut self) -> Result<(), EngineError> {
		let stdin = io::stdin();
		let reader = stdin.lock();

		for line_result in reader.lines() {
			let line = line_result?;
			let trimmed = line.trim();
			if trimmed.is_empty() {
				continue;
			}

			let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
				Ok(r) => r,
				Err(e) => {
					tracing::warn!("Parse error: {}", e);
					self.transport.write_error(0, PARSE_ERROR, "Parse error: invalid JSON", None);
					continue;
				}
			};

			self.handle_request(request);
		}

		Ok(())
	}

	fn handle_request(&self, request: JsonRpcRequest) {
		let id = request.id;
		match self.dispatch(&request.method, request.params) {
			Ok(result) => self.transport.write_response(id, result),
			Err(e) => {
				tracing::warn!(method = %request.method, code = e.code(), "Request failed: {}", e);
				self.transport
					.write_error(id, e.rpc_code(), e.to_string(), Some(e.to_json_rpc_error()));
			}
		}
	}

	/// Route a method call to its handler and serialize the result.
	pub fn dispatch(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value, EngineError> {
		match method {
			"initialize" => Ok(serde_json::to_value(self.handle_initialize())?),
			"papers/recommend" => Ok(serde_json::to_value(self.handle_recommend(parse_params(params)?))?),
			"papers/filter" => Ok(serde_json::to_value(self.handle_filter(parse_params(params)?))?),
			"papers/keyPoints" => Ok(serde_json::to_value(self.handle_key_points(parse_params(params)?))?),
			"papers/cards" => Ok(serde_json::to_value(self.handle_cards(parse_params(params)?))?),
			other => Err(EngineError::MethodNotFound(other.to_string())),
		}
	}

	fn handle_initialize(&self) -> InitializeResult {
		InitializeResult {
			name: self.config.server_name.clone(),
			version: self.config.server_version.clone(),
		}
	}

	fn handle_recommend(&self, params: RecommendParams) -> RecommendResult {
		let filtered = apply_filters(&params.papers, &params.filters);

		if filtered.is_empty() {
			tracing::info!(pool = params.papers.len(), "No papers left after filtering");
			return RecommendResult {
				papers: Vec::new(),
				message: Some(EMPTY_POOL_MESSAGE.to_string()),
			};
		}

		let max_results = params
			.max_results
			.unwrap_or(self.config.default_max_results)
			.min(filtered.len());
		let papers = recommend_at(
			&filtered,
			&params.liked_paper_ids,
			max_results,
			chrono::Utc::now(),
			&self.config.ranking,
		);

		tracing::info!(
			pool = params.papers.len(),
			filtered = filtered.len(),
			returned = papers.len(),
			"Served recommendations"
		);

		RecommendResult { papers, message: None }
	}

	fn handle_filter(&self, params: FilterParams) -> FilterResult {
		FilterResult {
			papers: apply_filters(&params.papers, &params.filters),
		}
	}

	fn handle_key_points(&self, params: KeyPointsParams) -> KeyPointsResult {
		KeyPointsResult {
			key_points: key_points(&params.summary, params.max_points.unwrap_or(DEFAULT_MAX_POINTS)),
		}
	}

	fn handle_cards(&self, params: CardsParams) -> CardsResult {
		CardsResult {
			cards: params.entries.iter().map(PaperCard::from_entry).collect(),
		}
	}
}
