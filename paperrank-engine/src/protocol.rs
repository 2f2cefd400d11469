use serde::{Deserialize, Serialize};

use crate::card::PaperCard;
use crate::types::{FilterCriteria, Paper, PaperEntry, ScoredPaper};

// ── JSON-RPC 2.0 error codes ──────────────────────────────────────────────

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// ── JSON-RPC 2.0 framing ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
	#[allow(dead_code)]
	pub jsonrpc: String,
	#[serde(default)]
	pub id: u64,
	pub method: String,
	#[serde(default)]
	pub params: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
	pub jsonrpc: &'static str,
	pub id: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<serde_json::Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
	pub code: i32,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<serde_json::Value>,
}

// ── initialize ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct InitializeResult {
	pub name: String,
	pub version: String,
}

// ── papers/recommend ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendParams {
	pub papers: Vec<Paper>,
	#[serde(default)]
	pub liked_paper_ids: Vec<String>,
	#[serde(default)]
	pub filters: FilterCriteria,
	#[serde(default)]
	pub max_results: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResult {
	pub papers: Vec<ScoredPaper>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

// ── papers/filter ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FilterParams {
	pub papers: Vec<Paper>,
	#[serde(default)]
	pub filters: FilterCriteria,
}

#[derive(Debug, Serialize)]
pub struct FilterResult {
	pub papers: Vec<Paper>,
}

// ── papers/keyPoints ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPointsParams {
	pub summary: String,
	#[serde(default)]
	pub max_points: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPointsResult {
	pub key_points: Vec<String>,
}

// ── papers/cards ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CardsParams {
	pub entries: Vec<PaperEntry>,
}

#[derive(Debug, Serialize)]
pub struct CardsResult {
	pub cards: Vec<PaperCard>,
}
