// ---------------------------------------------------------------------------
// Scoring Model -- similarity, recency and foundational signals
// ---------------------------------------------------------------------------
//
// Pure functions for the per-paper score components and their weighted
// combination. No side effects; the clock is always passed in.
// ---------------------------------------------------------------------------

use chrono::{DateTime, TimeZone, Utc};

use crate::cosine::{cosine_similarity, magnitude};
use crate::types::{Paper, Scores};
use crate::vectorize::VectorTable;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 0.5;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.3;
pub const DEFAULT_FOUNDATIONAL_WEIGHT: f64 = 0.2;

/// Similarity used when none of the liked papers are in the pool.
pub const NEUTRAL_SIMILARITY: f64 = 0.5;

/// Divisor applied to a paper's own vector norm when there is no history.
pub const NORM_SCALE: f64 = 10.0;

/// Recency steps as (maximum age in days, score), checked in order.
pub const RECENCY_STEPS: [(f64, f64); 3] = [(30.0, 1.0), (90.0, 0.7), (365.0, 0.4)];

/// Recency score for anything older than the last step.
pub const RECENCY_FLOOR: f64 = 0.1;

/// Papers published before this year can be foundational.
pub const FOUNDATIONAL_CUTOFF_YEAR: i32 = 2020;

pub const FOUNDATIONAL_MATCH_SCORE: f64 = 1.0;
pub const FOUNDATIONAL_BASE_SCORE: f64 = 0.5;

pub const FOUNDATIONAL_KEYWORDS: &[&str] = &[
	"foundation",
	"fundamental",
	"seminal",
	"pioneer",
	"breakthrough",
	"transformer",
	"attention",
	"resnet",
	"bert",
	"gpt",
	"gan",
];

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Relative weights of the three signals. Always sums to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
	pub similarity: f64,
	pub recency: f64,
	pub foundational: f64,
}

impl Default for Weights {
	fn default() -> Self {
		Self {
			similarity: DEFAULT_SIMILARITY_WEIGHT,
			recency: DEFAULT_RECENCY_WEIGHT,
			foundational: DEFAULT_FOUNDATIONAL_WEIGHT,
		}
	}
}

/// Partial weight overrides, as they arrive from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightOverrides {
	pub similarity: Option<f64>,
	pub recency: Option<f64>,
	pub foundational: Option<f64>,
}

/// Fill missing overrides with the defaults and scale so the weights sum
/// to 1. Negative overrides count as 0; an all-zero profile falls back to
/// the defaults.
pub fn normalize_weights(overrides: &WeightOverrides) -> Weights {
	let defaults = Weights::default();
	let raw_s = overrides.similarity.unwrap_or(defaults.similarity).max(0.0);
	let raw_r = overrides.recency.unwrap_or(defaults.recency).max(0.0);
	let raw_f = overrides.foundational.unwrap_or(defaults.foundational).max(0.0);
	let total = raw_s + raw_r + raw_f;
	if total == 0.0 || !total.is_finite() {
		return defaults;
	}
	Weights {
		similarity: raw_s / total,
		recency: raw_r / total,
		foundational: raw_f / total,
	}
}

/// Everything the scoring model can be tuned with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingConfig {
	pub weights: Weights,
	pub neutral_similarity: f64,
	pub norm_scale: f64,
}

impl Default for RankingConfig {
	fn default() -> Self {
		Self {
			weights: Weights::default(),
			neutral_similarity: NEUTRAL_SIMILARITY,
			norm_scale: NORM_SCALE,
		}
	}
}

// ---------------------------------------------------------------------------
// Individual scoring functions
// ---------------------------------------------------------------------------

/// Step function over days since publication. Future dates count as age 0.
pub fn recency_score(published: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
	let age_ms = (now - published).num_milliseconds().max(0) as f64;
	let days = age_ms / MS_PER_DAY;
	RECENCY_STEPS
		.iter()
		.find(|(max_days, _)| days <= *max_days)
		.map(|(_, score)| *score)
		.unwrap_or(RECENCY_FLOOR)
}

fn foundational_cutoff() -> DateTime<Utc> {
	Utc.with_ymd_and_hms(FOUNDATIONAL_CUTOFF_YEAR, 1, 1, 0, 0, 0)
		.single()
		.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// 0 for papers from the cutoff year onward. Older papers score 1 when their
/// title or summary mentions a foundational keyword, 0.5 otherwise.
pub fn foundational_score(paper: &Paper) -> f64 {
	if paper.published >= foundational_cutoff() {
		return 0.0;
	}
	let text = paper.document_text().to_lowercase();
	if FOUNDATIONAL_KEYWORDS.iter().any(|kw| text.contains(kw)) {
		FOUNDATIONAL_MATCH_SCORE
	} else {
		FOUNDATIONAL_BASE_SCORE
	}
}

/// Similarity of a paper to the user's history.
///
/// With liked ids: the mean cosine similarity against every liked vector in
/// the table, or the neutral score if none of them are present. Without
/// liked ids: the paper's own norm, scaled and capped at 1.
pub fn similarity_score(
	paper_id: &str,
	vectors: &VectorTable,
	liked_ids: &[String],
	config: &RankingConfig,
) -> f64 {
	let paper_vector = vectors.get(paper_id).map(|v| v.as_slice()).unwrap_or(&[]);

	if liked_ids.is_empty() {
		let norm = magnitude(paper_vector);
		return (norm / config.norm_scale).min(1.0);
	}

	if paper_vector.is_empty() {
		return config.neutral_similarity;
	}

	let mut total = 0.0;
	let mut count = 0usize;
	for liked_id in liked_ids {
		if let Some(liked_vector) = vectors.get(liked_id) {
			total += cosine_similarity(paper_vector, liked_vector);
			count += 1;
		}
	}

	if count == 0 {
		config.neutral_similarity
	} else {
		(total / count as f64).clamp(0.0, 1.0)
	}
}

// ---------------------------------------------------------------------------
// Combined relevance score
// ---------------------------------------------------------------------------

/// Score one paper against the current vector table.
pub fn score_paper(
	paper: &Paper,
	vectors: &VectorTable,
	liked_ids: &[String],
	now: DateTime<Utc>,
	config: &RankingConfig,
) -> Scores {
	let similarity = similarity_score(&paper.id, vectors, liked_ids, config);
	let recency = recency_score(paper.published, now);
	let foundational = foundational_score(paper);
	let weights = &config.weights;
	let relevance = similarity * weights.similarity
		+ recency * weights.recency
		+ foundational * weights.foundational;

	Scores {
		similarity,
		recency,
		foundational,
		relevance: relevance.clamp(0.0, 1.0),
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
