// ---------------------------------------------------------------------------
// Ranking Engine -- vectorize, score, sort, truncate
// ---------------------------------------------------------------------------

use chrono::{DateTime, Utc};

use crate::scoring::{score_paper, RankingConfig};
use crate::types::{Paper, ScoredPaper};
use crate::vectorize::compute_vectors;

/// Rank `papers` against the liked history using the current time and the
/// default configuration.
pub fn recommend(papers: &[Paper], liked_ids: &[String], top_n: usize) -> Vec<ScoredPaper> {
	recommend_at(papers, liked_ids, top_n, Utc::now(), &RankingConfig::default())
}

/// Rank `papers` with an explicit clock and configuration.
///
/// The whole input pool is vectorized, so filtering must happen before this
/// call. Equal relevance scores keep their input order.
pub fn recommend_at(
	papers: &[Paper],
	liked_ids: &[String],
	top_n: usize,
	now: DateTime<Utc>,
	config: &RankingConfig,
) -> Vec<ScoredPaper> {
	if papers.is_empty() {
		return Vec::new();
	}

	let vectors = compute_vectors(papers);

	let mut scored: Vec<ScoredPaper> = papers
		.iter()
		.map(|paper| ScoredPaper {
			scores: score_paper(paper, &vectors, liked_ids, now, config),
			paper: paper.clone(),
		})
		.collect();

	// sort_by is stable
	scored.sort_by(|a, b| {
		b.scores
			.relevance
			.partial_cmp(&a.scores.relevance)
			.unwrap_or(std::cmp::Ordering::Equal)
	});
	scored.truncate(top_n);

	tracing::debug!(
		pool = papers.len(),
		liked = liked_ids.len(),
		returned = scored.len(),
		"Ranked papers"
	);

	scored
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{Duration, TimeZone};

	fn now() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
	}

	fn paper(id: &str, title: &str, summary: &str, age_days: i64) -> Paper {
		Paper {
			id: id.to_string(),
			title: title.to_string(),
			summary: summary.to_string(),
			authors: vec!["A. Author".to_string()],
			published: now() - Duration::days(age_days),
			updated: None,
			categories: vec!["cs.LG".to_string()],
			comment: None,
		}
	}

	fn pool() -> Vec<Paper> {
		vec![
			paper("old", "Convex optimization", "interior point methods for convex programs", 400),
			paper("mid", "Graph neural networks", "message passing on molecular graphs", 60),
			paper("new", "Graph transformers", "positional encodings for graphs", 10),
		]
	}

	#[test]
	fn empty_pool_returns_empty() {
		assert!(recommend(&[], &[], 10).is_empty());
		assert!(recommend(&[], &["x".to_string()], 10).is_empty());
	}

	#[test]
	fn single_paper_in_unit_interval() {
		let papers = vec![paper("solo", "Lonely", "a single paper in the pool", 5)];
		let result = recommend(&papers, &[], 1);
		assert_eq!(result.len(), 1);
		let r = result[0].scores.relevance;
		assert!((0.0..=1.0).contains(&r));
	}

	#[test]
	fn top_n_larger_than_pool_returns_all_sorted() {
		let result = recommend_at(&pool(), &[], 50, now(), &RankingConfig::default());
		assert_eq!(result.len(), 3);
		for pair in result.windows(2) {
			assert!(pair[0].scores.relevance >= pair[1].scores.relevance);
		}
	}

	#[test]
	fn truncates_to_top_n() {
		let result = recommend_at(&pool(), &[], 2, now(), &RankingConfig::default());
		assert_eq!(result.len(), 2);
	}

	#[test]
	fn top_n_zero_returns_empty() {
		assert!(recommend_at(&pool(), &[], 0, now(), &RankingConfig::default()).is_empty());
	}

	#[test]
	fn recency_scores_in_pool() {
		let result = recommend_at(&pool(), &[], 3, now(), &RankingConfig::default());
		let by_id = |id: &str| result.iter().find(|s| s.paper.id == id).unwrap().scores;
		assert_eq!(by_id("new").recency, 1.0);
		assert_eq!(by_id("mid").recency, 0.7);
		assert_eq!(by_id("old").recency, 0.1);
	}

	#[test]
	fn liked_history_pulls_related_papers_up() {
		let papers = vec![
			paper("liked", "Graph neural networks", "message passing on graphs", 100),
			paper("unrelated", "Protein folding", "structure prediction of proteins", 100),
			paper("related", "Graph message passing", "neural networks on graphs", 100),
		];
		let liked = vec!["liked".to_string()];
		let result = recommend_at(&papers, &liked, 3, now(), &RankingConfig::default());
		let pos = |id: &str| result.iter().position(|s| s.paper.id == id).unwrap();
		assert!(pos("related") < pos("unrelated"));
	}

	#[test]
	fn unknown_liked_ids_give_neutral_similarity() {
		let liked = vec!["not-in-pool".to_string()];
		let result = recommend_at(&pool(), &liked, 3, now(), &RankingConfig::default());
		assert!(result.iter().all(|s| s.scores.similarity == 0.5));
	}

	#[test]
	fn ties_keep_input_order() {
		let papers = vec![
			paper("first", "Same words here", "identical abstract text", 10),
			paper("second", "Same words here", "identical abstract text", 10),
			paper("third", "Same words here", "identical abstract text", 10),
		];
		let result = recommend_at(&papers, &[], 3, now(), &RankingConfig::default());
		let ids: Vec<&str> = result.iter().map(|s| s.paper.id.as_str()).collect();
		assert_eq!(ids, vec!["first", "second", "third"]);
	}

	#[test]
	fn every_entry_carries_all_scores() {
		let result = recommend_at(&pool(), &[], 3, now(), &RankingConfig::default());
		for s in &result {
			for v in [s.scores.similarity, s.scores.recency, s.scores.foundational, s.scores.relevance] {
				assert!((0.0..=1.0).contains(&v));
			}
		}
	}
}
