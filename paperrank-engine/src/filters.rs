// ---------------------------------------------------------------------------
// Filter Evaluator -- subject, paper type and boolean query predicates
// ---------------------------------------------------------------------------
//
// The three predicates are independent and combined with AND. An empty
// selection (or blank query) always passes.
// ---------------------------------------------------------------------------

use crate::query::BooleanQuery;
use crate::types::{FilterCriteria, Paper};

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

/// Subject name -> category codes. A paper tag matches a code when it
/// contains it.
pub const SUBJECT_CATEGORIES: &[(&str, &[&str])] = &[
	("Machine Learning", &["cs.LG", "stat.ML"]),
	("Computer Vision", &["cs.CV"]),
	("Natural Language Processing", &["cs.CL", "cs.AI"]),
	("Reinforcement Learning", &["cs.AI", "cs.LG"]),
	("Neural Networks", &["cs.NE", "cs.LG"]),
	("Information Retrieval", &["cs.IR"]),
	("Artificial Intelligence", &["cs.AI"]),
	("Robotics", &["cs.RO"]),
	("Cryptography", &["cs.CR"]),
	("Distributed Systems", &["cs.DC", "cs.DS"]),
];

const CONFERENCE_MARKERS: &[&str] = &["conference", "cvpr", "iccv", "neurips", "icml", "acl"];
const JOURNAL_MARKERS: &[&str] = &["journal", "ieee", "acm"];
const WORKSHOP_MARKERS: &[&str] = &["workshop"];

/// Category codes for a subject name. Unknown subjects map to nothing.
pub fn subject_categories(subject: &str) -> &'static [&'static str] {
	SUBJECT_CATEGORIES
		.iter()
		.find(|(name, _)| *name == subject)
		.map(|(_, codes)| *codes)
		.unwrap_or(&[])
}

// ---------------------------------------------------------------------------
// Paper types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperType {
	Conference,
	Journal,
	Preprint,
	Workshop,
	/// A label we have no heuristic for.
	Unrecognized,
}

impl PaperType {
	/// Labels are matched case-insensitively, so both the display name
	/// ("Conference") and the wire value ("conference") work.
	pub fn from_label(label: &str) -> Self {
		match label.trim().to_lowercase().as_str() {
			"conference" => Self::Conference,
			"journal" => Self::Journal,
			"preprint" => Self::Preprint,
			"workshop" => Self::Workshop,
			_ => Self::Unrecognized,
		}
	}

	/// Whether a lowercased comment carries evidence of this type.
	///
	/// Every feed paper is a candidate preprint, so `Preprint` always
	/// matches. Unrecognized labels match as well.
	pub fn matches_comment(&self, comment: &str) -> bool {
		let markers = match self {
			Self::Conference => CONFERENCE_MARKERS,
			Self::Journal => JOURNAL_MARKERS,
			Self::Workshop => WORKSHOP_MARKERS,
			Self::Preprint | Self::Unrecognized => return true,
		};
		markers.iter().any(|m| comment.contains(m))
	}
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

pub fn matches_subject_filter(paper: &Paper, subjects: &[String]) -> bool {
	if subjects.is_empty() {
		return true;
	}
	let codes: Vec<&str> = subjects
		.iter()
		.flat_map(|s| subject_categories(s).iter().copied())
		.collect();
	paper
		.categories
		.iter()
		.any(|cat| codes.iter().any(|code| cat.contains(code)))
}

pub fn matches_paper_type_filter(paper: &Paper, paper_types: &[String]) -> bool {
	if paper_types.is_empty() {
		return true;
	}
	let comment = paper.comment.as_deref().unwrap_or("").to_lowercase();
	paper_types
		.iter()
		.any(|label| PaperType::from_label(label).matches_comment(&comment))
}

pub fn matches_boolean_query(paper: &Paper, query: &BooleanQuery) -> bool {
	query.is_match_all() || query.matches(&paper.searchable_text())
}

/// Keep the papers that pass every predicate, in input order.
pub fn apply_filters(papers: &[Paper], criteria: &FilterCriteria) -> Vec<Paper> {
	if criteria.is_empty() {
		return papers.to_vec();
	}

	let query = BooleanQuery::parse(&criteria.boolean_query);
	let kept: Vec<Paper> = papers
		.iter()
		.filter(|paper| {
			matches_subject_filter(paper, &criteria.subjects)
				&& matches_paper_type_filter(paper, &criteria.paper_types)
				&& matches_boolean_query(paper, &query)
		})
		.cloned()
		.collect();

	tracing::debug!(
		pool = papers.len(),
		kept = kept.len(),
		subjects = criteria.subjects.len(),
		paper_types = criteria.paper_types.len(),
		"Applied filters"
	);

	kept
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};

	fn paper(id: &str, summary: &str, categories: &[&str], comment: Option<&str>) -> Paper {
		Paper {
			id: id.to_string(),
			title: format!("Paper {id}"),
			summary: summary.to_string(),
			authors: vec!["Ada Lovelace".to_string()],
			published: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
			updated: None,
			categories: categories.iter().map(|c| c.to_string()).collect(),
			comment: comment.map(|c| c.to_string()),
		}
	}

	fn strings(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| s.to_string()).collect()
	}

	fn pool() -> Vec<Paper> {
		vec![
			paper("cv", "image segmentation with transformers", &["cs.CV"], Some("Accepted at CVPR 2024")),
			paper("nlp", "bert for question answering", &["cs.CL", "cs.AI"], Some("IEEE Transactions")),
			paper("ro", "legged robot control", &["cs.RO"], None),
			paper("ml", "neural network pruning", &["stat.ML"], Some("NeurIPS Workshop on Sparsity")),
		]
	}

	fn ids(papers: &[Paper]) -> Vec<&str> {
		papers.iter().map(|p| p.id.as_str()).collect()
	}

	#[test]
	fn empty_criteria_is_identity() {
		let papers = pool();
		let result = apply_filters(&papers, &FilterCriteria::default());
		assert_eq!(result, papers);
	}

	#[test]
	fn subject_filter_maps_to_codes() {
		let criteria = FilterCriteria {
			subjects: strings(&["Computer Vision"]),
			..Default::default()
		};
		assert_eq!(ids(&apply_filters(&pool(), &criteria)), vec!["cv"]);
	}

	#[test]
	fn subject_filter_unions_subjects() {
		let criteria = FilterCriteria {
			subjects: strings(&["Robotics", "Machine Learning"]),
			..Default::default()
		};
		assert_eq!(ids(&apply_filters(&pool(), &criteria)), vec!["ro", "ml"]);
	}

	#[test]
	fn subject_filter_uses_substring_match() {
		let p = paper("x", "s", &["cs.LG.extra"], None);
		assert!(matches_subject_filter(&p, &strings(&["Neural Networks"])));
	}

	#[test]
	fn unknown_subject_matches_nothing() {
		let p = paper("x", "s", &["cs.CV"], None);
		assert!(!matches_subject_filter(&p, &strings(&["Astrology"])));
	}

	#[test]
	fn paper_type_from_comment() {
		let papers = pool();
		let conference = FilterCriteria {
			paper_types: strings(&["conference"]),
			..Default::default()
		};
		// "neurips" marks the workshop paper as conference evidence too
		assert_eq!(ids(&apply_filters(&papers, &conference)), vec!["cv", "ml"]);

		let journal = FilterCriteria {
			paper_types: strings(&["Journal"]),
			..Default::default()
		};
		assert_eq!(ids(&apply_filters(&papers, &journal)), vec!["nlp"]);

		let workshop = FilterCriteria {
			paper_types: strings(&["workshop"]),
			..Default::default()
		};
		assert_eq!(ids(&apply_filters(&papers, &workshop)), vec!["ml"]);
	}

	#[test]
	fn preprint_type_always_matches() {
		// Selecting only "preprint" keeps the whole pool, including papers
		// with no comment at all.
		let papers = pool();
		let criteria = FilterCriteria {
			paper_types: strings(&["preprint"]),
			..Default::default()
		};
		assert_eq!(apply_filters(&papers, &criteria), papers);
	}

	#[test]
	fn unrecognized_type_matches() {
		assert_eq!(PaperType::from_label("Thesis"), PaperType::Unrecognized);
		let p = paper("x", "s", &[], None);
		assert!(matches_paper_type_filter(&p, &strings(&["thesis"])));
	}

	#[test]
	fn missing_comment_fails_specific_types() {
		let p = paper("x", "s", &[], None);
		assert!(!matches_paper_type_filter(&p, &strings(&["journal", "workshop"])));
	}

	#[test]
	fn boolean_query_searches_authors() {
		let criteria = FilterCriteria {
			boolean_query: "lovelace AND robot".to_string(),
			..Default::default()
		};
		assert_eq!(ids(&apply_filters(&pool(), &criteria)), vec!["ro"]);
	}

	#[test]
	fn predicates_combine_with_and() {
		let criteria = FilterCriteria {
			subjects: strings(&["Natural Language Processing", "Computer Vision"]),
			paper_types: strings(&["conference"]),
			boolean_query: "transformers OR bert".to_string(),
		};
		assert_eq!(ids(&apply_filters(&pool(), &criteria)), vec!["cv"]);
	}

	#[test]
	fn filtering_to_nothing_is_empty() {
		let criteria = FilterCriteria {
			boolean_query: "quantum".to_string(),
			..Default::default()
		};
		assert!(apply_filters(&pool(), &criteria).is_empty());
	}
}
