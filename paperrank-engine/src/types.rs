use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Paper records
// ---------------------------------------------------------------------------

/// A paper as delivered by the feed client. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
	pub id: String,
	pub title: String,
	pub summary: String,
	#[serde(default)]
	pub authors: Vec<String>,
	pub published: DateTime<Utc>,
	#[serde(default)]
	pub updated: Option<DateTime<Utc>>,
	#[serde(default)]
	pub categories: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub comment: Option<String>,
}

impl Paper {
	/// Last update time, falling back to the publication time.
	pub fn updated_or_published(&self) -> DateTime<Utc> {
		self.updated.unwrap_or(self.published)
	}

	/// Text the vectorizer and the foundational heuristic look at.
	pub fn document_text(&self) -> String {
		format!("{} {}", self.title, self.summary)
	}

	/// Lowercased title, summary and authors, used by the boolean query.
	pub fn searchable_text(&self) -> String {
		format!("{} {} {}", self.title, self.summary, self.authors.join(" ")).to_lowercase()
	}
}

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
	#[serde(default)]
	pub subjects: Vec<String>,
	#[serde(default)]
	pub paper_types: Vec<String>,
	#[serde(default)]
	pub boolean_query: String,
}

impl FilterCriteria {
	pub fn is_empty(&self) -> bool {
		self.subjects.is_empty() && self.paper_types.is_empty() && self.boolean_query.trim().is_empty()
	}
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Per-paper score breakdown. Every component lies in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
	#[serde(rename = "similarityScore")]
	pub similarity: f64,
	#[serde(rename = "recencyScore")]
	pub recency: f64,
	#[serde(rename = "foundationalScore")]
	pub foundational: f64,
	#[serde(rename = "relevanceScore")]
	pub relevance: f64,
}

/// A paper together with the scores it received in one ranking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPaper {
	#[serde(flatten)]
	pub paper: Paper,
	#[serde(flatten)]
	pub scores: Scores,
}

/// A paper that may or may not have been through the ranking engine.
///
/// On the wire a scored entry is recognized by its score fields, so the
/// scored variant is tried first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaperEntry {
	Scored(ScoredPaper),
	Unscored(Paper),
}

impl PaperEntry {
	pub fn paper(&self) -> &Paper {
		match self {
			Self::Scored(scored) => &scored.paper,
			Self::Unscored(paper) => paper,
		}
	}

	pub fn scores(&self) -> Option<&Scores> {
		match self {
			Self::Scored(scored) => Some(&scored.scores),
			Self::Unscored(_) => None,
		}
	}
}

impl From<Paper> for PaperEntry {
	fn from(paper: Paper) -> Self {
		Self::Unscored(paper)
	}
}

impl From<ScoredPaper> for PaperEntry {
	fn from(scored: ScoredPaper) -> Self {
		Self::Scored(scored)
	}
}
