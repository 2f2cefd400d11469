// ---------------------------------------------------------------------------
// Paper cards -- display summaries for scored and unscored papers
// ---------------------------------------------------------------------------

use chrono::NaiveDate;
use serde::Serialize;

use crate::summarization::{key_points, DEFAULT_MAX_POINTS};
use crate::types::{Paper, PaperEntry};

const ABS_URL_BASE: &str = "https://arxiv.org/abs/";

const CODE_INDICATORS: &[&str] = &[
	"code:",
	"github.com",
	"code available",
	"code is available",
	"source code",
	"implementation",
	"https://github",
	"github.io",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperCard {
	pub id: String,
	pub title: String,
	pub url: String,
	pub authors: String,
	pub published: NaiveDate,
	pub updated: NaiveDate,
	pub categories: Vec<String>,
	pub key_points: Vec<String>,
	pub code_available: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub relevance: Option<f64>,
}

/// "Unknown" for no authors, the full list up to three, otherwise the first
/// two followed by "et al.".
pub fn format_authors(authors: &[String]) -> String {
	match authors.len() {
		0 => "Unknown".to_string(),
		1..=3 => authors.join(", "),
		_ => format!("{}, et al.", authors[..2].join(", ")),
	}
}

pub fn has_code_available(paper: &Paper) -> bool {
	let comment = paper.comment.as_deref().unwrap_or("").to_lowercase();
	let summary = paper.summary.to_lowercase();
	CODE_INDICATORS
		.iter()
		.any(|indicator| comment.contains(indicator) || summary.contains(indicator))
}

impl PaperCard {
	pub fn from_entry(entry: &PaperEntry) -> Self {
		let paper = entry.paper();
		Self {
			id: paper.id.clone(),
			title: paper.title.clone(),
			url: format!("{ABS_URL_BASE}{}", paper.id),
			authors: format_authors(&paper.authors),
			published: paper.published.date_naive(),
			updated: paper.updated_or_published().date_naive(),
			categories: paper.categories.clone(),
			key_points: key_points(&paper.summary, DEFAULT_MAX_POINTS),
			code_available: has_code_available(paper),
			relevance: entry.scores().map(|s| s.relevance),
		}
	}
}
