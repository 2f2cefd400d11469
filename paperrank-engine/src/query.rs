// ---------------------------------------------------------------------------
// Boolean query -- AND / OR / NOT over substring matches
// ---------------------------------------------------------------------------
//
//   bert OR gpt                 either word
//   transformer AND attention   both words
//   neural NOT network          "neural" present, "network" absent
//   graph learning              any of the words (no operators)
//
// OR binds loosest. Operators are case-insensitive and must be surrounded
// by whitespace. Terms match as substrings of the searchable text.
// ---------------------------------------------------------------------------

use std::sync::LazyLock;

use regex::Regex;

static OR_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s+or\s+").expect("static regex"));
static AND_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s+and\s+").expect("static regex"));
static NOT_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(?:^|\s+)not\s+").expect("static regex"));
static CLAUSE_KEYWORD: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)(?:^|\s)(?:and|not)\s").expect("static regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A single required or forbidden term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
	pub term: String,
	pub negated: bool,
}

impl Condition {
	fn holds(&self, text: &str) -> bool {
		text.contains(&self.term) != self.negated
	}
}

/// One OR-alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
	/// No operators: passes if any word occurs.
	AnyWord(Vec<String>),
	/// AND/NOT conditions that must all hold.
	All(Vec<Condition>),
}

impl Clause {
	fn matches(&self, text: &str) -> bool {
		match self {
			Self::AnyWord(words) => words.iter().any(|w| text.contains(w.as_str())),
			Self::All(conditions) => conditions.iter().all(|c| c.holds(text)),
		}
	}
}

/// A parsed boolean query. The empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooleanQuery {
	clauses: Vec<Clause>,
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

fn parse_clause(clause: &str) -> Clause {
	if !CLAUSE_KEYWORD.is_match(clause) {
		return Clause::AnyWord(clause.split_whitespace().map(|w| w.to_string()).collect());
	}

	let mut conditions = Vec::new();
	for part in AND_SPLIT.split(clause) {
		for (i, piece) in NOT_SPLIT.split(part.trim()).enumerate() {
			let term = piece.trim();
			if term.is_empty() {
				continue;
			}
			conditions.push(Condition {
				term: term.to_string(),
				negated: i > 0,
			});
		}
	}
	Clause::All(conditions)
}

impl BooleanQuery {
	/// Parse a query string. Parsing never fails; whitespace-only input
	/// yields the match-all query.
	pub fn parse(query: &str) -> Self {
		let lowered = query.trim().to_lowercase();
		if lowered.is_empty() {
			return Self::default();
		}
		let clauses = OR_SPLIT
			.split(&lowered)
			.map(|c| parse_clause(c.trim()))
			.collect();
		Self { clauses }
	}

	pub fn is_match_all(&self) -> bool {
		self.clauses.is_empty()
	}

	pub fn clauses(&self) -> &[Clause] {
		&self.clauses
	}

	/// Evaluate against already-lowercased searchable text.
	pub fn matches(&self, text: &str) -> bool {
		self.is_match_all() || self.clauses.iter().any(|c| c.matches(text))
	}
}

/// Parse and evaluate in one step.
pub fn matches_boolean_query(query: &str, text: &str) -> bool {
	BooleanQuery::parse(query).matches(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	fn cond(term: &str, negated: bool) -> Condition {
		Condition {
			term: term.to_string(),
			negated,
		}
	}

	#[test]
	fn empty_query_matches_everything() {
		assert!(BooleanQuery::parse("").is_match_all());
		assert!(BooleanQuery::parse("   ").is_match_all());
		assert!(matches_boolean_query("  ", "anything"));
	}

	#[test]
	fn parse_plain_words() {
		let q = BooleanQuery::parse("Graph Learning");
		assert_eq!(
			q.clauses(),
			&[Clause::AnyWord(vec!["graph".to_string(), "learning".to_string()])]
		);
	}

	#[test]
	fn parse_and_clause() {
		let q = BooleanQuery::parse("transformer AND attention");
		assert_eq!(
			q.clauses(),
			&[Clause::All(vec![cond("transformer", false), cond("attention", false)])]
		);
	}

	#[test]
	fn parse_or_of_words() {
		let q = BooleanQuery::parse("bert OR gpt");
		assert_eq!(q.clauses().len(), 2);
	}

	#[test]
	fn parse_infix_not() {
		let q = BooleanQuery::parse("neural NOT network");
		assert_eq!(
			q.clauses(),
			&[Clause::All(vec![cond("neural", false), cond("network", true)])]
		);
	}

	#[test]
	fn parse_leading_not() {
		let q = BooleanQuery::parse("NOT survey");
		assert_eq!(q.clauses(), &[Clause::All(vec![cond("survey", true)])]);
	}

	#[test]
	fn parse_mixed_precedence() {
		let q = BooleanQuery::parse("graph AND NOT survey OR bert");
		assert_eq!(
			q.clauses(),
			&[
				Clause::All(vec![cond("graph", false), cond("survey", true)]),
				Clause::AnyWord(vec!["bert".to_string()]),
			]
		);
	}

	#[test]
	fn and_requires_both() {
		assert!(matches_boolean_query("transformer AND attention", "a transformer built on attention"));
		assert!(!matches_boolean_query("transformer AND attention", "a transformer without it"));
	}

	#[test]
	fn or_requires_either() {
		assert!(matches_boolean_query("bert OR gpt", "fine-tuning bert"));
		assert!(matches_boolean_query("bert OR gpt", "scaling gpt models"));
		assert!(!matches_boolean_query("bert OR gpt", "convolutional nets"));
	}

	#[test]
	fn not_excludes_term() {
		assert!(matches_boolean_query("neural NOT network", "neural fields for rendering"));
		assert!(!matches_boolean_query("neural NOT network", "neural network pruning"));
		assert!(!matches_boolean_query("neural NOT network", "network pruning"));
	}

	#[test]
	fn plain_query_matches_any_word() {
		assert!(matches_boolean_query("diffusion graph", "graph theory"));
		assert!(!matches_boolean_query("diffusion graph", "sorting algorithms"));
	}

	#[test]
	fn operators_are_case_insensitive() {
		assert!(matches_boolean_query("bert or gpt", "gpt"));
		assert!(matches_boolean_query("Transformer and Attention", "transformer attention"));
	}

	#[test]
	fn operator_words_inside_terms_are_not_operators() {
		let q = BooleanQuery::parse("android notation");
		assert_eq!(
			q.clauses(),
			&[Clause::AnyWord(vec!["android".to_string(), "notation".to_string()])]
		);
	}

	#[test]
	fn multi_word_and_terms_match_as_phrases() {
		assert!(matches_boolean_query("graph neural AND survey", "a graph neural survey"));
		assert!(!matches_boolean_query("graph neural AND survey", "neural graph survey"));
	}
}
