// ---------------------------------------------------------------------------
// TF-IDF Index -- corpus builder and immutable weight table
// ---------------------------------------------------------------------------
//
// Documents are collected by a `CorpusBuilder` and turned into a `TfIdfIndex`
// by `build`, which consumes the builder. Only the built index exposes query
// methods, and nothing can be added to it afterwards.
//
//   idf(t)   = ln(N / df(t))
//   tf(t, d) = count(t, d) / len(d)
// ---------------------------------------------------------------------------

use std::collections::HashMap;

use indexmap::IndexMap;

/// Tokens shorter than this many characters are dropped.
const MIN_TOKEN_CHARS: usize = 3;

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Lowercase `text`, replace punctuation with spaces, split on whitespace and
/// drop tokens shorter than three characters.
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.chars()
		.map(|c| if c.is_alphanumeric() || c == '_' || c.is_whitespace() { c } else { ' ' })
		.collect::<String>()
		.split_whitespace()
		.filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
		.map(|t| t.to_string())
		.collect()
}

/// Count occurrences of each token, preserving first-seen order.
pub fn term_frequencies(tokens: &[String]) -> IndexMap<&str, usize> {
	let mut counts: IndexMap<&str, usize> = IndexMap::new();
	for token in tokens {
		*counts.entry(token.as_str()).or_insert(0) += 1;
	}
	counts
}

// ---------------------------------------------------------------------------
// CorpusBuilder
// ---------------------------------------------------------------------------

/// Accumulates lowercased documents until `build` is called.
#[derive(Debug, Clone, Default)]
pub struct CorpusBuilder {
	documents: Vec<String>,
}

impl CorpusBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a document. Tokenization is deferred to `build`.
	pub fn add_document(&mut self, text: &str) {
		self.documents.push(text.to_lowercase());
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}

	/// Compute IDF for every corpus token and the sparse TF-IDF weights of
	/// every document.
	pub fn build(self) -> TfIdfIndex {
		let tokenized: Vec<Vec<String>> = self.documents.iter().map(|d| tokenize(d)).collect();

		// Vocabulary in order of first discovery, with document frequencies.
		let mut doc_freqs: IndexMap<String, usize> = IndexMap::new();
		for tokens in &tokenized {
			for term in term_frequencies(tokens).keys() {
				*doc_freqs.entry((*term).to_string()).or_insert(0) += 1;
			}
		}

		let n = tokenized.len() as f64;
		let idf: IndexMap<String, f64> = doc_freqs
			.into_iter()
			.map(|(term, df)| {
				let weight = (n / df as f64).ln();
				(term, weight)
			})
			.collect();

		let weights = tokenized
			.iter()
			.map(|tokens| {
				let len = tokens.len() as f64;
				term_frequencies(tokens)
					.into_iter()
					.map(|(term, count)| {
						let tf = count as f64 / len;
						let term_idf = idf.get(term).copied().unwrap_or(0.0);
						(term.to_string(), tf * term_idf)
					})
					.collect::<HashMap<String, f64>>()
			})
			.collect();

		TfIdfIndex { idf, weights }
	}
}

// ---------------------------------------------------------------------------
// TfIdfIndex
// ---------------------------------------------------------------------------

/// A built, immutable TF-IDF table over one corpus snapshot.
///
/// Vectors produced from two different indexes use different term orders and
/// must not be compared with each other.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
	/// term -> idf, in vocabulary order
	idf: IndexMap<String, f64>,
	/// document index -> (term -> tf * idf)
	weights: Vec<HashMap<String, f64>>,
}

impl TfIdfIndex {
	/// Build an index in one step from a sequence of documents.
	pub fn from_documents<I, S>(documents: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut builder = CorpusBuilder::new();
		for doc in documents {
			builder.add_document(doc.as_ref());
		}
		builder.build()
	}

	/// TF-IDF weight of `term` in the document at `document_index`.
	///
	/// Returns `0.0` for unknown terms and out-of-range indices.
	pub fn tfidf(&self, term: &str, document_index: usize) -> f64 {
		self.weights
			.get(document_index)
			.and_then(|doc| doc.get(term))
			.copied()
			.unwrap_or(0.0)
	}

	/// IDF of `term`, or `0.0` if it never occurs in the corpus.
	pub fn idf(&self, term: &str) -> f64 {
		self.idf.get(term).copied().unwrap_or(0.0)
	}

	/// The vocabulary in first-discovery order.
	pub fn terms(&self) -> impl Iterator<Item = &str> {
		self.idf.keys().map(|k| k.as_str())
	}

	pub fn vocabulary_size(&self) -> usize {
		self.idf.len()
	}

	pub fn document_count(&self) -> usize {
		self.weights.len()
	}

	/// Dense vector of the document at `document_index`, one entry per
	/// vocabulary term. Out-of-range indices yield an empty vector.
	pub fn vector(&self, document_index: usize) -> Vec<f64> {
		match self.weights.get(document_index) {
			Some(doc) => self
				.terms()
				.map(|term| doc.get(term).copied().unwrap_or(0.0))
				.collect(),
			None => Vec::new(),
		}
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
