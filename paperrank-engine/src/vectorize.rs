// ---------------------------------------------------------------------------
// Vectorizer -- one dense TF-IDF vector per paper over a shared vocabulary
// ---------------------------------------------------------------------------

use std::collections::HashMap;

use crate::tfidf::CorpusBuilder;
use crate::types::Paper;

/// Paper id -> TF-IDF vector. All vectors in one table come from the same
/// corpus build and share its term order.
pub type VectorTable = HashMap<String, Vec<f64>>;

/// Build one index over `"{title} {summary}"` of every paper and emit each
/// paper's vector in vocabulary order.
///
/// If two papers share an id, the later one wins.
pub fn compute_vectors(papers: &[Paper]) -> VectorTable {
	let mut builder = CorpusBuilder::new();
	for paper in papers {
		builder.add_document(&paper.document_text());
	}
	let index = builder.build();

	tracing::debug!(
		documents = index.document_count(),
		vocabulary = index.vocabulary_size(),
		"Built TF-IDF index"
	);

	papers
		.iter()
		.enumerate()
		.map(|(i, paper)| (paper.id.clone(), index.vector(i)))
		.collect()
}
