// ---------------------------------------------------------------------------
// Key-point extraction -- pick the most informative abstract sentences
// ---------------------------------------------------------------------------

/// Default number of key points shown on a paper card.
pub const DEFAULT_MAX_POINTS: usize = 5;

/// Sentences this short (in characters) are treated as fragments.
const MIN_SENTENCE_CHARS: usize = 20;

const ML_KEYWORDS: &[&str] = &[
	"model",
	"learning",
	"neural",
	"network",
	"algorithm",
	"method",
	"approach",
	"deep",
	"training",
	"data",
	"performance",
	"accuracy",
	"evaluation",
	"experiment",
	"propose",
	"present",
	"introduce",
	"novel",
	"framework",
	"architecture",
];

fn length_score(word_count: usize) -> f64 {
	if (15..=30).contains(&word_count) {
		1.5
	} else if !(10..=40).contains(&word_count) {
		0.5
	} else {
		1.0
	}
}

fn keyword_score(words: &[&str]) -> f64 {
	let matched = ML_KEYWORDS
		.iter()
		.filter(|kw| words.iter().any(|w| w.contains(*kw)))
		.count();
	1.0 + (matched as f64 / ML_KEYWORDS.len() as f64) * 2.0
}

fn position_score(index: usize, count: usize) -> f64 {
	1.0 + (1.0 - index as f64 / count as f64) * 0.5
}

/// Extract up to `max_points` key sentences from an abstract, returned in
/// their original order.
pub fn key_points(abstract_text: &str, max_points: usize) -> Vec<String> {
	if abstract_text.trim().is_empty() {
		return Vec::new();
	}

	let sentences: Vec<&str> = abstract_text
		.split(['.', '!', '?'])
		.map(str::trim)
		.filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
		.collect();

	let count = sentences.len();
	let mut scored: Vec<(usize, f64)> = sentences
		.iter()
		.enumerate()
		.map(|(index, sentence)| {
			let lowered = sentence.to_lowercase();
			let words: Vec<&str> = lowered.split_whitespace().collect();
			let score = length_score(words.len()) * keyword_score(&words) * position_score(index, count);
			(index, score)
		})
		.collect();

	scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
	scored.truncate(max_points);
	scored.sort_by_key(|(index, _)| *index);

	scored
		.into_iter()
		.map(|(index, _)| sentences[index].to_string())
		.collect()
}
