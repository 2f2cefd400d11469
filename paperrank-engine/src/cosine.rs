/// Compute cosine similarity between two vectors from the same corpus build.
/// Returns 0.0 for zero-magnitude vectors or dimension mismatches.
/// Result clamped to [-1.0, 1.0].
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
	if a.len() != b.len() || a.is_empty() {
		return 0.0;
	}

	let mut dot: f64 = 0.0;
	let mut norm_a: f64 = 0.0;
	let mut norm_b: f64 = 0.0;

	for (ai, bi) in a.iter().zip(b) {
		dot += ai * bi;
		norm_a += ai * ai;
		norm_b += bi * bi;
	}

	let denom = norm_a.sqrt() * norm_b.sqrt();
	if denom == 0.0 {
		return 0.0;
	}

	let result = dot / denom;
	if !result.is_finite() {
		return 0.0;
	}
	result.clamp(-1.0, 1.0)
}

/// Compute the magnitude (L2 norm) of a vector.
pub fn magnitude(vector: &[f64]) -> f64 {
	vector.iter().map(|v| v * v).sum::<f64>().sqrt()
}
