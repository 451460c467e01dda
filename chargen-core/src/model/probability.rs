use crate::model::distribution::CharDistribution;

/// Converts the raw counts of a distribution into normalized and
/// cumulative probabilities.
///
/// First pass sums all entry counts; second pass walks the entries in
/// the distribution's own stored order, setting each probability to
/// `count / total` and accumulating the running sum into `cumulative`.
///
/// Must run exactly once per distribution, after all counts are final:
/// re-running on changed counts would mis-normalize the cumulative
/// sequence. A distribution with entries always has `total > 0` since
/// every entry is created with count 1; an empty distribution is left
/// untouched (it should never reach this point during training).
pub(crate) fn finalize(distribution: &mut CharDistribution) {
	let total: usize = distribution.iter().map(|entry| entry.count()).sum();
	debug_assert!(total > 0 || distribution.is_empty());
	if total == 0 {
		return;
	}

	let mut cumulative = 0.0;
	for entry in distribution.entries_mut() {
		entry.probability = entry.count as f64 / total as f64;
		cumulative += entry.probability;
		entry.cumulative = cumulative;
	}
}
