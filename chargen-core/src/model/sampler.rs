use rand::Rng;

use crate::model::distribution::CharDistribution;

/// Draws one character from a finalized distribution.
///
/// Draws `r` uniformly from `[0, 1)` and returns the character of the
/// first entry whose cumulative probability exceeds `r`, walking the
/// distribution in its own stored order. Correct weighting relies on the
/// cumulative sequence produced by finalization.
///
/// Floating-point rounding can leave the final cumulative value just
/// under 1.0 while `r` lands above it; the walk then exhausts and the
/// last entry is returned instead.
///
/// Returns `None` only for an empty distribution.
pub(crate) fn sample<R: Rng>(distribution: &CharDistribution, rng: &mut R) -> Option<char> {
	let draw: f64 = rng.random();
	for entry in distribution.iter() {
		if entry.cumulative() > draw {
			return Some(entry.chr());
		}
	}
	distribution.iter().last().map(|entry| entry.chr())
}
