use std::collections::HashMap;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::model::distribution::CharDistribution;
use crate::model::{probability, sampler};

/// Character-level Markov model over fixed-length context windows.
///
/// The model slides a window of `window_length` characters across a
/// corpus, counting which character follows each distinct window, then
/// extends seed texts by repeatedly sampling from those distributions.
///
/// # Responsibilities
/// - Build the window-to-distribution mapping from a character stream
/// - Finalize every distribution exactly once, after the stream ends
/// - Extend seed texts by weighted sampling over the trained mapping
///
/// # Invariants
/// - `window_length` is >= 1
/// - Every key in `distributions` has exactly `window_length` characters
/// - Every stored distribution is non-empty: a window is only inserted
///   together with its first observed successor
/// - The mapping is only mutated by `train`; generation reads it
#[derive(Debug)]
pub struct WindowModel {
	/// Number of characters in a context window.
	window_length: usize,

	/// Mapping from a context window to the distribution of characters
	/// observed to follow it.
	distributions: HashMap<String, CharDistribution>,

	/// Random source consumed during generation. Seeded when
	/// reproducibility is wanted, taken from the OS otherwise.
	rng: StdRng,
}

impl WindowModel {
	/// Creates an untrained model.
	///
	/// With `seed` set, generating from identically trained models
	/// produces identical texts; with `seed` absent, each run differs.
	///
	/// # Errors
	/// Returns an error if `window_length` is zero.
	pub fn new(window_length: usize, seed: Option<u64>) -> Result<Self, String> {
		if window_length == 0 {
			return Err("window length must be >= 1".to_owned());
		}
		let rng = match seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Ok(Self { window_length, distributions: HashMap::new(), rng })
	}

	/// The configured window length.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct context windows learned so far.
	pub fn window_count(&self) -> usize {
		self.distributions.len()
	}

	/// The distribution learned for `window`, if that exact window was
	/// observed with at least one successor during training.
	pub fn distribution(&self, window: &str) -> Option<&CharDistribution> {
		self.distributions.get(window)
	}

	/// Builds the model from a character stream (the corpus).
	///
	/// Reads just enough characters to form the first window, then for
	/// each following character records it in the distribution of the
	/// current window and advances the window by one character. Once the
	/// stream is exhausted, every distribution is finalized.
	///
	/// A stream shorter than the window length trains nothing; a stream
	/// ending exactly on a window boundary leaves the final window out of
	/// the mapping, since it never received a counted successor.
	pub fn train<I>(&mut self, corpus: I)
	where
		I: IntoIterator<Item = char>,
	{
		let mut chars = corpus.into_iter();

		let mut window = String::new();
		for _ in 0..self.window_length {
			match chars.next() {
				Some(chr) => window.push(chr),
				None => return,
			}
		}

		for chr in chars {
			self.distributions
				.entry(window.clone())
				.or_default()
				.update_or_insert(chr);

			// Advance: drop the first character, append the new one
			window.remove(0);
			window.push(chr);
		}

		for distribution in self.distributions.values_mut() {
			probability::finalize(distribution);
		}
	}

	/// Generates text by extending `seed_text` up to `target_length`
	/// characters, sampling each next character from the distribution of
	/// the last `window_length` characters generated so far.
	///
	/// A seed shorter than the window length is returned unchanged (no
	/// lookup window can be formed). Generation stops early when the
	/// current window was never observed during training, returning the
	/// text accumulated so far.
	pub fn generate(&mut self, seed_text: &str, target_length: usize) -> String {
		let seed_length = seed_text.chars().count();
		if seed_length < self.window_length {
			return seed_text.to_owned();
		}

		let mut output = seed_text.to_owned();
		let mut output_length = seed_length;
		let mut window: String = seed_text
			.chars()
			.skip(seed_length - self.window_length)
			.collect();

		while output_length < target_length {
			let Some(distribution) = self.distributions.get(&window) else {
				break;
			};
			let Some(chr) = sampler::sample(distribution, &mut self.rng) else {
				break;
			};
			output.push(chr);
			output_length += 1;
			window.remove(0);
			window.push(chr);
		}

		output
	}
}

/// One `window : distribution` line per learned window.
/// Diagnostics only; line order follows the map's iteration order.
impl fmt::Display for WindowModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, distribution) in &self.distributions {
			writeln!(f, "{} : {}", window, distribution)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TOLERANCE: f64 = 1e-9;

	fn trained(window_length: usize, corpus: &str) -> WindowModel {
		let mut model = WindowModel::new(window_length, Some(4)).unwrap();
		model.train(corpus.chars());
		model
	}

	#[test]
	fn rejects_zero_window_length() {
		assert!(WindowModel::new(0, None).is_err());
	}

	#[test]
	fn training_on_abab_learns_two_windows() {
		let model = trained(2, "abab");
		assert_eq!(model.window_count(), 2);

		let ab = model.distribution("ab").unwrap();
		assert_eq!(ab.len(), 1);
		let entry = ab.first().unwrap();
		assert_eq!(entry.chr(), 'a');
		assert_eq!(entry.count(), 1);
		assert!((entry.probability() - 1.0).abs() < TOLERANCE);
		assert!((entry.cumulative() - 1.0).abs() < TOLERANCE);

		let ba = model.distribution("ba").unwrap();
		assert_eq!(ba.first().unwrap().chr(), 'b');
	}

	#[test]
	fn deterministic_corpus_regenerates_itself() {
		let mut model = trained(2, "abab");
		assert_eq!(model.generate("ab", 4), "abab");
	}

	#[test]
	fn corpus_shorter_than_window_trains_nothing() {
		let mut model = trained(3, "xy");
		assert_eq!(model.window_count(), 0);
		assert_eq!(model.generate("xy", 10), "xy");
	}

	#[test]
	fn corpus_ending_on_window_boundary_adds_no_dead_key() {
		let model = trained(2, "ab");
		assert_eq!(model.window_count(), 0);
	}

	#[test]
	fn short_seed_is_returned_unchanged() {
		let mut model = trained(3, "the quick brown fox");
		assert_eq!(model.generate("ab", 100), "ab");
		assert_eq!(model.generate("", 100), "");
	}

	#[test]
	fn unseen_window_truncates_gracefully() {
		// Only window "ab" exists; after emitting 'c' the window "bc" misses
		let mut model = trained(2, "abc");
		assert_eq!(model.generate("ab", 10), "abc");
	}

	#[test]
	fn generate_before_train_returns_the_seed() {
		let mut model = WindowModel::new(2, Some(4)).unwrap();
		assert_eq!(model.generate("abcd", 10), "abcd");
	}

	#[test]
	fn seed_text_longer_than_window_uses_its_tail() {
		let mut model = trained(2, "hello hello hello");
		let output = model.generate("say hel", 12);
		assert!(output.starts_with("say hel"));
		assert!(output.chars().count() <= 12);
	}

	#[test]
	fn multibyte_characters_slide_correctly() {
		let mut model = trained(1, "ß߀");
		let euro = model.distribution("ß").unwrap();
		assert_eq!(euro.len(), 2);
		let output = model.generate("ß", 5);
		assert!(output.chars().count() <= 5);
		for chr in output.chars() {
			assert!("ß߀".contains(chr));
		}
	}

	#[test]
	fn probabilities_cover_every_window_after_training() {
		let model = trained(2, "you cannot teach a man anything");
		assert!(model.window_count() > 0);
		for window in ["yo", "ou", "an"] {
			let distribution = model.distribution(window).unwrap();
			let sum: f64 = distribution.iter().map(|entry| entry.probability()).sum();
			assert!((sum - 1.0).abs() < TOLERANCE);
		}
	}

	#[test]
	fn display_lists_windows_with_their_distributions() {
		let model = trained(2, "aba");
		assert_eq!(model.to_string(), "ab : (a 1 1.0000 1.0000)\n");
	}
}
