use std::fmt;

use serde::{Deserialize, Serialize};

/// Character data for a single entry of a distribution.
///
/// Tracks how many times the character was observed after the owning
/// window, plus the probability and cumulative probability computed when
/// the distribution is finalized after training.
///
/// # Invariants
/// - `count` is >= 1 (an entry only exists once its character was observed)
/// - `probability` and `cumulative` are 0.0 until finalization
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CharEntry {
	/// The observed character.
	pub(crate) chr: char,
	/// Number of observations of this character after the owning window.
	pub(crate) count: usize,
	/// Normalized probability, set by finalization.
	pub(crate) probability: f64,
	/// Running sum of probabilities up to and including this entry,
	/// in the distribution's own order. Set by finalization.
	pub(crate) cumulative: f64,
}

impl CharEntry {
	/// Creates an entry for a character seen for the first time.
	fn new(chr: char) -> Self {
		Self { chr, count: 1, probability: 0.0, cumulative: 0.0 }
	}

	/// The character this entry tracks.
	pub fn chr(&self) -> char {
		self.chr
	}

	/// Observation count of this character.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Normalized probability (0.0 before finalization).
	pub fn probability(&self) -> f64 {
		self.probability
	}

	/// Cumulative probability (0.0 before finalization).
	pub fn cumulative(&self) -> f64 {
		self.cumulative
	}
}

impl fmt::Display for CharEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {:.4} {:.4})", self.chr, self.count, self.probability, self.cumulative)
	}
}

/// Ordered, duplicate-free collection of `CharEntry` values.
///
/// Represents everything observed to follow one context window.
/// Backed by a growable vector with linear scans; per-window alphabets
/// are small, so no sub-linear lookup is needed.
///
/// # Responsibilities
/// - Accumulate character observations during training (`update_or_insert`)
/// - Preserve insertion-order semantics: a brand-new character goes to the
///   front, incrementing an existing one never moves it
/// - Provide indexed and linear lookup, removal, snapshots and iteration
///
/// # Invariants
/// - At most one entry per distinct character
/// - After finalization, `cumulative` is non-decreasing in entry order and
///   the last entry's value is approximately 1.0
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CharDistribution {
	entries: Vec<CharEntry>,
}

impl CharDistribution {
	/// Creates an empty distribution.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Records an observation of `chr`.
	///
	/// - If an entry for `chr` exists, its count is incremented in place.
	/// - Otherwise a new entry with count 1 is inserted at the front.
	pub fn update_or_insert(&mut self, chr: char) {
		for entry in &mut self.entries {
			if entry.chr == chr {
				entry.count += 1;
				return;
			}
		}
		self.entries.insert(0, CharEntry::new(chr));
	}

	/// Removes the entry for `chr` if present.
	///
	/// Returns whether a removal occurred.
	pub fn remove(&mut self, chr: char) -> bool {
		match self.entries.iter().position(|entry| entry.chr == chr) {
			Some(index) => {
				self.entries.remove(index);
				true
			}
			None => false,
		}
	}

	/// Returns the position of `chr` in the distribution's order,
	/// or `None` if the character was never observed.
	pub fn index_of(&self, chr: char) -> Option<usize> {
		self.entries.iter().position(|entry| entry.chr == chr)
	}

	/// Returns the entry at `index`, or `None` if `index` is outside
	/// `[0, len)`. Out-of-range access is never clamped.
	pub fn at(&self, index: usize) -> Option<&CharEntry> {
		self.entries.get(index)
	}

	/// Returns the first entry in the distribution's order.
	pub fn first(&self) -> Option<&CharEntry> {
		self.entries.first()
	}

	/// Number of distinct characters observed.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no character was observed yet.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns a snapshot of the entries in their current order.
	pub fn to_vec(&self) -> Vec<CharEntry> {
		self.entries.clone()
	}

	/// Iterates over the entries in distribution order.
	pub fn iter(&self) -> std::slice::Iter<'_, CharEntry> {
		self.entries.iter()
	}

	/// Iterates over the entries starting at `start`, in distribution order.
	///
	/// Returns `None` when `start` is outside `[0, len)`; in particular,
	/// an empty distribution has no valid start index.
	pub fn iter_from(&self, start: usize) -> Option<std::slice::Iter<'_, CharEntry>> {
		if start >= self.entries.len() {
			return None;
		}
		Some(self.entries[start..].iter())
	}

	/// Mutable access for the finalization pass.
	pub(crate) fn entries_mut(&mut self) -> &mut [CharEntry] {
		&mut self.entries
	}
}

/// Space-joined rendering of each entry, in distribution order.
/// Diagnostics only, not a stable format.
impl fmt::Display for CharDistribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut separate = false;
		for entry in &self.entries {
			if separate {
				write!(f, " ")?;
			}
			write!(f, "{}", entry)?;
			separate = true;
		}
		Ok(())
	}
}
