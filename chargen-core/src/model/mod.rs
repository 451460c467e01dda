//! Top-level module for the sliding-window model.
//!
//! This module provides a character-level Markov text model, including:
//! - Per-window character distributions (`CharDistribution`)
//! - Internal probability finalization (`probability`)
//! - Internal weighted sampling (`sampler`)
//! - The trainable model itself (`WindowModel`)

/// Ordered, duplicate-free character distribution.
///
/// Maps each observed character to its count, probability and cumulative
/// probability. Exposed publicly so callers can inspect trained state.
pub mod distribution;

/// Trainable sliding-window model.
///
/// Owns the mapping from context windows to distributions, the window
/// length and the random source; implements `train` and `generate`.
pub mod window_model;

/// Internal conversion of raw counts into normalized and cumulative
/// probabilities. Runs exactly once per distribution, after training.
/// This module is not exposed publicly.
mod probability;

/// Internal weighted random draw from a finalized distribution.
/// This module is not exposed publicly.
mod sampler;
