//! Character-level sliding-window Markov text model.
//!
//! This crate learns, from a corpus, the empirical distribution of the
//! character following every fixed-length context window, and generates
//! new text by repeated weighted random sampling. It provides:
//! - Per-window character distributions with counts and cumulative probabilities
//! - One-shot probability finalization after training
//! - Training and generation driven by a sliding character window
//! - A small I/O helper for loading a corpus file
//!
//! Only the high-level API is exposed publicly. Low-level components
//! (probability finalization, sampling) are kept internal to ensure
//! consistency and prevent misuse.

/// Core model types and the training/generation logic.
pub mod model;

/// I/O utilities (corpus file loading).
pub mod io;
