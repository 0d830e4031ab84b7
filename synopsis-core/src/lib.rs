//! Bigram-based synopsis generation library.
//!
//! This crate provides a small Markov text generator including:
//! - Whitespace tokenization that keeps punctuation attached to words
//! - A bigram transition table with sentence-starter detection
//! - Weighted random walks with length-gated stopping
//! - Text reconstruction (spacing, capitalization, terminator)
//!
//! Randomness is owned by each model instance and can be seeded,
//! which makes every generation reproducible.

/// Core bigram model, generation and post-processing.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (training file loading, corpus listing).
pub mod io;

pub use error::{Result, SynopsisError};
pub use model::bigram_model::{BigramModel, Statistics, StopReason, Walk};
pub use model::generation_input::GenerationInput;
