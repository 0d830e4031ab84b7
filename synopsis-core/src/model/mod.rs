//! Top-level module for the bigram synopsis generator.
//!
//! This module contains:
//! - Tokenization and punctuation helpers (`tokenizer`)
//! - Per-word successor lists (`State`)
//! - The transition table and starter set (`BigramTable`)
//! - The high-level model owning the random source (`BigramModel`)
//! - Generation bounds (`GenerationInput`)
//! - Text reconstruction (`post_process`)

/// High-level interface: training, generation and statistics.
///
/// Owns the transition table and the pseudorandom generator.
pub mod bigram_model;

/// Transition table and starter set built from a token sequence.
///
/// Handles bigram counting, starter detection and starter fallback.
pub mod bigram_table;

/// Validated generation bounds (`max_length`, `min_length`, `count`).
pub mod generation_input;

/// Token sequence to display string (spacing, capitalization, terminator).
pub mod post_process;

/// Successor list of a single word.
///
/// Repeated successors act as weights during sampling.
/// This module is not exposed publicly.
mod state;

/// Whitespace tokenizer and punctuation markers.
pub mod tokenizer;
