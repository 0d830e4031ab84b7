use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::bigram_table::BigramTable;
use super::generation_input::GenerationInput;
use super::post_process::render;
use super::tokenizer::{ends_sentence, tokenize};
use crate::error::{Result, SynopsisError};

/// Counts describing the trained model.
///
/// All fields are zero after training on empty text.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
	/// Distinct words having at least one successor.
	pub unique_words: usize,
	/// Number of `(w1, w2)` pairs seen in the training text.
	pub total_transitions: usize,
	/// Distinct sentence starters.
	pub sentence_starters: usize,
}

/// Why a random walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
	/// The minimum length was reached and the last token ends a sentence.
	Natural,
	/// The maximum length was reached.
	Forced,
	/// The last token has no known successor.
	Exhausted,
}

/// Raw output of a random walk, before post-processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
	/// Generated tokens, starting with the chosen starter.
	pub tokens: Vec<String>,
	/// Reason the walk stopped.
	pub stop_reason: StopReason,
}

impl Walk {
	/// Renders the tokens as a display string.
	pub fn render(&self) -> String {
		render(&self.tokens)
	}
}

/// Bigram text generator.
///
/// This struct manages:
/// - `table`: the transition table and starter set of the last training
/// - `rng`: the pseudorandom generator used for starter selection and for
///   every successor choice
///
/// Each instance owns its state. Sharing one model between threads requires
/// external synchronization since generation advances the random generator.
#[derive(Debug)]
pub struct BigramModel {
	table: BigramTable,
	rng: StdRng,
}

impl Default for BigramModel {
	fn default() -> Self {
		Self::new()
	}
}

impl BigramModel {
	/// Returns an empty model seeded from the operating system.
	pub fn new() -> Self {
		Self::with_rng(StdRng::from_os_rng())
	}

	/// Returns an empty model whose generations are reproducible.
	///
	/// Two models with the same seed, trained on the same text, produce
	/// the same sequence of synopses.
	pub fn with_seed(seed: u64) -> Self {
		Self::with_rng(StdRng::seed_from_u64(seed))
	}

	/// Returns an empty model using the given random generator.
	pub fn with_rng(rng: StdRng) -> Self {
		Self { table: BigramTable::default(), rng }
	}

	/// Trains the model on `text`, discarding any previous training.
	///
	/// # Behavior
	/// - Tokenizes on whitespace, punctuation stays attached to words.
	/// - Records every adjacent pair as a transition.
	/// - Collects capitalized words opening the text or following a
	///   sentence ender as starters.
	///
	/// # Notes
	/// - Empty or whitespace-only text leaves an empty model with zeroed
	///   statistics. It is logged, not reported as an error.
	pub fn load_training_data(&mut self, text: &str) {
		let tokens = tokenize(text);
		self.table = BigramTable::from_tokens(&tokens);

		if tokens.is_empty() {
			warn!("Empty training data, the model is untrained");
			return;
		}

		let stats = self.table.statistics();
		info!(
			"Trained on {} tokens: {} unique words, {} transitions, {} sentence starters",
			tokens.len(),
			stats.unique_words,
			stats.total_transitions,
			stats.sentence_starters
		);
		if self.table.is_empty() {
			warn!("Training data has a single token, no transition learned");
		}
	}

	/// Returns `true` if at least one transition was learned.
	pub fn is_trained(&self) -> bool {
		!self.table.is_empty()
	}

	/// Performs one weighted random walk.
	///
	/// # Behavior
	/// - Starts from a random sentence starter (see [`BigramTable::choose_starter`]).
	/// - Appends a successor of the current token, sampled in proportion to
	///   how often it followed that token during training.
	/// - Stops when the sequence holds at least `min_length` tokens and the
	///   last one ends a sentence, when it holds `max_length` tokens, or when
	///   the current token has no successor.
	///
	/// The walk always holds between 1 and `max_length` tokens.
	///
	/// # Errors
	/// Returns [`SynopsisError::UntrainedModel`] if no transition was learned.
	pub fn generate_tokens(&mut self, input: &GenerationInput) -> Result<Walk> {
		if !self.is_trained() {
			return Err(SynopsisError::UntrainedModel);
		}

		let Some(starter) = self.table.choose_starter(&mut self.rng) else {
			return Err(SynopsisError::UntrainedModel);
		};

		let mut tokens = vec![starter.to_owned()];
		let mut current = starter;
		let stop_reason = loop {
			if tokens.len() >= input.max_length() {
				break StopReason::Forced;
			}

			let Some(next_word) = self.table.predict(current, &mut self.rng) else {
				break StopReason::Exhausted;
			};
			tokens.push(next_word.to_owned());

			if tokens.len() >= input.min_length() && ends_sentence(next_word) {
				break StopReason::Natural;
			}
			current = next_word;
		};

		debug!("Walk of {} tokens stopped: {:?}", tokens.len(), stop_reason);
		Ok(Walk { tokens, stop_reason })
	}

	/// Generates one post-processed synopsis.
	///
	/// # Errors
	/// - [`SynopsisError::InvalidLength`] if a bound is zero or
	///   `min_length > max_length` (checked first).
	/// - [`SynopsisError::UntrainedModel`] if the model holds no transition.
	pub fn generate_synopsis(&mut self, max_length: usize, min_length: usize) -> Result<String> {
		let input = GenerationInput::new(max_length, min_length)?;
		Ok(self.generate_tokens(&input)?.render())
	}

	/// Generates `count` independent synopses with the same bounds.
	pub fn generate_multiple_synopses(&mut self, count: usize, max_length: usize, min_length: usize) -> Result<Vec<String>> {
		let mut input = GenerationInput::new(max_length, min_length)?;
		input.count = count;
		self.generate_batch(&input)
	}

	/// Generates `input.count` independent synopses.
	pub fn generate_batch(&mut self, input: &GenerationInput) -> Result<Vec<String>> {
		if !self.is_trained() {
			return Err(SynopsisError::UntrainedModel);
		}
		(0..input.count)
			.map(|_| self.generate_tokens(input).map(|walk| walk.render()))
			.collect()
	}

	/// Returns the statistics of the last training.
	pub fn get_statistics(&self) -> Statistics {
		self.table.statistics()
	}

	/// Sentence starters of the last training, in first-seen order.
	pub fn starters(&self) -> &[String] {
		self.table.starters()
	}

	/// Returns the first `sample_size` entries of the transition table.
	///
	/// Each entry is a word and its successor list, repeats included,
	/// in the order words first appeared in the training text.
	pub fn bigram_sample(&self, sample_size: usize) -> Vec<(&str, &[String])> {
		self.table.sample(sample_size)
	}
}
