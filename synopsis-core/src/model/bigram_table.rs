use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::IndexedRandom;

use super::bigram_model::Statistics;
use super::state::State;
use super::tokenizer::{ends_sentence, starts_uppercase};

/// Transition table and starter set learned from one token sequence.
///
/// # Responsibilities
/// - Count bigrams: for every adjacent pair `(w1, w2)`, append `w2` to the
///   state of `w1`
/// - Detect sentence starters: capitalized tokens that open the text or
///   follow a token ending a sentence
/// - Pick a starting word, with fallbacks when no starter was found
///
/// # Invariants
/// - Every state in `states` has at least one successor
/// - `keys` lists the keys of `states` in first-seen order, without duplicates
/// - `starters` holds distinct tokens in first-seen order
///
/// Random choices only ever index into `keys` or `starters`, never into the
/// hash map, so a seeded generator reproduces the same output.
#[derive(Clone, Debug, Default)]
pub struct BigramTable {
	/// Mapping from a word to its successor list.
	states: HashMap<String, State>,
	/// Keys of `states` in first-seen order.
	keys: Vec<String>,
	/// Sentence starters in first-seen order.
	starters: Vec<String>,
	/// Number of `(w1, w2)` pairs processed.
	total_transitions: usize,
}

impl BigramTable {
	/// Builds the table from a token sequence.
	///
	/// A sequence shorter than two tokens has no bigrams. Its single token
	/// can still be recorded as a starter but the table stays empty.
	pub fn from_tokens(tokens: &[String]) -> Self {
		let mut table = Self::default();
		let mut seen_starters: HashSet<&str> = HashSet::new();

		for (i, token) in tokens.iter().enumerate() {
			let opens_sentence = i == 0 || ends_sentence(&tokens[i - 1]);
			if opens_sentence && starts_uppercase(token) && seen_starters.insert(token) {
				table.starters.push(token.clone());
			}

			if let Some(next_word) = tokens.get(i + 1) {
				table.add_transition(token, next_word);
			}
		}

		table
	}

	fn add_transition(&mut self, word: &str, next_word: &str) {
		let state = match self.states.entry(word.to_owned()) {
			Entry::Occupied(entry) => entry.into_mut(),
			Entry::Vacant(entry) => {
				self.keys.push(word.to_owned());
				entry.insert(State::new(word))
			}
		};
		state.add_transition(next_word);
		self.total_transitions += 1;
	}

	/// Returns `true` if no bigram was recorded.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Samples the successor of `word`, weighted by observation count.
	///
	/// Returns `None` if `word` never appeared with a successor.
	pub fn predict<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> Option<&str> {
		self.states.get(word)?.predict(rng)
	}

	/// Picks the first word of a generated sequence.
	///
	/// - Uniformly among the sentence starters, if any
	/// - Otherwise uniformly among capitalized keys of the table
	/// - Otherwise uniformly among all keys of the table
	///
	/// Returns `None` only when the table and the starter set are both empty.
	pub fn choose_starter<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if let Some(starter) = self.starters.choose(rng) {
			return Some(starter);
		}

		let capitalized: Vec<&str> = self
			.keys
			.iter()
			.map(String::as_str)
			.filter(|key| starts_uppercase(key))
			.collect();
		if let Some(word) = capitalized.choose(rng).copied() {
			return Some(word);
		}

		self.keys.choose(rng).map(String::as_str)
	}

	/// Sentence starters in first-seen order.
	pub fn starters(&self) -> &[String] {
		&self.starters
	}

	/// Successor list of `word`, repeats included.
	pub fn successors(&self, word: &str) -> Option<&[String]> {
		self.states.get(word).map(State::successors)
	}

	/// First `sample_size` entries of the table, in first-seen order.
	pub fn sample(&self, sample_size: usize) -> Vec<(&str, &[String])> {
		self.keys
			.iter()
			.take(sample_size)
			.filter_map(|key| self.states.get(key))
			.map(|state| (state.key(), state.successors()))
			.collect()
	}

	/// Counts derived from the table.
	pub fn statistics(&self) -> Statistics {
		Statistics {
			unique_words: self.states.len(),
			total_transitions: self.total_transitions,
			sentence_starters: self.starters.len(),
		}
	}
}
