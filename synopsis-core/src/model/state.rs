use rand::Rng;
use rand::seq::IndexedRandom;

/// Represents a state in the bigram model.
///
/// A `State` corresponds to one word (`key`) and stores every word observed
/// right after it, in training order and with repeats.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations. The weight is encoded by
/// repetition: a successor seen three times appears three times in the list.
///
/// ## Responsibilities:
/// - Accumulate successor occurrences during training
/// - Predict the next word by uniform sampling over the successor list
///
/// ## Invariants
/// - All successors belong to the same `key`
/// - A state stored in a table always has at least one successor
#[derive(Clone, Debug)]
pub struct State {
	/// Word this state starts from.
	key: String,
	/// Successors in observation order, repeats included.
	/// Example: ["sat.", "ran.", "sat."]
	next_words: Vec<String>,
}

impl State {
	/// Creates a new empty state for the given word.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			next_words: Vec::new(),
		}
	}

	/// Records an occurrence of a transition toward `next_word`.
	pub fn add_transition(&mut self, next_word: &str) {
		self.next_words.push(next_word.to_owned());
	}

	/// Predicts the next word.
	///
	/// Sampling is uniform over the list, so the probability of a word is
	/// proportional to how many times it follows `key` in the training text.
	///
	/// Returns `None` if the state has no successors.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.next_words.choose(rng).map(String::as_str)
	}

	/// Word this state starts from.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Successors in observation order, repeats included.
	pub fn successors(&self) -> &[String] {
		&self.next_words
	}
}
