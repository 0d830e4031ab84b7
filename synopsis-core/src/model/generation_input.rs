use crate::error::{Result, SynopsisError};

/// Default upper bound on the number of tokens in a synopsis.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Default number of tokens required before a natural ending is allowed.
pub const DEFAULT_MIN_LENGTH: usize = 20;

/// Default number of synopses produced by a batch generation.
pub const DEFAULT_COUNT: usize = 5;

/// Input parameters for generating synopses.
///
/// `GenerationInput` holds the length policy of a random walk and the number
/// of independent walks requested by batch generation.
///
/// # Invariants
/// - `max_length >= 1`
/// - `1 <= min_length <= max_length`
///
/// The bounds are private so that they can only change through validated
/// setters. `count` is free: zero simply produces no synopsis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Hard cap on the number of tokens (forced ending).
	max_length: usize,

	/// Number of tokens required before a sentence ender may stop the walk.
	min_length: usize,

	/// Number of synopses to generate in a batch.
	pub count: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			max_length: DEFAULT_MAX_LENGTH,
			min_length: DEFAULT_MIN_LENGTH,
			count: DEFAULT_COUNT,
		}
	}
}

impl GenerationInput {
	/// Creates a new input with the given bounds and the default count.
	///
	/// # Errors
	/// Returns [`SynopsisError::InvalidLength`] if either bound is zero or
	/// `min_length > max_length`.
	pub fn new(max_length: usize, min_length: usize) -> Result<Self> {
		Self::validate(max_length, min_length)?;
		Ok(Self { max_length, min_length, count: DEFAULT_COUNT })
	}

	fn validate(max_length: usize, min_length: usize) -> Result<()> {
		if max_length == 0 || min_length == 0 || min_length > max_length {
			return Err(SynopsisError::InvalidLength { min_length, max_length });
		}
		Ok(())
	}

	/// Returns the maximum number of tokens.
	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Returns the minimum number of tokens before a natural ending.
	pub fn min_length(&self) -> usize {
		self.min_length
	}

	/// Sets both bounds at once.
	///
	/// # Errors
	/// Returns an error if the pair is invalid; the input is left unchanged.
	pub fn set_lengths(&mut self, max_length: usize, min_length: usize) -> Result<()> {
		Self::validate(max_length, min_length)?;
		self.max_length = max_length;
		self.min_length = min_length;
		Ok(())
	}

	/// Sets the maximum number of tokens, keeping the current minimum.
	pub fn set_max_length(&mut self, max_length: usize) -> Result<()> {
		self.set_lengths(max_length, self.min_length)
	}

	/// Sets the minimum number of tokens, keeping the current maximum.
	pub fn set_min_length(&mut self, min_length: usize) -> Result<()> {
		self.set_lengths(self.max_length, min_length)
	}
}
