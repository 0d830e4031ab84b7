use thiserror::Error;

/// Errors surfaced by the synopsis generator.
///
/// Empty training data is deliberately absent: it leaves an empty model
/// whose statistics are all zero, and the next generation reports
/// [`SynopsisError::UntrainedModel`].
#[derive(Debug, Error)]
pub enum SynopsisError {
	/// Generation was requested while the transition table is empty.
	#[error("no training data available, call load_training_data first")]
	UntrainedModel,

	/// Length bounds are zero or inverted.
	#[error("invalid length bounds: min_length={min_length}, max_length={max_length} (both must be > 0 and min_length <= max_length)")]
	InvalidLength { min_length: usize, max_length: usize },
}

pub type Result<T> = std::result::Result<T, SynopsisError>;
