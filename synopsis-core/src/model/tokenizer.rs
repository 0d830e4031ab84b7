/// Punctuation marks that end a sentence.
pub const SENTENCE_ENDERS: [char; 3] = ['.', '!', '?'];

/// Terminator appended when a synopsis does not end a sentence on its own.
pub const DEFAULT_TERMINATOR: char = '.';

/// Punctuation that glues to the previous word when rendering.
pub const ATTACHING_PUNCTUATION: [char; 6] = ['.', '!', '?', ',', ':', ';'];

/// Splits raw text into word tokens.
///
/// Whitespace runs (spaces, tabs, newlines) are treated as a single
/// separator and punctuation stays attached to the word it touches,
/// so `"sat. The"` gives `["sat.", "The"]`.
///
/// Empty or whitespace-only text gives an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

/// Returns `true` if the token ends with a sentence ender.
pub fn ends_sentence(token: &str) -> bool {
	token.ends_with(SENTENCE_ENDERS)
}

/// Returns `true` if the first character of the token is uppercase.
pub fn starts_uppercase(token: &str) -> bool {
	token.chars().next().is_some_and(char::is_uppercase)
}
