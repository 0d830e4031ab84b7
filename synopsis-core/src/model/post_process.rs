//! Turns a generated token sequence into a readable sentence.
//!
//! Rules, applied in order:
//! 1. Tokens are joined with single spaces. Punctuation that starts a token
//!    (`word ,`) is glued to the previous word, and a sentence ender directly
//!    followed by an uppercase letter gets exactly one space.
//! 2. The first letter is uppercased.
//! 3. The text ends with exactly one sentence ender. A trailing run such as
//!    `?!` keeps only its last mark; otherwise trailing `,` `:` `;` are dropped
//!    and [`DEFAULT_TERMINATOR`] is appended.

use super::tokenizer::{ATTACHING_PUNCTUATION, DEFAULT_TERMINATOR, SENTENCE_ENDERS};

/// Renders tokens as a display string.
///
/// Returns an empty string for an empty slice, and a non-empty string
/// ending with a sentence ender otherwise.
pub fn render(tokens: &[String]) -> String {
	if tokens.is_empty() {
		return String::new();
	}

	let mut text = join_tokens(tokens);
	capitalize_first_letter(&mut text);
	terminate(&mut text);
	text
}

fn join_tokens(tokens: &[String]) -> String {
	let mut joined = String::new();
	for token in tokens {
		if !joined.is_empty() && !token.starts_with(ATTACHING_PUNCTUATION) {
			joined.push(' ');
		}
		joined.push_str(token);
	}

	let mut text = String::with_capacity(joined.len());
	let mut chars = joined.chars().peekable();
	while let Some(c) = chars.next() {
		text.push(c);
		if SENTENCE_ENDERS.contains(&c) && chars.peek().is_some_and(|next| next.is_uppercase()) {
			text.push(' ');
		}
	}
	text
}

fn capitalize_first_letter(text: &mut String) {
	let first_letter = text.char_indices().find(|(_, c)| c.is_alphabetic());
	if let Some((index, c)) = first_letter {
		if !c.is_uppercase() {
			let upper: String = c.to_uppercase().collect();
			text.replace_range(index..index + c.len_utf8(), &upper);
		}
	}
}

fn terminate(text: &mut String) {
	let kept = text.trim_end_matches(SENTENCE_ENDERS).len();
	let last_ender = text[kept..].chars().last();
	if let Some(ender) = last_ender {
		text.truncate(kept);
		text.push(ender);
		return;
	}

	let kept = text.trim_end_matches([',', ':', ';']).len();
	text.truncate(kept);
	text.push(DEFAULT_TERMINATOR);
}
