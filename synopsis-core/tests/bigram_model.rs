use approx::assert_abs_diff_eq;

use synopsis_core::model::tokenizer::SENTENCE_ENDERS;
use synopsis_core::{BigramModel, GenerationInput, Statistics, SynopsisError};

const SAMPLE_TEXT: &str = "
    The brave young warrior embarked on a perilous journey to save the kingdom.
    Against all odds, she fought against ancient evil forces that threatened the land.
    The magical sword glowed with power as she faced the dark sorcerer in battle.

    A tale of love and adventure unfolds in the mystical realm of dragons and wizards.
    The prince must rescue the princess from the tower where she has been imprisoned.
    Evil creatures lurk in the shadows, waiting to prevent the hero from succeeding.
";

fn trained(seed: u64, text: &str) -> BigramModel {
	let mut model = BigramModel::with_seed(seed);
	model.load_training_data(text);
	model
}

#[test]
fn test_cat_and_dog_scenario() {
	let mut model = trained(0, "The cat sat. The dog ran.");

	assert_eq!(
		model.get_statistics(),
		Statistics { unique_words: 4, total_transitions: 5, sentence_starters: 1 }
	);

	let synopsis = model.generate_synopsis(10, 2).unwrap();
	assert!(synopsis.starts_with("The"), "got {synopsis:?}");
}

#[test]
fn test_empty_training_scenario() {
	let mut model = trained(0, "");

	assert_eq!(model.get_statistics(), Statistics::default());
	assert!(matches!(model.generate_synopsis(10, 2), Err(SynopsisError::UntrainedModel)));
}

#[test]
fn test_whitespace_training_resets_model() {
	let mut model = trained(0, SAMPLE_TEXT);
	assert!(model.is_trained());

	model.load_training_data(" \n\t ");
	assert!(!model.is_trained());
	assert_eq!(model.get_statistics(), Statistics::default());
}

#[test]
fn test_invalid_bounds_scenario() {
	let mut model = trained(0, SAMPLE_TEXT);

	assert!(matches!(
		model.generate_synopsis(5, 10),
		Err(SynopsisError::InvalidLength { min_length: 10, max_length: 5 })
	));
	assert!(matches!(model.generate_synopsis(0, 0), Err(SynopsisError::InvalidLength { .. })));
	assert!(matches!(model.generate_synopsis(10, 0), Err(SynopsisError::InvalidLength { .. })));

	// Bounds are checked before the model state
	let mut untrained = BigramModel::with_seed(0);
	assert!(matches!(untrained.generate_synopsis(5, 10), Err(SynopsisError::InvalidLength { .. })));
}

#[test]
fn test_same_seed_same_output() {
	let mut first = trained(1234, SAMPLE_TEXT);
	let mut second = trained(1234, SAMPLE_TEXT);

	let first_batch = first.generate_multiple_synopses(10, 40, 5).unwrap();
	let second_batch = second.generate_multiple_synopses(10, 40, 5).unwrap();
	assert_eq!(first_batch, second_batch);
}

#[test]
fn test_length_bound() {
	for seed in 0..50 {
		let mut model = trained(seed, SAMPLE_TEXT);
		for (max_length, min_length) in [(1, 1), (3, 1), (8, 8), (15, 5), (60, 20)] {
			let input = GenerationInput::new(max_length, min_length).unwrap();
			let walk = model.generate_tokens(&input).unwrap();
			assert!(!walk.tokens.is_empty());
			assert!(walk.tokens.len() <= max_length);
		}
	}
}

#[test]
fn test_walk_begins_with_starter() {
	let mut model = trained(77, SAMPLE_TEXT);
	let starters = model.starters().to_vec();
	assert_eq!(starters, ["The", "Against", "A", "Evil"]);

	let input = GenerationInput::new(30, 5).unwrap();
	for _ in 0..200 {
		let walk = model.generate_tokens(&input).unwrap();
		assert!(starters.contains(&walk.tokens[0]));
	}
}

#[test]
fn test_walk_begins_with_any_key_without_starters() {
	let text = "once upon a time there was a king and a queen";
	let mut model = trained(5, text);
	assert!(model.starters().is_empty());

	let keys: Vec<&str> = text.split_whitespace().collect();
	let input = GenerationInput::new(5, 1).unwrap();
	for _ in 0..50 {
		let walk = model.generate_tokens(&input).unwrap();
		assert!(keys.contains(&walk.tokens[0].as_str()));
	}
}

#[test]
fn test_non_degeneracy() {
	let model = trained(0, "hello world");
	let stats = model.get_statistics();
	assert!(stats.unique_words >= 1);
	assert!(stats.total_transitions >= 1);
}

#[test]
fn test_repeating_word_terminates_at_max_length() {
	let mut model = trained(0, "again again again again again");
	let synopsis = model.generate_synopsis(25, 10).unwrap();
	assert_eq!(synopsis.split_whitespace().count(), 25);
	assert!(synopsis.starts_with("Again again"));
	assert!(synopsis.ends_with("again."));
}

#[test]
fn test_output_format() {
	for seed in 0..100 {
		let mut model = trained(seed, SAMPLE_TEXT);
		let synopsis = model.generate_synopsis(40, 3).unwrap();

		let mut chars = synopsis.chars().rev();
		let last = chars.next().unwrap();
		let before_last = chars.next().unwrap();
		assert!(synopsis.chars().next().unwrap().is_uppercase(), "got {synopsis:?}");
		assert!(SENTENCE_ENDERS.contains(&last), "got {synopsis:?}");
		assert!(!SENTENCE_ENDERS.contains(&before_last), "got {synopsis:?}");
	}
}

#[test]
fn test_repeats_act_as_weights() {
	// "A" is followed by "b." three times and by "c." once
	let mut model = trained(2024, "A b. A b. A b. A c.");
	let input = GenerationInput::new(2, 1).unwrap();

	let runs = 4000;
	let mut b_count = 0;
	for _ in 0..runs {
		let walk = model.generate_tokens(&input).unwrap();
		if walk.tokens[1] == "b." {
			b_count += 1;
		}
	}

	let ratio = b_count as f64 / runs as f64;
	assert_abs_diff_eq!(ratio, 0.75, epsilon = 0.03);
}

#[test]
fn test_bigram_sample() {
	let model = trained(0, SAMPLE_TEXT);
	let sample = model.bigram_sample(3);

	assert_eq!(sample.len(), 3);
	assert_eq!(sample[0].0, "The");
	assert_eq!(sample[1], ("brave", &["young".to_owned()][..]));
	assert_eq!(sample[2].0, "young");
}
