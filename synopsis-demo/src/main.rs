mod args;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use synopsis_core::BigramModel;
use synopsis_core::io::read_training_file;

/// Training text used when no corpus file is given.
const SAMPLE_TRAINING_TEXT: &str = "
    The brave young warrior embarked on a perilous journey to save the kingdom.
    Against all odds, she fought against ancient evil forces that threatened the land.
    The magical sword glowed with power as she faced the dark sorcerer in battle.

    A tale of love and adventure unfolds in the mystical realm of dragons and wizards.
    The prince must rescue the princess from the tower where she has been imprisoned.
    Evil creatures lurk in the shadows, waiting to prevent the hero from succeeding.

    In a world where magic is forbidden, a young girl discovers her hidden powers.
    She must learn to control her abilities while avoiding the king's guards.
    The fate of the kingdom rests in her hands as she prepares for the final confrontation.

    Two unlikely friends join forces to defeat the tyrant who rules their homeland.
    Their adventure takes them through dangerous forests and treacherous mountains.
    Only together can they hope to restore peace to their war-torn country.

    The last surviving member of an ancient order seeks revenge against those who betrayed her people.
    Armed with legendary weapons and forgotten spells, she begins her quest for justice.
    Dark secrets from the past threaten to consume her as she walks the path of vengeance.
";

/// Successors displayed per word in the bigram sample.
const SHOWN_SUCCESSORS: usize = 10;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    // Seeded runs are reproducible, otherwise the OS provides the seed
    let mut generator = match args.seed {
        Some(seed) => BigramModel::with_seed(seed),
        None => BigramModel::new(),
    };

    let training_data = match &args.corpus {
        Some(path) => read_training_file(path).with_context(|| format!("Unable to read corpus {}", path.display()))?,
        None => SAMPLE_TRAINING_TEXT.to_owned(),
    };
    generator.load_training_data(&training_data);

    let stats = generator.get_statistics();
    println!("Training Data Statistics:");
    println!("Unique words: {}", stats.unique_words);
    println!("Total word transitions: {}", stats.total_transitions);
    println!("Sentence starters: {}", stats.sentence_starters);
    println!();

    println!("Sample of bigrams dictionary:");
    for (word, next_words) in generator.bigram_sample(args.sample_size) {
        let shown: Vec<&str> = next_words.iter().take(SHOWN_SUCCESSORS).map(String::as_str).collect();
        let ellipsis = if next_words.len() > SHOWN_SUCCESSORS { "..." } else { "" };
        println!("\"{}\": {:?}{}", word, shown, ellipsis);
    }
    println!();

    println!("Generated Book Synopses:");
    println!("{}", "-".repeat(50));
    let synopses = generator.generate_multiple_synopses(args.count, args.max_length, args.min_length)?;
    for (i, synopsis) in synopses.iter().enumerate() {
        println!("Synopsis {}:", i + 1);
        println!("{}", synopsis);
        println!();
    }

    if args.interactive {
        run_interactive(&mut generator, args.interactive_max_length, args.min_length)?;
    }

    Ok(())
}

/// Generates a new synopsis each time Enter is pressed, until `quit`,
/// `exit`, `q` or end of input.
fn run_interactive(generator: &mut BigramModel, max_length: usize, min_length: usize) -> Result<()> {
    // The configured minimum may exceed the shorter interactive maximum
    let min_length = min_length.min(max_length);

    println!("Interactive Mode - Press Enter to generate new synopses (type 'quit' to exit):");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nPress Enter for new synopsis: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let user_input = line?.trim().to_lowercase();
        if ["quit", "exit", "q"].contains(&user_input.as_str()) {
            break;
        }

        let synopsis = generator.generate_synopsis(max_length, min_length)?;
        println!("New synopsis:");
        println!("{}", synopsis);
    }

    info!("Leaving interactive mode");
    Ok(())
}
