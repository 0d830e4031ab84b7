use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(about = "Generate book synopses from a bigram model")]
pub struct Args {
    /// Text file to train on. The built-in fantasy sample is used when absent.
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Random number seed, for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of synopses to generate.
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Maximum number of words in a synopsis.
    #[arg(long, default_value_t = 80)]
    pub max_length: usize,

    /// Number of words before a sentence ending may stop a synopsis.
    #[arg(long, default_value_t = 20)]
    pub min_length: usize,

    /// Number of bigram entries to display.
    #[arg(long, default_value_t = 10)]
    pub sample_size: usize,

    /// Keep generating synopses on demand after the batch.
    #[arg(long, default_value_t = false)]
    pub interactive: bool,

    /// Maximum number of words in interactive mode.
    #[arg(long, default_value_t = 60)]
    pub interactive_max_length: usize,
}
