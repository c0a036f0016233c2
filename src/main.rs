use anyhow::{Context, Error};
use clap::{Parser, Subcommand};
use hillock::StopWatch;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordvocab::{
    display_frequencies, load_corpus, top_words, CbowDataset, VocabConfig, Vocabulary, UNK_ID,
    UNK_TOKEN,
};

const TOP_WORDS_TO_SHOW: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "wordvocab", about = "Build and inspect word vocabularies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a corpus, build a vocabulary and save it.
    Build {
        /// Path to config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Path to the input corpus, overrides the config
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Where to write the vocabulary, overrides the config
        #[arg(long)]
        output: Option<PathBuf>,
        /// Words must occur more than this many times, overrides the config
        #[arg(long)]
        min_count: Option<usize>,
        /// Plot word frequency against rank
        #[arg(long)]
        plot: bool,
    },

    /// Load a saved vocabulary and look words up in it.
    Inspect {
        /// Path to the vocabulary file
        #[arg(long)]
        vocab: PathBuf,
        /// Word to look up, may be repeated
        #[arg(long = "word")]
        words: Vec<String>,
    },
}

fn build(
    config: Option<PathBuf>,
    corpus: Option<PathBuf>,
    output: Option<PathBuf>,
    min_count: Option<usize>,
    plot: bool,
) -> Result<(), Error> {
    let config = match config {
        Some(path) => VocabConfig::load(&path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => VocabConfig::default(),
    }
    .with_overrides(corpus, output, min_count);

    let mut stopwatch = StopWatch::new(true, false);
    stopwatch.reset();

    println!("Loading and tokenizing {:?}...", config.corpus_path);
    let tokens = load_corpus(&config.corpus_path)
        .with_context(|| format!("Failed to read corpus {:?}", config.corpus_path))?;
    println!("Total tokens: {}", tokens.len());
    stopwatch.tick("load");

    println!("Building vocabulary...");
    let (vocab, word_counts) = Vocabulary::from_tokens(&tokens, config.min_count);
    println!("Vocabulary size: {}", vocab.len());
    stopwatch.tick("build");

    vocab
        .save(&config.vocab_path)
        .with_context(|| format!("Failed to save vocabulary to {:?}", config.vocab_path))?;
    println!("Vocabulary saved to {:?}", config.vocab_path);
    stopwatch.tick("save");

    let dataset = CbowDataset::new(&tokens, &vocab, config.context_size)?;
    println!(
        "CBOW examples: {} (context size {})",
        dataset.len(),
        dataset.context_size()
    );
    stopwatch.tick("dataset");
    stopwatch.breakdown(1, "build");

    println!("Most frequent words:");
    for (rank, (word, count)) in top_words(&word_counts, TOP_WORDS_TO_SHOW)
        .into_iter()
        .enumerate()
    {
        println!("{:>3}. {} ({})", rank + 1, word, count);
    }
    if plot {
        display_frequencies(&word_counts);
    }
    Ok(())
}

fn inspect(vocab_path: PathBuf, words: Vec<String>) -> Result<(), Error> {
    let vocab = Vocabulary::load(&vocab_path)
        .with_context(|| format!("Failed to load vocabulary {:?}", vocab_path))?;
    println!("Vocabulary size: {}", vocab.len());
    if !vocab.is_consistent() {
        eprintln!("Warning: word_to_index and index_to_word are not inverse mappings");
    }
    for word in words {
        let id = vocab.index_of(&word.to_lowercase());
        if id == UNK_ID {
            println!("{:?} -> {} ({})", word, id, UNK_TOKEN);
        } else {
            println!("{:?} -> {}", word, id);
        }
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build {
            config,
            corpus,
            output,
            min_count,
            plot,
        } => build(config, corpus, output, min_count, plot),
        Commands::Inspect { vocab, words } => inspect(vocab, words),
    }
}
