pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod tokenizer;
pub mod vocab;

pub use config::VocabConfig;
pub use data::CbowDataset;
pub use error::{Result, VocabError};
pub use report::{display_frequencies, top_words};
pub use tokenizer::{load_corpus, tokenize};
pub use vocab::{
    build_vocab, count_words, load_vocab, save_vocab, TokenId, Vocabulary, WordCounts,
    DEFAULT_MIN_COUNT, PAD_ID, PAD_TOKEN, UNK_ID, UNK_TOKEN,
};
