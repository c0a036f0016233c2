use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub type TokenId = u32;

pub type WordToIndex = HashMap<String, TokenId>;
pub type IndexToWord = HashMap<TokenId, String>;
pub type WordCounts = HashMap<String, usize>;

pub const PAD_TOKEN: &str = "<pad>";
pub const UNK_TOKEN: &str = "<unk>";
pub const PAD_ID: TokenId = 0;
pub const UNK_ID: TokenId = 1;

/// First id handed out to a corpus token; everything below is reserved.
pub const FIRST_WORD_ID: TokenId = 2;

/// Tokens must occur strictly more often than this to get their own id.
pub const DEFAULT_MIN_COUNT: usize = 5;

const RESERVED: [(&str, TokenId); 2] = [(PAD_TOKEN, PAD_ID), (UNK_TOKEN, UNK_ID)];

/// Word/id mappings. This is also the on-disk record: a JSON object with exactly the
/// fields `word_to_index` and `index_to_word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vocabulary {
    pub word_to_index: WordToIndex,
    pub index_to_word: IndexToWord,
}

#[derive(Serialize)]
struct VocabRecord<'a> {
    word_to_index: &'a WordToIndex,
    index_to_word: &'a IndexToWord,
}

impl Vocabulary {
    pub fn new(word_to_index: WordToIndex, index_to_word: IndexToWord) -> Self {
        Self {
            word_to_index,
            index_to_word,
        }
    }

    /// Build a vocabulary from a token sequence, see [`build_vocab`].
    pub fn from_tokens(tokens: &[String], min_count: usize) -> (Self, WordCounts) {
        let (word_to_index, index_to_word, word_counts) = build_vocab(tokens, min_count);
        (Self::new(word_to_index, index_to_word), word_counts)
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_vocab(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_vocab(&self.word_to_index, &self.index_to_word, path)
    }

    pub fn len(&self) -> usize {
        self.word_to_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_to_index.is_empty()
    }

    pub fn id(&self, word: &str) -> Option<TokenId> {
        self.word_to_index.get(word).copied()
    }

    pub fn word(&self, id: TokenId) -> Option<&str> {
        self.index_to_word.get(&id).map(String::as_str)
    }

    /// Id of `word`, or [`UNK_ID`] if the word did not make it into the vocabulary.
    pub fn index_of(&self, word: &str) -> TokenId {
        self.id(word).unwrap_or(UNK_ID)
    }

    pub fn encode(&self, tokens: &[String]) -> Vec<TokenId> {
        tokens.iter().map(|token| self.index_of(token)).collect()
    }

    /// True if the two mappings are exact inverses and the reserved ids are in place.
    /// Loading does not check this.
    pub fn is_consistent(&self) -> bool {
        let reserved_ok = RESERVED
            .iter()
            .all(|&(word, id)| self.id(word) == Some(id) && self.word(id) == Some(word));
        reserved_ok
            && self.word_to_index.len() == self.index_to_word.len()
            && self
                .word_to_index
                .iter()
                .all(|(word, id)| self.index_to_word.get(id) == Some(word))
    }
}

/// Count occurrences of every token.
pub fn count_words(tokens: &[String]) -> WordCounts {
    let mut word_counts = WordCounts::new();
    for token in tokens {
        *word_counts.entry(token.clone()).or_insert(0) += 1;
    }
    word_counts
}

/// Build `(word_to_index, index_to_word, word_counts)` from a token sequence.
///
/// Tokens whose count is strictly greater than `min_count` get ids from
/// [`FIRST_WORD_ID`] upwards in sorted order; `<pad>` and `<unk>` are added afterwards
/// with ids 0 and 1.
pub fn build_vocab(tokens: &[String], min_count: usize) -> (WordToIndex, IndexToWord, WordCounts) {
    let word_counts = count_words(tokens);
    tracing::debug!(
        "Counted {} distinct tokens over {} tokens",
        word_counts.len(),
        tokens.len()
    );

    let mut kept_words: Vec<&String> = word_counts
        .iter()
        .filter(|&(_, &count)| count > min_count)
        .map(|(word, _)| word)
        .collect();
    kept_words.sort();

    let mut word_to_index: WordToIndex = kept_words
        .into_iter()
        .enumerate()
        .map(|(i, word)| (word.clone(), FIRST_WORD_ID + i as TokenId))
        .collect();
    insert_reserved(&mut word_to_index);

    let index_to_word = invert(&word_to_index);
    tracing::info!(
        "Built vocabulary of {} entries (min_count = {})",
        word_to_index.len(),
        min_count
    );
    (word_to_index, index_to_word, word_counts)
}

fn insert_reserved(word_to_index: &mut WordToIndex) {
    for (word, id) in RESERVED {
        debug_assert!(
            word_to_index.values().all(|&other| other != id),
            "reserved id {} already assigned",
            id
        );
        // A corpus token spelled like a reserved token loses its own id here.
        if let Some(previous_id) = word_to_index.insert(word.to_string(), id) {
            tracing::warn!(
                "Corpus token {:?} collides with a reserved token, id {} is left unused",
                word,
                previous_id
            );
        }
    }
}

fn invert(word_to_index: &WordToIndex) -> IndexToWord {
    word_to_index
        .iter()
        .map(|(word, &id)| (id, word.clone()))
        .collect()
}

/// Write both mappings to `path` as a single JSON record, replacing any existing file.
pub fn save_vocab(
    word_to_index: &WordToIndex,
    index_to_word: &IndexToWord,
    path: &Path,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let record = VocabRecord {
        word_to_index,
        index_to_word,
    };
    serde_json::to_writer_pretty(&mut writer, &record)?;
    writer.flush()?;
    tracing::info!("Saved vocabulary of {} entries to {:?}", word_to_index.len(), path);
    Ok(())
}

/// Read a record written by [`save_vocab`].
pub fn load_vocab(path: &Path) -> Result<Vocabulary> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let vocab: Vocabulary = serde_json::from_reader(reader)?;
    tracing::info!("Loaded vocabulary of {} entries from {:?}", vocab.len(), path);
    Ok(vocab)
}
