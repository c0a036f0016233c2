use crate::error::{Result, VocabError};
use crate::vocab::DEFAULT_MIN_COUNT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONTEXT_SIZE: usize = 5;

/// Paths and hyperparameters of the preprocessing run, read from a TOML file.
/// Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VocabConfig {
    pub corpus_path: PathBuf,
    pub vocab_path: PathBuf,
    pub min_count: usize,
    pub context_size: usize,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from("data/text8"),
            vocab_path: PathBuf::from("data/text8_vocab.json"),
            min_count: DEFAULT_MIN_COUNT,
            context_size: DEFAULT_CONTEXT_SIZE,
        }
    }
}

impl VocabConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: VocabConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Replace the values given on the command line; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        corpus_path: Option<PathBuf>,
        vocab_path: Option<PathBuf>,
        min_count: Option<usize>,
    ) -> Self {
        if let Some(corpus_path) = corpus_path {
            self.corpus_path = corpus_path;
        }
        if let Some(vocab_path) = vocab_path {
            self.vocab_path = vocab_path;
        }
        if let Some(min_count) = min_count {
            self.min_count = min_count;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.context_size == 0 {
            return Err(VocabError::Config(
                "[context_size] must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
