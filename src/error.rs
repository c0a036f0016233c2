//! Error types for vocabulary preprocessing.

use thiserror::Error;

/// Errors raised while loading corpora, building vocabularies or reading config.
#[derive(Debug, Error)]
pub enum VocabError {
    /// File missing, permission denied or otherwise unreadable/unwritable.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus bytes are not valid UTF-8.
    #[error("corpus is not valid utf-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Persisted vocabulary does not match the expected record.
    #[error("vocabulary (de)serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration file is not valid TOML for [`crate::VocabConfig`].
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A configuration value is out of range, e.g. a zero context size.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VocabError>;
