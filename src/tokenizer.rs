use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Lowercase `text` and split it on runs of whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Read a UTF-8 corpus file and tokenize its full contents.
///
/// Fails with [`VocabError::Io`](crate::VocabError::Io) if the file cannot be read and
/// with [`VocabError::Decode`](crate::VocabError::Decode) if it is not valid UTF-8.
pub fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let mut bytes = Vec::new();
    {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        reader.read_to_end(&mut bytes)?;
    }
    let text = String::from_utf8(bytes)?;
    let tokens = tokenize(&text);
    tracing::info!("Loaded {} tokens from {:?}", tokens.len(), path);
    Ok(tokens)
}
