use crate::error::{Result, VocabError};
use crate::vocab::{TokenId, Vocabulary};

/// CBOW training examples: each target word paired with the `context_size` words on
/// either side of it. Positions without a full window at the corpus edges are skipped.
#[derive(Clone, Debug)]
pub struct CbowDataset {
    ids: Vec<TokenId>,
    context_size: usize,
    len: usize,
}

impl CbowDataset {
    pub fn new(tokens: &[String], vocab: &Vocabulary, context_size: usize) -> Result<Self> {
        if context_size == 0 {
            return Err(VocabError::Config(
                "[context_size] must be at least 1 in a CbowDataset".to_string(),
            ));
        }
        let ids = vocab.encode(tokens);
        let len = ids.len().saturating_sub(2 * context_size);
        Ok(CbowDataset {
            ids,
            context_size,
            len,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn context_size(&self) -> usize {
        self.context_size
    }

    /// Example `i` as `(context, target)`.
    pub fn get(&self, i: usize) -> Option<(Vec<TokenId>, TokenId)> {
        if i >= self.len {
            return None;
        }
        let center = i + self.context_size;
        let context = self.ids[i..center]
            .iter()
            .chain(&self.ids[center + 1..=center + self.context_size])
            .copied()
            .collect();
        Some((context, self.ids[center]))
    }

    pub fn iter(&self) -> CbowIter<'_> {
        CbowIter {
            dataset: self,
            i: 0,
        }
    }
}

/// Iterator over the examples of a [`CbowDataset`]
#[derive(Clone)]
pub struct CbowIter<'a> {
    dataset: &'a CbowDataset,
    i: usize,
}

impl Iterator for CbowIter<'_> {
    type Item = (Vec<TokenId>, TokenId);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.dataset.get(self.i);
        if item.is_some() {
            self.i += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.len.saturating_sub(self.i);
        (remaining, Some(remaining))
    }
}

impl<'a> IntoIterator for &'a CbowDataset {
    type Item = (Vec<TokenId>, TokenId);
    type IntoIter = CbowIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use crate::vocab::UNK_ID;

    fn vocab_for(tokens: &[String]) -> Vocabulary {
        Vocabulary::from_tokens(tokens, 0).0
    }

    #[test]
    fn test_windows_skip_edges() {
        let tokens = tokenize("a b c d e");
        let vocab = vocab_for(&tokens);
        let dataset = CbowDataset::new(&tokens, &vocab, 1).unwrap();
        assert_eq!(dataset.len(), 3);

        // a=2 b=3 c=4 d=5 e=6
        let examples: Vec<_> = dataset.iter().collect();
        assert_eq!(
            examples,
            vec![(vec![2, 4], 3), (vec![3, 5], 4), (vec![4, 6], 5)]
        );
    }

    #[test]
    fn test_context_has_both_sides() {
        let tokens = tokenize("a b c d e f g");
        let vocab = vocab_for(&tokens);
        let dataset = CbowDataset::new(&tokens, &vocab, 2).unwrap();
        assert_eq!(dataset.len(), 3);
        let (context, target) = dataset.get(0).unwrap();
        assert_eq!(context.len(), 4);
        assert_eq!(target, vocab.index_of("c"));
        assert_eq!(
            context,
            vec![
                vocab.index_of("a"),
                vocab.index_of("b"),
                vocab.index_of("d"),
                vocab.index_of("e")
            ]
        );
        assert!(dataset.get(3).is_none());
    }

    #[test]
    fn test_unknown_words_encode_as_unk() {
        let vocab = vocab_for(&tokenize("known known"));
        let tokens = tokenize("known mystery known");
        let dataset = CbowDataset::new(&tokens, &vocab, 1).unwrap();
        let (context, target) = dataset.get(0).unwrap();
        assert_eq!(target, UNK_ID);
        assert_eq!(context, vec![2, 2]);
    }

    #[test]
    fn test_short_corpus_is_empty() {
        let tokens = tokenize("only three words");
        let vocab = vocab_for(&tokens);
        let dataset = CbowDataset::new(&tokens, &vocab, 2).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.iter().count(), 0);
    }

    #[test]
    fn test_zero_context_size_is_rejected() {
        let tokens = tokenize("a b c");
        let vocab = vocab_for(&tokens);
        let result = CbowDataset::new(&tokens, &vocab, 0);
        assert!(matches!(result, Err(VocabError::Config(_))));
    }

    #[test]
    fn test_dataset_uses_configured_context_size() {
        let config = crate::VocabConfig::from_toml_str("context_size = 2").unwrap();
        let tokens = tokenize("a b c d e f g h");
        let (vocab, _) = Vocabulary::from_tokens(&tokens, config.min_count);
        let dataset = CbowDataset::new(&tokens, &vocab, config.context_size).unwrap();
        assert_eq!(dataset.context_size(), 2);
        assert_eq!(dataset.len(), 4);
        // every word is below the default threshold
        assert!(dataset.iter().all(|(context, target)| {
            context.len() == 4 && context.iter().all(|&id| id == UNK_ID) && target == UNK_ID
        }));
    }

    #[test]
    fn test_iter_size_hint_matches_len() {
        let tokens = tokenize("a b c d e f");
        let vocab = vocab_for(&tokens);
        let dataset = CbowDataset::new(&tokens, &vocab, 1).unwrap();
        let mut iter = dataset.iter();
        assert_eq!(iter.size_hint(), (4, Some(4)));
        iter.next();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!((&dataset).into_iter().count(), dataset.len());
    }
}
