use std::collections::BTreeSet;

use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, Result};

/// An ordered set of words excluded from indexing and from query plus/minus
/// classification (§4.2). Construction validates every word the same way a
/// document or query token is validated, so a caller can't smuggle a control
/// byte in through the stop-word list.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        StopWords { words: BTreeSet::new() }
    }

    /// Builds a stop-word set from a single space-separated string, the same
    /// shape the rest of this module's text inputs take.
    pub fn from_text(text: &str) -> Result<Self> {
        if !is_valid_word(text) {
            return Err(Error::invalid_input("stop words contain a control character"));
        }
        let words = split_into_words(text).into_iter().map(str::to_owned).collect();
        Ok(StopWords { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
