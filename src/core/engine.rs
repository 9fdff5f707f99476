use std::collections::{BTreeMap, HashMap};

use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::config::EngineConfig;
use crate::core::error::{Error, Result};
use crate::core::types::{DocumentId, DocumentRecord, ScoredDocument, Status};
use crate::index::inverted::InvertedIndex;
use crate::index::pool::StringPool;
use crate::query::matcher;
use crate::query::parser;
use crate::scoring::ranker;
use crate::search::dedup;

/// Top-level facade tying the tokenizer, inverted index, query parser, and
/// ranker together into the single in-memory retrieval engine this crate
/// exposes (§2, §4.3). Owns its documents; nothing here is persisted.
pub struct Engine {
    stop_words: StopWords,
    index: InvertedIndex,
    pool: StringPool,
    registry: BTreeMap<DocumentId, DocumentRecord>,
    config: EngineConfig,
}

/// Truncated integer mean of a document's ratings; 0 for an empty slice.
fn average_rating(ratings: &[i64]) -> i64 {
    if ratings.is_empty() {
        0
    } else {
        ratings.iter().sum::<i64>() / ratings.len() as i64
    }
}

impl Engine {
    pub fn new(stop_words_text: &str, config: EngineConfig) -> Result<Self> {
        Ok(Engine {
            stop_words: StopWords::from_text(stop_words_text)?,
            index: InvertedIndex::new(),
            pool: StringPool::new(),
            registry: BTreeMap::new(),
            config,
        })
    }

    pub fn with_default_config(stop_words_text: &str) -> Result<Self> {
        Engine::new(stop_words_text, EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tokenizes and indexes `text` under `id` (§4.1, §4.3). Rejects a
    /// reused id, a control character anywhere in the text, and a document
    /// whose every token is a stop word — there would be nothing left to
    /// index (§9 Empty-token division). `ratings` is averaged into the
    /// document's stored rating via truncated integer division, 0 for an
    /// empty slice.
    pub fn add_document(&mut self, id: DocumentId, text: &str, status: Status, ratings: &[i64]) -> Result<()> {
        if self.registry.contains_key(&id) {
            return Err(Error::invalid_input(format!("document {} is already indexed", id.value())));
        }

        let words = split_into_words(text);
        for word in &words {
            if !is_valid_word(word) {
                return Err(Error::invalid_input(format!("document {} contains a control character", id.value())));
            }
        }

        let indexable: Vec<&str> = words.into_iter().filter(|word| !self.stop_words.contains(word)).collect();
        if indexable.is_empty() {
            return Err(Error::invalid_input(format!(
                "document {} has no indexable terms once stop words are removed",
                id.value()
            )));
        }

        let inv_count = 1.0 / indexable.len() as f64;
        let mut term_freqs: HashMap<&str, f64> = HashMap::new();
        for word in &indexable {
            *term_freqs.entry(word).or_insert(0.0) += inv_count;
        }

        let rating = average_rating(ratings);
        self.index.index_document(&mut self.pool, id, term_freqs.into_iter());
        self.registry.insert(id, DocumentRecord { rating, status });
        Ok(())
    }

    pub fn remove_document(&mut self, id: DocumentId) -> Result<()> {
        if self.registry.remove(&id).is_none() {
            return Err(Error::not_found(format!("document {} is not indexed", id.value())));
        }
        self.index.remove_document(&mut self.pool, id);
        Ok(())
    }

    pub fn par_remove_document(&mut self, id: DocumentId) -> Result<()> {
        if self.registry.remove(&id).is_none() {
            return Err(Error::not_found(format!("document {} is not indexed", id.value())));
        }
        self.index.par_remove_document(&mut self.pool, id);
        Ok(())
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with_status(raw_query, Status::Actual)
    }

    pub fn find_top_documents_with_status(&self, raw_query: &str, status: Status) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with(raw_query, move |_, record: &DocumentRecord| record.status == status)
    }

    pub fn find_top_documents_with(
        &self,
        raw_query: &str,
        predicate: impl Fn(DocumentId, &DocumentRecord) -> bool,
    ) -> Result<Vec<ScoredDocument>> {
        let query = parser::parse(raw_query, &self.stop_words)?;
        Ok(ranker::find_top_documents(&self.index, &self.registry, &query, predicate))
    }

    pub fn par_find_top_documents(&self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        self.par_find_top_documents_with_status(raw_query, Status::Actual)
    }

    pub fn par_find_top_documents_with_status(&self, raw_query: &str, status: Status) -> Result<Vec<ScoredDocument>> {
        self.par_find_top_documents_with(raw_query, move |_, record: &DocumentRecord| record.status == status)
    }

    pub fn par_find_top_documents_with(
        &self,
        raw_query: &str,
        predicate: impl Fn(DocumentId, &DocumentRecord) -> bool + Sync,
    ) -> Result<Vec<ScoredDocument>> {
        let query = parser::parse(raw_query, &self.stop_words)?;
        Ok(ranker::par_find_top_documents(
            &self.index,
            &self.registry,
            &query,
            self.config.shard_count,
            predicate,
        ))
    }

    pub fn match_document(&self, raw_query: &str, id: DocumentId) -> Result<Vec<String>> {
        let query = parser::parse(raw_query, &self.stop_words)?;
        matcher::match_document(&self.index, &query, id)
    }

    pub fn par_match_documents(&self, raw_query: &str, ids: &[DocumentId]) -> Result<Vec<Result<Vec<String>>>> {
        let query = parser::parse(raw_query, &self.stop_words)?;
        Ok(matcher::par_match_documents(&self.index, &query, ids))
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    pub fn word_frequencies(&self, id: DocumentId) -> BTreeMap<String, f64> {
        self.index.word_frequencies(id)
    }

    pub fn status(&self, id: DocumentId) -> Option<Status> {
        self.registry.get(&id).map(|record| record.status)
    }

    pub fn iter(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.index.document_ids()
    }

    pub fn remove_duplicates(&mut self) -> Vec<DocumentId> {
        let removed = dedup::remove_duplicates(&mut self.index, &mut self.pool);
        for id in &removed {
            self.registry.remove(id);
        }
        removed
    }

    pub fn par_remove_duplicates(&mut self) -> Vec<DocumentId> {
        let removed = dedup::par_remove_duplicates(&mut self.index, &mut self.pool);
        for id in &removed {
            self.registry.remove(id);
        }
        removed
    }
}
