use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::types::DocumentId;
use crate::index::pool::StringPool;

/// Dual-view inverted index: a term-major map for scoring a query against
/// every document, and a document-major map for removal, word-frequency
/// lookups, and duplicate detection. Both views share `Arc<str>` term keys
/// out of one `StringPool` (§3), so no token is ever stored twice.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    term_major: BTreeMap<Arc<str>, BTreeMap<DocumentId, f64>>,
    doc_major: BTreeMap<DocumentId, BTreeMap<Arc<str>, f64>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            term_major: BTreeMap::new(),
            doc_major: BTreeMap::new(),
        }
    }

    pub fn document_count(&self) -> usize {
        self.doc_major.len()
    }

    pub fn contains_document(&self, id: DocumentId) -> bool {
        self.doc_major.contains_key(&id)
    }

    /// Number of distinct documents containing `term`, i.e. the document
    /// frequency the ranker needs for an idf computation.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.term_major.get(term).map_or(0, BTreeMap::len)
    }

    pub fn term_frequency(&self, term: &str, id: DocumentId) -> Option<f64> {
        self.term_major.get(term).and_then(|postings| postings.get(&id)).copied()
    }

    pub fn postings(&self, term: &str) -> Option<&BTreeMap<DocumentId, f64>> {
        self.term_major.get(term)
    }

    /// Indexes `term_freqs` (already-computed `term -> frequency` pairs, one
    /// entry per distinct token in the document) under `id`. Interns every
    /// term through `pool`. Caller guarantees `id` isn't already indexed.
    pub fn index_document<'a>(
        &mut self,
        pool: &mut StringPool,
        id: DocumentId,
        term_freqs: impl IntoIterator<Item = (&'a str, f64)>,
    ) {
        let mut doc_terms = BTreeMap::new();
        for (term, freq) in term_freqs {
            let key = pool.intern(term);
            self.term_major
                .entry(Arc::clone(&key))
                .or_default()
                .insert(id, freq);
            doc_terms.insert(key, freq);
        }
        self.doc_major.insert(id, doc_terms);
    }

    /// Removes every posting for `id`, dropping term-major keys (and their
    /// pool entries) that no other document references.
    pub fn remove_document(&mut self, pool: &mut StringPool, id: DocumentId) {
        let Some(terms) = self.doc_major.remove(&id) else {
            return;
        };
        for term in terms.keys() {
            self.remove_posting(pool, term, id);
        }
    }

    /// Same contract as `remove_document`, but resolves which term-major
    /// entries become empty in parallel before mutating the shared maps
    /// sequentially. Mirrors the teacher's `rayon::scope` split-then-apply
    /// shape for parallel writers.
    pub fn par_remove_document(&mut self, pool: &mut StringPool, id: DocumentId) {
        use rayon::prelude::*;

        let Some(terms) = self.doc_major.remove(&id) else {
            return;
        };
        let term_major = &self.term_major;
        let should_drop: Vec<Arc<str>> = terms
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .par_iter()
            .filter_map(|term| {
                let empties_after_removal = term_major
                    .get(term.as_ref())
                    .map(|postings| postings.len() == 1 && postings.contains_key(&id))
                    .unwrap_or(false);
                empties_after_removal.then(|| Arc::clone(term))
            })
            .collect();

        for term in terms.keys() {
            if let Some(postings) = self.term_major.get_mut(term.as_ref()) {
                postings.remove(&id);
            }
        }
        for term in should_drop {
            self.term_major.remove(&term);
            pool.release(&term);
        }
    }

    fn remove_posting(&mut self, pool: &mut StringPool, term: &str, id: DocumentId) {
        if let Some(postings) = self.term_major.get_mut(term) {
            postings.remove(&id);
            if postings.is_empty() {
                self.term_major.remove(term);
                pool.release(term);
            }
        }
    }

    /// `term -> frequency` for `id`, empty if the document is unknown.
    pub fn word_frequencies(&self, id: DocumentId) -> BTreeMap<String, f64> {
        self.doc_major
            .get(&id)
            .map(|terms| terms.iter().map(|(term, freq)| (term.to_string(), *freq)).collect())
            .unwrap_or_default()
    }

    pub fn term_set(&self, id: DocumentId) -> Option<Vec<Arc<str>>> {
        self.doc_major.get(&id).map(|terms| terms.keys().cloned().collect())
    }

    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.doc_major.keys().copied()
    }
}
