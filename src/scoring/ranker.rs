use std::collections::BTreeMap;

use crate::concurrent::sharded_map::ShardedMap;
use crate::core::types::{DocumentId, DocumentRecord, ScoredDocument};
use crate::index::inverted::InvertedIndex;
use crate::query::types::ParsedQuery;

/// Relevance difference below which two documents are considered tied and
/// broken by rating instead (§4.6).
const EPSILON: f64 = 1e-6;
/// Result lists are truncated to this many documents (§4.6).
const MAX_RESULTS: usize = 5;

fn inverse_document_frequency(total_docs: usize, doc_frequency: usize) -> f64 {
    (total_docs as f64 / doc_frequency as f64).ln()
}

/// Ranks every document touched by `query`'s plus-words, accumulating
/// `tf * idf` per plus-word, then discards any document touched by a
/// minus-word. Single fixed TF-IDF kernel — this engine doesn't expose a
/// pluggable scoring strategy (§4.6).
pub fn find_top_documents(
    index: &InvertedIndex,
    registry: &BTreeMap<DocumentId, DocumentRecord>,
    query: &ParsedQuery,
    predicate: impl Fn(DocumentId, &DocumentRecord) -> bool,
) -> Vec<ScoredDocument> {
    let total_docs = registry.len();
    let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();

    for term in &query.plus_words {
        let Some(postings) = index.postings(term) else {
            continue;
        };
        let idf = inverse_document_frequency(total_docs, postings.len());
        for (&id, &tf) in postings {
            *relevance.entry(id).or_insert(0.0) += tf * idf;
        }
    }

    for term in &query.minus_words {
        if let Some(postings) = index.postings(term) {
            for &id in postings.keys() {
                relevance.remove(&id);
            }
        }
    }

    materialize(relevance, registry, predicate)
}

/// Same ranking as `find_top_documents`, but plus-word contributions are
/// accumulated into a `ShardedMap` by concurrently-running workers — the
/// parallel analogue the original's `std::execution::par` policy grounds
/// (§4.6, §4.9). A distinct entry point rather than a shared
/// execution-policy parameter, per this engine's "don't generalize" design
/// decision for sequential vs. parallel execution.
pub fn par_find_top_documents(
    index: &InvertedIndex,
    registry: &BTreeMap<DocumentId, DocumentRecord>,
    query: &ParsedQuery,
    shard_count: usize,
    predicate: impl Fn(DocumentId, &DocumentRecord) -> bool + Sync,
) -> Vec<ScoredDocument> {
    use rayon::prelude::*;

    let total_docs = registry.len();
    let accumulator: ShardedMap<DocumentId, f64> = ShardedMap::new(shard_count);

    query.plus_words.par_iter().for_each(|term| {
        let Some(postings) = index.postings(term) else {
            return;
        };
        let idf = inverse_document_frequency(total_docs, postings.len());
        for (&id, &tf) in postings {
            accumulator.update(id, |value| *value += tf * idf);
        }
    });

    let mut relevance = accumulator.build_ordinary_map();
    for term in &query.minus_words {
        if let Some(postings) = index.postings(term) {
            for &id in postings.keys() {
                relevance.remove(&id);
            }
        }
    }

    materialize(relevance, registry, predicate)
}

fn materialize(
    relevance: BTreeMap<DocumentId, f64>,
    registry: &BTreeMap<DocumentId, DocumentRecord>,
    predicate: impl Fn(DocumentId, &DocumentRecord) -> bool,
) -> Vec<ScoredDocument> {
    let mut scored: Vec<ScoredDocument> = relevance
        .into_iter()
        .filter_map(|(id, relevance)| {
            let record = registry.get(&id)?;
            predicate(id, record).then_some(ScoredDocument {
                id,
                relevance,
                rating: record.rating,
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        if (a.relevance - b.relevance).abs() < EPSILON {
            b.rating.cmp(&a.rating)
        } else {
            b.relevance.partial_cmp(&a.relevance).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
    scored.truncate(MAX_RESULTS);
    scored
}
