use crate::core::error::{Error, Result};
use crate::core::types::DocumentId;
use crate::index::inverted::InvertedIndex;
use crate::query::types::ParsedQuery;

/// Matches a parsed query against a single document (§4.7): lists the
/// plus-words the document contains, in ascending order, unless the
/// document contains any minus-word, in which case the match is empty.
/// Errors with `NotFound` if `id` isn't indexed.
pub fn match_document(index: &InvertedIndex, query: &ParsedQuery, id: DocumentId) -> Result<Vec<String>> {
    if !index.contains_document(id) {
        return Err(Error::not_found(format!("document {} is not indexed", id.value())));
    }

    for minus_word in &query.minus_words {
        if postings_contain(index, minus_word, id) {
            return Ok(Vec::new());
        }
    }

    let matched = query
        .plus_words
        .iter()
        .filter(|plus_word| postings_contain(index, plus_word, id))
        .cloned()
        .collect();
    Ok(matched)
}

/// Matches `query` against every id in `ids` concurrently, preserving the
/// input order in the returned `Vec`. Mirrors the teacher's
/// `rayon::prelude::*`-based parallel indexer idiom.
pub fn par_match_documents(
    index: &InvertedIndex,
    query: &ParsedQuery,
    ids: &[DocumentId],
) -> Vec<Result<Vec<String>>> {
    use rayon::prelude::*;

    ids.par_iter().map(|&id| match_document(index, query, id)).collect()
}

fn postings_contain(index: &InvertedIndex, term: &str, id: DocumentId) -> bool {
    index.postings(term).is_some_and(|postings| postings.contains_key(&id))
}
