use std::collections::HashSet;
use std::sync::Arc;

use crate::core::types::DocumentId;
use crate::index::inverted::InvertedIndex;
use crate::index::pool::StringPool;

/// Removes every document whose term set exactly matches an earlier
/// document's, keeping the lowest id of each duplicate group (§4.12).
/// Ascending iteration over document ids means the first document with a
/// given term set is always the one kept — no extra tie-break needed.
/// Logs `Found duplicate document id <id>` for every document removed,
/// mirroring the original `RemoveDuplicates`' `std::cout` line.
pub fn remove_duplicates(index: &mut InvertedIndex, pool: &mut StringPool) -> Vec<DocumentId> {
    let duplicates = find_duplicate_ids(index);
    for &id in &duplicates {
        println!("Found duplicate document id {}", id.value());
        index.remove_document(pool, id);
    }
    duplicates
}

/// Same contract as `remove_duplicates`, but each duplicate's postings are
/// removed via `InvertedIndex::par_remove_document`.
pub fn par_remove_duplicates(index: &mut InvertedIndex, pool: &mut StringPool) -> Vec<DocumentId> {
    let duplicates = find_duplicate_ids(index);
    for &id in &duplicates {
        println!("Found duplicate document id {}", id.value());
        index.par_remove_document(pool, id);
    }
    duplicates
}

fn find_duplicate_ids(index: &InvertedIndex) -> Vec<DocumentId> {
    let mut seen: HashSet<Vec<Arc<str>>> = HashSet::new();
    let mut duplicates = Vec::new();

    for id in index.document_ids() {
        let terms = index.term_set(id).unwrap_or_default();
        if !seen.insert(terms) {
            duplicates.push(id);
        }
    }

    duplicates
}
