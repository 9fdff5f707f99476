/// Stable document identifier. Backed by `u64`, so negative ids are not
/// representable rather than checked and rejected. Never reused once removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(pub u64);

impl DocumentId {
    pub fn new(id: u64) -> Self {
        DocumentId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DocumentId {
    fn from(id: u64) -> Self {
        DocumentId(id)
    }
}

/// A filter label on an active document. Independent of the add/remove
/// lifecycle: `Removed` here means "tagged removed by the caller", not
/// "erased from the engine".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// Everything the engine keeps about a document besides its postings.
/// Immutable once inserted; destroyed wholesale by `remove_document`.
#[derive(Debug, Clone, Copy)]
pub struct DocumentRecord {
    pub rating: i64,
    pub status: Status,
}

/// One row of a ranked result list. Never stored — materialized fresh by
/// every `find_top_documents` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i64,
}
