pub mod analysis;
pub mod concurrent;
pub mod core;
pub mod index;
pub mod query;
pub mod scoring;
pub mod search;

pub use core::config::EngineConfig;
pub use core::engine::Engine;
pub use core::error::{Error, ErrorKind, Result};
pub use core::types::{DocumentId, DocumentRecord, ScoredDocument, Status};

/*
┌────────────────────────────────────────────────────────────────────────────────────────────┐
│                             RETRIVIS STRUCT ARCHITECTURE                                      │
└────────────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────────── CORE LAYER ──────────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────────────────┐    │
│  │                               struct Engine                                          │    │
│  │  ┌──────────────────────────────────────────────────────────────────────────────┐ │    │
│  │  │ stop_words: StopWords             // Excluded from indexing and queries      │ │    │
│  │  │ index: InvertedIndex              // Term-major + doc-major postings        │ │    │
│  │  │ pool: StringPool                  // Interned term strings                  │ │    │
│  │  │ registry: BTreeMap<DocId, Record> // Rating + status per document           │ │    │
│  │  │ config: EngineConfig              // Shard count, worker threads            │ │    │
│  │  └──────────────────────────────────────────────────────────────────────────────┘ │    │
│  └────────────────────────────────────────────────────────────────────────────────────┘    │
│                                                                                              │
│  ┌──────────────────┐  ┌──────────────────┐  ┌───────────────────────────────────────┐    │
│  │ struct DocumentId│  │ enum Status      │  │ struct EngineConfig                   │    │
│  │ • 0: u64         │  │ • Actual         │  │ • shard_count: usize                  │    │
│  └──────────────────┘  │ • Irrelevant     │  │ • worker_threads: Option<usize>        │    │
│                        │ • Banned         │  └───────────────────────────────────────┘    │
│  ┌──────────────────┐  │ • Removed        │                                                │
│  │ struct Document  │  └──────────────────┘  ┌───────────────────────────────────────┐    │
│  │ Record           │                        │ enum ErrorKind                        │    │
│  │ • rating: i64    │  ┌──────────────────┐  │ • InvalidInput                        │    │
│  │ • status: Status │  │ struct Scored    │  │ • NotFound                            │    │
│  └──────────────────┘  │ Document         │  └───────────────────────────────────────┘    │
│                        │ • id: DocumentId │                                                │
│                        │ • relevance: f64 │                                                │
│                        │ • rating: i64    │                                                │
│                        └──────────────────┘                                                │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────── ANALYSIS LAYER ─────────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────┐  ┌──────────────────────┐                                      │
│  │ fn split_into_words    │  │ struct StopWords     │                                      │
│  │ fn is_valid_word        │  │ • words: BTreeSet<>  │                                      │
│  └────────────────────────┘  └──────────────────────┘                                      │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────────── INDEXING LAYER ────────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────────────────┐    │
│  │                           struct InvertedIndex                                      │    │
│  │  ┌──────────────────────────────────────────────────────────────────────────────┐ │    │
│  │  │ term_major: BTreeMap<Arc<str>, BTreeMap<DocumentId, f64>>                    │ │    │
│  │  │ doc_major:  BTreeMap<DocumentId, BTreeMap<Arc<str>, f64>>                    │ │    │
│  │  └──────────────────────────────────────────────────────────────────────────────┘ │    │
│  └────────────────────────────────────────────────────────────────────────────────────┘    │
│                                                                                              │
│  ┌──────────────────────┐                                                                  │
│  │ struct StringPool    │                                                                  │
│  │ • entries: HashMap<Arc<str>, usize>                                                      │
│  └──────────────────────┘                                                                  │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────────── QUERY LAYER ──────────────────────────────────────────┐
│                                                                                              │
│  ┌─────────────────────┐  ┌──────────────────────┐  ┌────────────────────────────┐        │
│  │ struct ParsedQuery  │  │ fn parse             │  │ fn match_document          │        │
│  │ • plus_words: Set   │  │ fn par_match_         │  │ fn par_match_documents     │        │
│  │ • minus_words: Set  │  │    documents          │  │                             │        │
│  └─────────────────────┘  └──────────────────────┘  └────────────────────────────┘        │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────────── SCORING LAYER ────────────────────────────────────────┐
│                                                                                              │
│  ┌─────────────────────┐  ┌─────────────────────┐                                          │
│  │ fn find_top_        │  │ fn par_find_top_    │                                          │
│  │    documents         │  │    documents         │                                          │
│  └─────────────────────┘  └─────────────────────┘                                          │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────── CONCURRENT LAYER ───────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────┐                                                                │
│  │ struct ShardedMap<K,V> │                                                                │
│  │ • shards: Vec<Mutex<>> │                                                                │
│  └────────────────────────┘                                                                │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────────── SEARCH LAYER ─────────────────────────────────────────┐
│                                                                                              │
│  ┌─────────────────────┐  ┌──────────────────────┐  ┌────────────────────────────┐        │
│  │ struct Request      │  │ fn paginate           │  │ fn remove_duplicates       │        │
│  │ History             │  │                       │  │ fn par_remove_duplicates   │        │
│  │ • results: VecDeque │  └──────────────────────┘  └────────────────────────────┘        │
│  └─────────────────────┘                                                                    │
│                                                      ┌────────────────────────────┐        │
│                                                      │ fn process_queries         │        │
│                                                      │ fn process_queries_joined  │        │
│                                                      └────────────────────────────┘        │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────────── RELATIONSHIPS ─────────────────────────────────────────┐
│                                                                                              │
│  Engine ──owns──> InvertedIndex ──shares terms via──> StringPool                            │
│     │                                                                                       │
│     ├──parses queries with──> query::parser ──produces──> ParsedQuery                      │
│     │                                                                                       │
│     ├──ranks with──> scoring::ranker ──(parallel path)──> ShardedMap                        │
│     │                                                                                       │
│     ├──matches with──> query::matcher                                                       │
│     │                                                                                       │
│     └──deduplicates with──> search::dedup                                                   │
│                                                                                              │
│  RequestHistory and paginate/process_queries compose around an `Engine`, the way the        │
│  original request-tracking and bulk-query helpers wrap a search server rather than           │
│  being owned by it.                                                                          │
└──────────────────────────────────────────────────────────────────────────────────────────────┘
*/
