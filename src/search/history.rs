use std::collections::VecDeque;

use crate::core::engine::Engine;
use crate::core::error::Result;
use crate::core::types::{DocumentId, DocumentRecord, ScoredDocument, Status};

/// Number of requests a `RequestHistory` remembers before evicting the
/// oldest — one request per minute over a day (§4.10).
const CAPACITY: usize = 1440;

/// Bounded history of how many results each recent search against a bound
/// `Engine` returned. Grounded on the original `RequestQueue`: it owns a
/// reference to the search server, runs the query itself through
/// `add_find_request`, and records only the result count in a deque capped
/// at `CAPACITY`, oldest entry popped before the newest is pushed.
pub struct RequestHistory<'a> {
    engine: &'a Engine,
    results: VecDeque<usize>,
}

impl<'a> RequestHistory<'a> {
    pub fn new(engine: &'a Engine) -> Self {
        RequestHistory { engine, results: VecDeque::new() }
    }

    /// Runs `raw_query` against the default (`Status::Actual`) filter and
    /// records the number of documents it returned.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        let results = self.engine.find_top_documents(raw_query)?;
        self.record(results.len());
        Ok(results)
    }

    /// Runs `raw_query` filtered to `status` and records the result count.
    pub fn add_find_request_with_status(&mut self, raw_query: &str, status: Status) -> Result<Vec<ScoredDocument>> {
        let results = self.engine.find_top_documents_with_status(raw_query, status)?;
        self.record(results.len());
        Ok(results)
    }

    /// Runs `raw_query` against a custom predicate and records the result count.
    pub fn add_find_request_with(
        &mut self,
        raw_query: &str,
        predicate: impl Fn(DocumentId, &DocumentRecord) -> bool,
    ) -> Result<Vec<ScoredDocument>> {
        let results = self.engine.find_top_documents_with(raw_query, predicate)?;
        self.record(results.len());
        Ok(results)
    }

    fn record(&mut self, result_count: usize) {
        if self.results.len() == CAPACITY {
            self.results.pop_front();
        }
        self.results.push_back(result_count);
    }

    /// How many of the remembered searches returned zero documents.
    pub fn no_result_requests(&self) -> usize {
        self.results.iter().filter(|&&count| count == 0).count()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
