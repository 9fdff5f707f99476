use crate::core::error::Result;
use crate::core::types::ScoredDocument;

/// Runs every query in `queries` through `search` concurrently, preserving
/// input order in the result. Grounded on the original `ProcessQueries`
/// (`std::transform(std::execution::par, ...)`), reworked with rayon's
/// `par_iter().map().collect()` (§4.13).
pub fn process_queries<F>(queries: &[String], search: F) -> Vec<Result<Vec<ScoredDocument>>>
where
    F: Fn(&str) -> Result<Vec<ScoredDocument>> + Sync,
{
    use rayon::prelude::*;

    queries.par_iter().map(|query| search(query)).collect()
}

/// Same as `process_queries`, flattened into one result list in query order.
/// Grounded on the original `ProcessQueriesJoined`.
pub fn process_queries_joined<F>(queries: &[String], search: F) -> Result<Vec<ScoredDocument>>
where
    F: Fn(&str) -> Result<Vec<ScoredDocument>> + Sync,
{
    let mut joined = Vec::new();
    for result in process_queries(queries, search) {
        joined.extend(result?);
    }
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentId;

    fn fake_search(query: &str) -> Result<Vec<ScoredDocument>> {
        let id: u64 = query.parse().unwrap();
        Ok(vec![ScoredDocument { id: DocumentId::new(id), relevance: 1.0, rating: 0 }])
    }

    #[test]
    fn process_queries_preserves_order() {
        let queries = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        let results = process_queries(&queries, fake_search);
        let ids: Vec<u64> = results.into_iter().map(|r| r.unwrap()[0].id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn process_queries_joined_flattens_in_order() {
        let queries = vec!["1".to_string(), "2".to_string()];
        let joined = process_queries_joined(&queries, fake_search).unwrap();
        let ids: Vec<u64> = joined.iter().map(|doc| doc.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
