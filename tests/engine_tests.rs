use retrivis::core::config::EngineConfig;
use retrivis::core::engine::Engine;
use retrivis::core::error::ErrorKind;
use retrivis::core::types::{DocumentId, Status};
use retrivis::search::history::RequestHistory;
use retrivis::search::pagination::paginate;

fn doc(id: u64) -> DocumentId {
    DocumentId::new(id)
}

/// The "белый кот" corpus from the original `search-server` test suite,
/// re-expressed against this engine's public surface.
fn fluffy_cat_engine() -> Engine {
    let mut engine = Engine::with_default_config("и в на").unwrap();
    engine
        .add_document(doc(0), "белый кот и модный ошейник", Status::Actual, &[8, -2])
        .unwrap();
    engine
        .add_document(doc(1), "пушистый кот пушистый хвост", Status::Actual, &[7, 2, 6])
        .unwrap();
    engine
        .add_document(doc(2), "ухоженный пёс выразительные глаза", Status::Actual, &[5])
        .unwrap();
    engine
        .add_document(doc(3), "ухоженный скворец евгений", Status::Banned, &[9])
        .unwrap();
    engine
}

#[test]
fn plus_words_rank_documents_containing_them_above_others() {
    let engine = fluffy_cat_engine();
    let results = engine.find_top_documents("пушистый ухоженный кот").unwrap();
    let ids: Vec<u64> = results.iter().map(|r| r.id.value()).collect();
    assert!(ids.contains(&0));
    assert!(ids.contains(&1));
    assert!(ids.contains(&2));
    assert!(!ids.contains(&3));
}

#[test]
fn a_minus_word_removes_a_document_entirely() {
    let engine = fluffy_cat_engine();
    let results = engine.find_top_documents("пушистый -пёс").unwrap();
    let ids: Vec<u64> = results.iter().map(|r| r.id.value()).collect();
    assert!(!ids.contains(&2));
}

#[test]
fn only_documents_matching_the_requested_status_are_returned() {
    let engine = fluffy_cat_engine();
    let banned = engine.find_top_documents_with_status("скворец евгений", Status::Banned).unwrap();
    assert_eq!(banned.len(), 1);
    assert_eq!(banned[0].id, doc(3));

    let actual = engine.find_top_documents("скворец евгений").unwrap();
    assert!(actual.is_empty());
}

#[test]
fn a_query_of_only_stop_words_matches_nothing() {
    let engine = fluffy_cat_engine();
    assert!(engine.find_top_documents("и в на").unwrap().is_empty());
}

#[test]
fn a_query_of_only_minus_words_matches_nothing() {
    let mut engine = Engine::with_default_config("").unwrap();
    engine.add_document(doc(0), "кот", Status::Actual, &[]).unwrap();
    assert!(engine.find_top_documents("-кот").unwrap().is_empty());
}

#[test]
fn sequential_and_parallel_ranking_agree() {
    let engine = fluffy_cat_engine();
    let sequential = engine.find_top_documents("пушистый ухоженный кот").unwrap();
    let parallel = engine.par_find_top_documents("пушистый ухоженный кот").unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn match_document_lists_only_contained_plus_words_and_empties_on_a_minus_word() {
    let engine = fluffy_cat_engine();
    let matched = engine.match_document("кот пушистый", doc(1)).unwrap();
    assert_eq!(matched, vec!["кот".to_string(), "пушистый".to_string()]);

    let emptied = engine.match_document("кот -ошейник", doc(0)).unwrap();
    assert!(emptied.is_empty());
}

#[test]
fn removing_a_document_drops_it_from_every_later_query() {
    let mut engine = fluffy_cat_engine();
    engine.remove_document(doc(0)).unwrap();
    assert_eq!(engine.document_count(), 3);
    let results = engine.find_top_documents("белый кот").unwrap();
    assert!(results.iter().all(|r| r.id != doc(0)));
}

#[test]
fn malformed_queries_are_rejected_as_invalid_input() {
    let engine = fluffy_cat_engine();
    let err = engine.find_top_documents("кот --злой").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);

    let err = engine.find_top_documents("кот -").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[test]
fn a_document_of_only_stop_words_cannot_be_indexed() {
    let mut engine = Engine::with_default_config("и в на").unwrap();
    let err = engine.add_document(doc(0), "и в на", Status::Actual, &[]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[test]
fn removing_duplicate_documents_keeps_the_lowest_id() {
    let mut engine = Engine::with_default_config("").unwrap();
    engine.add_document(doc(1), "рыжий кот", Status::Actual, &[]).unwrap();
    engine.add_document(doc(2), "рыжий кот", Status::Actual, &[]).unwrap();
    engine.add_document(doc(3), "зелёный слон", Status::Actual, &[]).unwrap();

    let removed = engine.remove_duplicates();
    assert_eq!(removed, vec![doc(2)]);
    assert_eq!(engine.document_count(), 2);
}

#[test]
fn request_history_counts_empty_results_up_to_the_daily_cap() {
    let engine_with_one_doc = {
        let mut engine = Engine::with_default_config("").unwrap();
        engine.add_document(doc(0), "кот", Status::Actual, &[]).unwrap();
        engine
    };

    let mut history = RequestHistory::new(&engine_with_one_doc);
    for _ in 0..1440 {
        history.add_find_request("пёс").unwrap();
    }
    assert_eq!(history.no_result_requests(), 1440);

    history.add_find_request("кот").unwrap();
    assert_eq!(history.no_result_requests(), 1439);
    assert_eq!(history.len(), 1440);
}

#[test]
fn pagination_splits_results_into_bounded_pages() {
    let mut engine = Engine::with_default_config("").unwrap();
    for id in 0..5u64 {
        engine.add_document(doc(id), "общее слово", Status::Actual, &[id as i64]).unwrap();
    }
    let results = engine.find_top_documents("общее").unwrap();
    let pages: Vec<&[_]> = paginate(&results, 2).collect();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2].len(), 1);
}

#[test]
fn bulk_query_running_preserves_order_and_joins_results() {
    let engine = fluffy_cat_engine();
    let queries = vec!["белый кот".to_string(), "ухоженный пёс".to_string()];
    let joined = retrivis::search::bulk::process_queries_joined(&queries, |q| engine.find_top_documents(q)).unwrap();
    assert!(!joined.is_empty());
}

#[test]
fn engine_config_controls_shard_count_for_parallel_ranking() {
    let config = EngineConfig { shard_count: 3, worker_threads: Some(2) };
    let mut engine = Engine::new("", config).unwrap();
    engine.add_document(doc(0), "кот пёс", Status::Actual, &[]).unwrap();
    assert_eq!(engine.config().shard_count, 3);
    assert!(engine.par_find_top_documents("кот").unwrap().len() == 1);
}

#[test]
fn par_remove_document_matches_sequential_remove_document() {
    let mut a = fluffy_cat_engine();
    let mut b = fluffy_cat_engine();
    a.remove_document(doc(1)).unwrap();
    b.par_remove_document(doc(1)).unwrap();
    assert_eq!(a.document_count(), b.document_count());
    assert_eq!(a.find_top_documents("кот").unwrap(), b.find_top_documents("кот").unwrap());
}

#[test]
fn par_remove_duplicates_matches_sequential_remove_duplicates() {
    let build = || {
        let mut engine = Engine::with_default_config("").unwrap();
        engine.add_document(doc(1), "рыжий кот", Status::Actual, &[]).unwrap();
        engine.add_document(doc(2), "рыжий кот", Status::Actual, &[]).unwrap();
        engine
    };
    let mut sequential = build();
    let mut parallel = build();
    let removed_sequential = sequential.remove_duplicates();
    let removed_parallel = parallel.par_remove_duplicates();
    assert_eq!(removed_sequential, removed_parallel);
}
