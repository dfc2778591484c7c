use tokendex_core::{Engine, EngineError, MemoryDocumentStore, QueryResult, Reply, ValidationError};

fn engine_with_pets() -> Engine<MemoryDocumentStore> {
    let mut engine = Engine::new(MemoryDocumentStore::new());
    assert_eq!(engine.execute("index 1 cat dog"), Reply::Indexed(1));
    assert_eq!(engine.execute("index 2 dog bird"), Reply::Indexed(2));
    engine
}

fn ids(engine: &Engine<MemoryDocumentStore>, expression: &str) -> Vec<i32> {
    engine.query(expression).unwrap().into_iter().collect()
}

#[test]
fn pets_scenario() {
    let engine = engine_with_pets();
    assert_eq!(ids(&engine, "cat & dog"), vec![1]);
    assert_eq!(ids(&engine, "dog"), vec![1, 2]);
    assert_eq!(ids(&engine, "cat | bird"), vec![1, 2]);
    assert!(ids(&engine, "cat & bird").is_empty());
}

#[test]
fn never_indexed_token_is_no_match() {
    let mut engine = engine_with_pets();
    assert_eq!(engine.query("fish").unwrap(), QueryResult::new());
    assert_eq!(engine.execute("query fish").to_string(), "query results []");
}

#[test]
fn non_integer_id_is_rejected_without_side_effects() {
    let mut engine = engine_with_pets();
    let before = engine.inverted_index().token_count();
    let reply = engine.execute("index abc cat");
    assert!(matches!(reply, Reply::IndexFailed(_)));
    assert_eq!(engine.inverted_index().token_count(), before);
    assert_eq!(ids(&engine, "cat"), vec![1]);
    assert_eq!(engine.store().records().len(), 2);

    assert!(matches!(
        tokendex_core::Command::parse("index abc cat"),
        Err(EngineError::Validation(ValidationError::InvalidId(_)))
    ));
}

#[test]
fn malformed_expression_fails_whole_query() {
    let mut engine = engine_with_pets();
    assert!(matches!(engine.query("cat & (dog"), Err(EngineError::Parse(_))));
    assert!(matches!(engine.execute("query cat & (dog"), Reply::QueryFailed(_)));
}

#[test]
fn reindexing_an_id_accumulates_tokens() {
    let mut engine = engine_with_pets();
    engine.execute("index 1 fish");
    assert_eq!(ids(&engine, "fish & cat"), vec![1]);
    assert_eq!(ids(&engine, "dog"), vec![1, 2]);
}

#[test]
fn and_or_match_set_algebra() {
    let mut engine = Engine::new(MemoryDocumentStore::new());
    for line in ["index 1 a", "index 2 a b", "index 3 b c", "index 4 c", "index 5 a c"] {
        assert!(!engine.execute(line).is_error());
    }
    let index = engine.inverted_index();
    let a: QueryResult = index.postings("a").iter().copied().collect();
    let b: QueryResult = index.postings("b").iter().copied().collect();

    assert_eq!(engine.query("a & b").unwrap(), a.intersection(&b).copied().collect());
    assert_eq!(engine.query("a | b").unwrap(), a.union(&b).copied().collect());
    assert_eq!(ids(&engine, "(a | b) & c"), vec![3, 5]);
    assert_eq!(ids(&engine, "a & b | c & b"), vec![2, 3]);
}
