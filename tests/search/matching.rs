//! Match explanation behavior.

use super::common::{add_doc, add_doc_with_status, make_engine};
use quaero::{DocumentStatus, ErrorKind, ExecutionPolicy};

#[test]
fn test_match_returns_hitting_plus_terms_sorted() {
    let mut engine = make_engine("");
    add_doc(&mut engine, 1, "fluffy cat with collar");

    let (words, status) = engine.match_document("collar cat dog", 1).unwrap();
    assert_eq!(words, vec!["cat".to_string(), "collar".to_string()]);
    assert_eq!(status, DocumentStatus::Actual);
}

#[test]
fn test_match_minus_hit_empties_the_answer() {
    let mut engine = make_engine("");
    add_doc(&mut engine, 1, "fluffy cat with collar");

    let (words, status) = engine.match_document("cat -collar", 1).unwrap();
    assert!(words.is_empty());
    assert_eq!(status, DocumentStatus::Actual);
}

#[test]
fn test_match_reports_status_of_any_document() {
    let mut engine = make_engine("");
    add_doc_with_status(&mut engine, 7, "banned cat", DocumentStatus::Banned, &[]);

    let (words, status) = engine.match_document("cat", 7).unwrap();
    assert_eq!(words, vec!["cat".to_string()]);
    assert_eq!(status, DocumentStatus::Banned);
}

#[test]
fn test_match_unknown_id_is_out_of_range() {
    let mut engine = make_engine("");
    add_doc(&mut engine, 1, "cat");

    let err = engine.match_document("cat", 99).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_match_invalid_query_beats_unknown_id() {
    let engine = make_engine("");
    let err = engine.match_document("--cat", 99).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_match_stop_words_never_match() {
    let mut engine = make_engine("in the");
    add_doc(&mut engine, 1, "cat in the city");

    let (words, _) = engine.match_document("in the cat", 1).unwrap();
    assert_eq!(words, vec!["cat".to_string()]);
}

#[test]
fn test_match_parallel_agrees_with_sequential() {
    let mut engine = make_engine("");
    add_doc(&mut engine, 1, "fluffy cat with collar");
    add_doc(&mut engine, 2, "plain dog");

    for (query, id) in [
        ("collar cat dog", 1),
        ("cat -collar", 1),
        ("dog cat", 2),
        ("-unicorn dog", 2),
    ] {
        let seq = engine.match_document(query, id).unwrap();
        let par = engine
            .match_document_with_policy(ExecutionPolicy::Parallel, query, id)
            .unwrap();
        assert_eq!(seq, par, "policies disagree on {query:?} / {id}");
    }
}
