//! Stop-word exclusion from indexing and querying.

use super::common::{add_rated_doc, make_engine};

#[test]
fn test_stop_word_query_finds_nothing() {
    let mut engine = make_engine("in the");
    add_rated_doc(&mut engine, 42, "cat in the city", &[1, 2, 3]);

    let results = engine.find_top_documents("in").unwrap();
    assert!(results.is_empty(), "stop-word query must return nothing");
}

#[test]
fn test_non_stop_word_still_matches() {
    let mut engine = make_engine("in the");
    add_rated_doc(&mut engine, 42, "cat in the city", &[1, 2, 3]);

    let results = engine.find_top_documents("cat").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 42);
    assert_eq!(results[0].rating, 2);
}

#[test]
fn test_stop_words_do_not_dilute_term_frequency() {
    // "cat in the city" with stop-words {in, the}: tf(cat) = 1/2, not 1/4.
    let mut engine = make_engine("in the");
    add_rated_doc(&mut engine, 42, "cat in the city", &[]);

    let freqs = engine.word_frequencies(42);
    assert!((freqs["cat"] - 0.5).abs() < 1e-12);
    assert!((freqs["city"] - 0.5).abs() < 1e-12);
    assert!(!freqs.contains_key("in"));
}

#[test]
fn test_engine_from_container_and_text_agree() {
    let mut from_text = make_engine("in the");
    let mut from_container = quaero::SearchEngine::new(["in", "the"]).unwrap();

    for engine in [&mut from_text, &mut from_container] {
        engine
            .add_document(1, "cat in the city", quaero::DocumentStatus::Actual, &[])
            .unwrap();
    }

    assert_eq!(
        from_text.word_frequencies(1),
        from_container.word_frequencies(1)
    );
}
