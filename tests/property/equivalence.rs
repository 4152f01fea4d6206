//! Sequential/parallel equivalence over random corpora and queries.

use proptest::prelude::*;
use quaero::{DocId, DocumentStatus, ExecutionPolicy, SearchEngine, RELEVANCE_EPSILON};

const VOCAB: &[&str] = &[
    "cat", "dog", "city", "town", "bird", "fish", "tail", "collar",
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 1..6).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<(String, Vec<i32>)>> {
    prop::collection::vec(
        (text_strategy(), prop::collection::vec(-10..10i32, 0..4)),
        1..10,
    )
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((any::<bool>(), prop::sample::select(VOCAB)), 1..5).prop_map(|terms| {
        terms
            .into_iter()
            .map(|(is_minus, word)| {
                if is_minus {
                    format!("-{word}")
                } else {
                    word.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn build_engine(corpus: &[(String, Vec<i32>)]) -> SearchEngine {
    let mut engine = SearchEngine::new(Vec::<&str>::new()).unwrap();
    for (id, (text, ratings)) in corpus.iter().enumerate() {
        engine
            .add_document(id as DocId, text, DocumentStatus::Actual, ratings)
            .unwrap();
    }
    engine
}

proptest! {
    #[test]
    fn prop_find_top_documents_policies_agree(
        corpus in corpus_strategy(),
        query in query_strategy(),
    ) {
        let engine = build_engine(&corpus);

        let seq = engine.find_top_documents(&query).unwrap();
        let par = engine
            .find_top_documents_with_policy(ExecutionPolicy::Parallel, &query)
            .unwrap();

        prop_assert_eq!(
            seq.iter().map(|d| d.id).collect::<Vec<_>>(),
            par.iter().map(|d| d.id).collect::<Vec<_>>()
        );
        for (s, p) in seq.iter().zip(&par) {
            prop_assert!((s.relevance - p.relevance).abs() < RELEVANCE_EPSILON);
            prop_assert_eq!(s.rating, p.rating);
        }
    }

    #[test]
    fn prop_match_document_policies_agree(
        corpus in corpus_strategy(),
        query in query_strategy(),
        probe in 0..12i32,
    ) {
        let engine = build_engine(&corpus);

        let seq = engine.match_document(&query, probe);
        let par = engine.match_document_with_policy(ExecutionPolicy::Parallel, &query, probe);

        match (seq, par) {
            (Ok(s), Ok(p)) => prop_assert_eq!(s, p),
            (Err(s), Err(p)) => prop_assert_eq!(s.kind(), p.kind()),
            (s, p) => prop_assert!(false, "policies split: {:?} vs {:?}", s, p),
        }
    }

    #[test]
    fn prop_minus_hit_always_empties_match(
        corpus in corpus_strategy(),
        word in prop::sample::select(VOCAB),
    ) {
        let engine = build_engine(&corpus);
        let query = format!("{word} -{word}");

        for id in engine.document_ids() {
            let (matched, _) = engine.match_document(&query, id).unwrap();
            prop_assert!(
                matched.is_empty() || !engine.word_frequencies(id).contains_key(word),
                "minus-term hit must empty the match for document {}",
                id
            );
        }
    }

    #[test]
    fn prop_batch_matches_individual_queries(
        corpus in corpus_strategy(),
        queries in prop::collection::vec(query_strategy(), 0..6),
    ) {
        let engine = build_engine(&corpus);

        let batched = quaero::process_queries(&engine, &queries).unwrap();
        prop_assert_eq!(batched.len(), queries.len());
        for (query, batch_result) in queries.iter().zip(&batched) {
            let single = engine.find_top_documents(query).unwrap();
            prop_assert_eq!(&single, batch_result);
        }

        let joined = quaero::process_queries_joined(&engine, &queries).unwrap();
        let flattened: Vec<_> = batched.into_iter().flatten().collect();
        prop_assert_eq!(joined, flattened);
    }
}
