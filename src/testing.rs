//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::types::{DocId, DocumentStatus};
use crate::SearchEngine;

/// Engine with stop-words taken from a single space-separated string.
pub fn make_engine(stop_words_text: &str) -> SearchEngine {
    SearchEngine::from_stop_words_text(stop_words_text).expect("stop words should be valid")
}

/// Add an ACTUAL document with no ratings.
pub fn add_doc(engine: &mut SearchEngine, id: DocId, text: &str) {
    engine
        .add_document(id, text, DocumentStatus::Actual, &[])
        .expect("document should be valid");
}

/// Add an ACTUAL document with ratings.
pub fn add_rated_doc(engine: &mut SearchEngine, id: DocId, text: &str, ratings: &[i32]) {
    engine
        .add_document(id, text, DocumentStatus::Actual, ratings)
        .expect("document should be valid");
}

/// Add a document with an explicit status and ratings.
pub fn add_doc_with_status(
    engine: &mut SearchEngine,
    id: DocId,
    text: &str,
    status: DocumentStatus,
    ratings: &[i32],
) {
    engine
        .add_document(id, text, status, ratings)
        .expect("document should be valid");
}
