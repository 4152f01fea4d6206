// Copyright 2025-present Quaero contributors
// SPDX-License-Identifier: Apache-2.0

//! The document store and its dual inverted index.
//!
//! # Invariants (DO NOT VIOLATE)
//!
//! 1. **INDEX_MIRROR**: every `(word, id, tf)` in `word_to_document_freqs`
//!    has an identical `(id, word, tf)` entry in `document_to_word_freqs`,
//!    and vice versa.
//! 2. **NON_EMPTY**: every term in `word_to_document_freqs` has at least one
//!    posting; posting lists that empty out on removal are pruned.
//! 3. **ID_SET_COMPLETE**: `document_ids` holds exactly the keys of
//!    `documents`, which are exactly the keys of `document_to_word_freqs`.
//! 4. **VALIDATE_BEFORE_MUTATE**: `add_document` touches no engine state
//!    until every word of the document has passed validation. An error
//!    return means nothing changed.
//!
//! The core maps are not internally synchronized. Readers may run
//! concurrently with each other, never with a writer; the borrow checker
//! enforces exactly that split through `&self`/`&mut self`.

use crate::error::{Result, SearchError};
use crate::tokenize::{is_valid_word, split_into_words, unique_valid_words};
use crate::types::{DocId, DocumentStatus, ExecutionPolicy};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use tracing::debug;

/// Shared empty view returned for unknown ids.
static EMPTY_WORD_FREQS: LazyLock<BTreeMap<String, f64>> = LazyLock::new(BTreeMap::new);

/// Everything the engine owns about one live document.
#[derive(Debug, Clone)]
pub(crate) struct DocumentData {
    /// The original text. Term strings in the index are owned copies, but
    /// the source text stays available for callers.
    pub text: String,
    /// Truncated average rating.
    pub rating: i32,
    /// Lifecycle status.
    pub status: DocumentStatus,
}

/// In-memory TF-IDF search engine.
///
/// Owns the stop-word set (fixed at construction), the document store, and
/// the inverted index in both directions. Retrieval lives in
/// [`crate::search`], match explanation in [`crate::matching`].
#[derive(Debug, Default)]
pub struct SearchEngine {
    pub(crate) stop_words: BTreeSet<String>,
    /// term -> (document id -> term frequency)
    pub(crate) word_to_document_freqs: BTreeMap<String, BTreeMap<DocId, f64>>,
    /// document id -> (term -> term frequency)
    pub(crate) document_to_word_freqs: BTreeMap<DocId, BTreeMap<String, f64>>,
    pub(crate) documents: BTreeMap<DocId, DocumentData>,
    pub(crate) document_ids: BTreeSet<DocId>,
}

impl SearchEngine {
    /// Creates an engine from a container of stop-word strings.
    ///
    /// Empty entries are dropped. Fails with an invalid-argument error if any
    /// stop-word contains a control character.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            stop_words: unique_valid_words(stop_words)?,
            ..Self::default()
        })
    }

    /// Creates an engine from a single string whose space-separated tokens
    /// are the stop-words.
    pub fn from_stop_words_text(stop_words_text: &str) -> Result<Self> {
        Self::new(split_into_words(stop_words_text))
    }

    /// Indexes a new document.
    ///
    /// `ratings` is averaged with truncation toward zero; an empty list means
    /// rating 0. Stop-words are dropped before term frequencies are computed,
    /// so `tf = occurrences / non_stop_token_count`.
    ///
    /// # Errors
    ///
    /// Invalid-argument if `document_id` is negative, already stored, or any
    /// token of `document` contains a control character. No state changes on
    /// error.
    pub fn add_document(
        &mut self,
        document_id: DocId,
        document: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id < 0 {
            return Err(SearchError::NegativeDocumentId { id: document_id });
        }
        if self.documents.contains_key(&document_id) {
            return Err(SearchError::DuplicateDocumentId { id: document_id });
        }

        let words = self.split_into_words_no_stop(document)?;
        let rating = average_rating(ratings);

        let inv_word_count = 1.0 / words.len() as f64;
        let word_freqs = self.document_to_word_freqs.entry(document_id).or_default();
        for &word in &words {
            *word_freqs.entry(word.to_string()).or_insert(0.0) += inv_word_count;
        }
        for &word in &words {
            *self
                .word_to_document_freqs
                .entry(word.to_string())
                .or_default()
                .entry(document_id)
                .or_insert(0.0) += inv_word_count;
        }

        self.documents.insert(
            document_id,
            DocumentData {
                text: document.to_string(),
                rating,
                status,
            },
        );
        self.document_ids.insert(document_id);
        debug!(document_id, words = words.len(), rating, "document added");
        Ok(())
    }

    /// Removes a document and all its postings. Unknown ids are a no-op.
    pub fn remove_document(&mut self, document_id: DocId) {
        self.remove_document_with_policy(ExecutionPolicy::Sequential, document_id);
    }

    /// Removes a document under an explicit execution policy.
    ///
    /// Both policies are two-phase: the document's term list is collected
    /// first (the plan), then the postings are erased serially (the apply).
    /// The parallel policy fans the plan out over the rayon pool; the shared
    /// index is only ever written from this thread.
    pub fn remove_document_with_policy(&mut self, policy: ExecutionPolicy, document_id: DocId) {
        let Some(word_freqs) = self.document_to_word_freqs.remove(&document_id) else {
            return;
        };
        let words: Vec<String> = match policy {
            ExecutionPolicy::Sequential => word_freqs.into_keys().collect(),
            ExecutionPolicy::Parallel => word_freqs.into_par_iter().map(|(word, _)| word).collect(),
        };
        for word in &words {
            if let Some(postings) = self.word_to_document_freqs.get_mut(word) {
                postings.remove(&document_id);
                if postings.is_empty() {
                    self.word_to_document_freqs.remove(word);
                }
            }
        }
        self.documents.remove(&document_id);
        self.document_ids.remove(&document_id);
        debug!(document_id, words = words.len(), "document removed");
    }

    /// Per-term frequencies of one document.
    ///
    /// Returns an empty view if the id is unknown.
    pub fn word_frequencies(&self, document_id: DocId) -> &BTreeMap<String, f64> {
        self.document_to_word_freqs
            .get(&document_id)
            .unwrap_or(&EMPTY_WORD_FREQS)
    }

    /// Original text of a document, if it is stored.
    pub fn document_text(&self, document_id: DocId) -> Option<&str> {
        self.documents.get(&document_id).map(|data| data.text.as_str())
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.document_ids.len()
    }

    /// Ordered iteration over live document ids.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.document_ids.iter().copied()
    }

    pub(crate) fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Tokenize `text`, validate every token, and drop stop-words.
    ///
    /// Validation covers all tokens, stop-words included, and happens before
    /// any caller mutation.
    fn split_into_words_no_stop<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(SearchError::InvalidWord {
                    word: word.to_string(),
                });
            }
            if !self.is_stop_word(word) {
                words.push(word);
            }
        }
        Ok(words)
    }
}

impl<'a> IntoIterator for &'a SearchEngine {
    type Item = DocId;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, DocId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.document_ids.iter().copied()
    }
}

/// Integer average with truncation toward zero; empty input averages to 0.
fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i32 = ratings.iter().sum();
    sum / ratings.len() as i32
}
