// Copyright 2025-present Quaero contributors
// SPDX-License-Identifier: Apache-2.0

//! Match explanation: which query terms hit a given document, and why not.
//!
//! A minus-term hit disqualifies the document and empties the answer; the
//! document's status is reported either way. The parallel variant runs the
//! minus test as a data-parallel `any` over the query's minus-terms and
//! collects the plus hits in parallel before sorting.

use crate::error::{Result, SearchError};
use crate::query::{Query, QueryVec};
use crate::types::{DocId, DocumentStatus, ExecutionPolicy};
use crate::SearchEngine;
use rayon::prelude::*;

impl SearchEngine {
    /// Plus-terms of `raw_query` that occur in document `document_id`,
    /// ascending and unique, together with the document's status.
    ///
    /// Returns an empty term list if any minus-term occurs in the document.
    ///
    /// # Errors
    ///
    /// Invalid-argument if the query fails to parse; out-of-range if
    /// `document_id` is not in the index.
    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        self.match_document_with_policy(ExecutionPolicy::Sequential, raw_query, document_id)
    }

    /// [`SearchEngine::match_document`] under an explicit execution policy.
    pub fn match_document_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        document_id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        match policy {
            ExecutionPolicy::Sequential => self.match_document_seq(raw_query, document_id),
            ExecutionPolicy::Parallel => self.match_document_par(raw_query, document_id),
        }
    }

    fn match_document_seq(
        &self,
        raw_query: &str,
        document_id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let status = self.document_status(document_id)?;

        for word in &query.minus_words {
            if self.posting_contains(word, document_id) {
                return Ok((Vec::new(), status));
            }
        }

        let matched: Vec<String> = query
            .plus_words
            .iter()
            .filter(|word| self.posting_contains(word, document_id))
            .cloned()
            .collect();
        Ok((matched, status))
    }

    fn match_document_par(
        &self,
        raw_query: &str,
        document_id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = QueryVec::parse(raw_query, &self.stop_words)?;
        let status = self.document_status(document_id)?;
        let word_freqs = self.word_frequencies(document_id);

        let disqualified = query
            .minus_words
            .par_iter()
            .any(|word| word_freqs.contains_key(word));
        if disqualified {
            return Ok((Vec::new(), status));
        }

        let mut matched: Vec<String> = query
            .plus_words
            .par_iter()
            .filter(|word| word_freqs.contains_key(*word))
            .cloned()
            .collect();
        matched.par_sort();
        matched.dedup();
        Ok((matched, status))
    }

    fn document_status(&self, document_id: DocId) -> Result<DocumentStatus> {
        self.documents
            .get(&document_id)
            .map(|data| data.status)
            .ok_or(SearchError::DocumentNotFound { id: document_id })
    }

    fn posting_contains(&self, word: &str, document_id: DocId) -> bool {
        self.word_to_document_freqs
            .get(word)
            .is_some_and(|postings| postings.contains_key(&document_id))
    }
}
