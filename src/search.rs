// Copyright 2025-present Quaero contributors
// SPDX-License-Identifier: Apache-2.0

//! Ranked retrieval: TF-IDF scoring, filtering, and top-K selection.
//!
//! Plus-terms contribute `tf * idf` per document; minus-terms disqualify a
//! document outright. The filter predicate sees `(id, status, rating)` and
//! gates a document's contribution before it ever reaches the accumulator,
//! keeping scoring independent of filtering policy.
//!
//! The sequential path accumulates into an ordered map; the parallel path
//! fans plus-terms out over the rayon pool into a [`ShardedAccumulator`] and
//! drains it afterwards. Both paths produce equal rankings up to
//! [`RELEVANCE_EPSILON`] on relevance: a document's score is the same
//! multiset of `tf * idf` additions either way, and both sorts are stable
//! over id-ascending input.

use crate::accumulator::ShardedAccumulator;
use crate::query::{Query, QueryVec};
use crate::types::{
    DocId, Document, DocumentStatus, ExecutionPolicy, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON,
};
use crate::SearchEngine;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::Result;

/// Ranking comparator: relevance descending; relevances closer than
/// [`RELEVANCE_EPSILON`] are tied and fall through to rating descending.
pub fn compare_documents(lhs: &Document, rhs: &Document) -> Ordering {
    if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
        rhs.rating.cmp(&lhs.rating)
    } else {
        rhs.relevance.total_cmp(&lhs.relevance)
    }
}

impl SearchEngine {
    /// Top documents for `raw_query` with status [`DocumentStatus::Actual`],
    /// sequentially.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_policy(ExecutionPolicy::Sequential, raw_query)
    }

    /// Top documents with an explicit status, sequentially.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with_status_and_policy(
            ExecutionPolicy::Sequential,
            raw_query,
            status,
        )
    }

    /// Top documents with an arbitrary `(id, status, rating)` predicate,
    /// sequentially.
    pub fn find_top_documents_by<F>(&self, raw_query: &str, filter: F) -> Result<Vec<Document>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        self.find_top_documents_by_with_policy(ExecutionPolicy::Sequential, raw_query, filter)
    }

    /// Top documents with status [`DocumentStatus::Actual`] under an explicit
    /// execution policy.
    pub fn find_top_documents_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with_status_and_policy(policy, raw_query, DocumentStatus::Actual)
    }

    /// Top documents with an explicit status under an explicit execution
    /// policy.
    pub fn find_top_documents_with_status_and_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_by_with_policy(
            policy,
            raw_query,
            move |_id, document_status, _rating| document_status == status,
        )
    }

    /// The general entry point: predicate filter plus execution policy.
    ///
    /// Returns at most [`MAX_RESULT_DOCUMENT_COUNT`] documents ordered by
    /// [`compare_documents`].
    pub fn find_top_documents_by_with_policy<F>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        filter: F,
    ) -> Result<Vec<Document>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let mut matched = match policy {
            ExecutionPolicy::Sequential => {
                let query = Query::parse(raw_query, &self.stop_words)?;
                self.find_all_documents(&query, &filter)
            }
            ExecutionPolicy::Parallel => {
                let query = QueryVec::parse(raw_query, &self.stop_words)?;
                self.find_all_documents_par(&query, &filter)
            }
        };

        match policy {
            ExecutionPolicy::Sequential => matched.sort_by(compare_documents),
            ExecutionPolicy::Parallel => matched.par_sort_by(compare_documents),
        }
        matched.truncate(MAX_RESULT_DOCUMENT_COUNT);
        Ok(matched)
    }

    /// Sequential scoring over an ordered accumulator map.
    fn find_all_documents<F>(&self, query: &Query, filter: &F) -> Vec<Document>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let mut document_to_relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            let Some(postings) = self.word_to_document_freqs.get(word) else {
                continue;
            };
            let inverse_document_freq = self.inverse_document_freq(postings.len());
            for (&document_id, &term_freq) in postings {
                let Some(data) = self.documents.get(&document_id) else {
                    continue;
                };
                if filter(document_id, data.status, data.rating) {
                    *document_to_relevance.entry(document_id).or_insert(0.0) +=
                        term_freq * inverse_document_freq;
                }
            }
        }

        for word in &query.minus_words {
            if let Some(postings) = self.word_to_document_freqs.get(word) {
                for &document_id in postings.keys() {
                    document_to_relevance.remove(&document_id);
                }
            }
        }

        self.collect_results(document_to_relevance)
    }

    /// Parallel scoring: one rayon task per plus-term, increments routed
    /// through the sharded accumulator; minus-terms erase in a second wave.
    fn find_all_documents_par<F>(&self, query: &QueryVec, filter: &F) -> Vec<Document>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let mut accumulator = ShardedAccumulator::new();

        query.plus_words.par_iter().for_each(|word| {
            let Some(postings) = self.word_to_document_freqs.get(word) else {
                return;
            };
            let inverse_document_freq = self.inverse_document_freq(postings.len());
            for (&document_id, &term_freq) in postings {
                let Some(data) = self.documents.get(&document_id) else {
                    continue;
                };
                if filter(document_id, data.status, data.rating) {
                    accumulator.add(document_id, term_freq * inverse_document_freq);
                }
            }
        });

        query.minus_words.par_iter().for_each(|word| {
            if let Some(postings) = self.word_to_document_freqs.get(word) {
                for &document_id in postings.keys() {
                    accumulator.erase(document_id);
                }
            }
        });

        self.collect_results(accumulator.drain_ordered())
    }

    fn collect_results(&self, document_to_relevance: BTreeMap<DocId, f64>) -> Vec<Document> {
        document_to_relevance
            .into_iter()
            .filter_map(|(document_id, relevance)| {
                let data = self.documents.get(&document_id)?;
                Some(Document::new(document_id, relevance, data.rating))
            })
            .collect()
    }

    /// `idf(t) = ln(total_documents / documents_containing(t))`.
    fn inverse_document_freq(&self, containing_documents: usize) -> f64 {
        (self.document_count() as f64 / containing_documents as f64).ln()
    }
}
