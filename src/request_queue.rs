// Copyright 2025-present Quaero contributors
// SPDX-License-Identifier: Apache-2.0

//! Rolling request-statistics window.
//!
//! A bounded FIFO of the most recent [`REQUEST_WINDOW`] requests, each
//! recorded as "had results" or not, plus a running counter of the
//! empty-result entries. Update and query are both O(1); the counter is
//! adjusted on insert and on eviction instead of rescanning the window.
//!
//! Only requests that execute successfully are recorded: a query that fails
//! to parse propagates its error and leaves the window untouched.

use crate::error::Result;
use crate::types::{DocId, Document, DocumentStatus};
use crate::SearchEngine;
use std::collections::VecDeque;

/// Window capacity: one entry per minute over a day. A fixed design
/// constant, not a tunable.
pub const REQUEST_WINDOW: usize = 1440;

#[derive(Debug, Clone, Copy)]
struct QueryResult {
    had_results: bool,
}

/// Tracks recent queries against a borrowed engine.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchEngine,
    requests: VecDeque<QueryResult>,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    /// Creates an empty window over `server`.
    pub fn new(server: &'a SearchEngine) -> Self {
        Self {
            server,
            requests: VecDeque::with_capacity(REQUEST_WINDOW),
            no_result_count: 0,
        }
    }

    /// Executes `raw_query` with the default status filter and records the
    /// outcome.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let results = self.server.find_top_documents(raw_query)?;
        self.record(!results.is_empty());
        Ok(results)
    }

    /// Executes `raw_query` with an explicit status and records the outcome.
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let results = self.server.find_top_documents_with_status(raw_query, status)?;
        self.record(!results.is_empty());
        Ok(results)
    }

    /// Executes `raw_query` with a predicate filter and records the outcome.
    pub fn add_find_request_by<F>(&mut self, raw_query: &str, filter: F) -> Result<Vec<Document>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let results = self.server.find_top_documents_by(raw_query, filter)?;
        self.record(!results.is_empty());
        Ok(results)
    }

    /// Number of recorded requests currently in the window.
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    /// Number of windowed requests that returned no results.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    fn record(&mut self, had_results: bool) {
        self.requests.push_back(QueryResult { had_results });
        if !had_results {
            self.no_result_count += 1;
        }
        while self.requests.len() > REQUEST_WINDOW {
            if let Some(oldest) = self.requests.pop_front() {
                if !oldest.had_results {
                    self.no_result_count -= 1;
                }
            }
        }
    }
}
