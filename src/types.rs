// Copyright 2025-present Quaero contributors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search engine.
//!
//! These types define how documents, statuses, and execution policies fit
//! together. Everything here is plain data: the interesting behavior lives in
//! [`crate::engine`] and [`crate::search`].
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Document ids are non-negative.** `SearchEngine::add_document` rejects
//!   negative ids, so every id seen in a [`Document`] came through that gate.
//! - **`RELEVANCE_EPSILON` is the ranking tolerance.** Two relevances closer
//!   than this are equal for ordering purposes and fall through to the rating
//!   tie-break. Changing it changes which results surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document identifier.
///
/// Signed by design: the engine validates `id >= 0` on insertion, and a signed
/// type lets callers pass ids straight from external systems that use `-1` as
/// a sentinel without a lossy cast at the boundary.
pub type DocId = i32;

/// Maximum number of documents returned by a single ranked query.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevance tolerance for ranking.
///
/// Documents whose relevances differ by less than this are considered tied
/// and are ordered by rating instead.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Lifecycle status of a stored document.
///
/// The default retrieval entry points only surface [`DocumentStatus::Actual`]
/// documents; the other statuses are reachable through the status and
/// predicate overloads of `find_top_documents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Live and searchable by default.
    Actual,
    /// Indexed but no longer relevant.
    Irrelevant,
    /// Excluded by moderation.
    Banned,
    /// Marked for removal.
    Removed,
}

/// A ranked retrieval result.
///
/// Produced by the `find_top_documents` family; never stored. `relevance` is
/// the accumulated TF-IDF score, `rating` the document's average rating used
/// as the tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier of the matched document.
    pub id: DocId,
    /// Accumulated TF-IDF relevance.
    pub relevance: f64,
    /// Truncated average rating.
    pub rating: i32,
}

impl Document {
    /// Creates a result record.
    #[inline]
    pub const fn new(id: DocId, relevance: f64, rating: i32) -> Self {
        Self {
            id,
            relevance,
            rating,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Execution policy selector for the hot paths.
///
/// Sequential and parallel variants are behavior-equivalent: for a given
/// query and index state they produce the same results up to
/// [`RELEVANCE_EPSILON`] on relevance. The parallel variant fans work out
/// over terms and documents on the rayon pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionPolicy {
    /// Single-threaded execution.
    #[default]
    Sequential,
    /// Data-parallel execution on the rayon thread pool.
    Parallel,
}
