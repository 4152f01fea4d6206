// Copyright 2025-present Quaero contributors
// SPDX-License-Identifier: Apache-2.0

//! Duplicate elimination by term-set equality.
//!
//! Two documents are duplicates iff the key sets of their word-frequency
//! maps are equal — ratings, statuses, tf values, and token order play no
//! part. Within each group of duplicates the smallest id survives.
//!
//! [`find_duplicates`] is the pure planning step; [`remove_duplicates`]
//! applies the plan and emits one notice per removed id on stdout, which is
//! the informational observation sink of the host.

use crate::types::DocId;
use crate::SearchEngine;
use std::collections::BTreeSet;
use tracing::info;

/// Ids that would be removed by [`remove_duplicates`], ascending.
///
/// Live ids are scanned in ascending order and grouped by term-set; the
/// first (smallest) id of each group is the keeper, every later one is a
/// duplicate.
pub fn find_duplicates(server: &SearchEngine) -> Vec<DocId> {
    let mut seen: BTreeSet<Vec<&str>> = BTreeSet::new();
    let mut duplicates = Vec::new();
    for document_id in server.document_ids() {
        // Keys of an ordered map: equal term-sets compare equal as vectors.
        let words: Vec<&str> = server
            .word_frequencies(document_id)
            .keys()
            .map(String::as_str)
            .collect();
        if !seen.insert(words) {
            duplicates.push(document_id);
        }
    }
    duplicates
}

/// Removes every duplicate document, keeping the smallest id of each
/// term-set group. Returns the removed ids in ascending order.
///
/// Emits `Found duplicate document id <id>` per removal.
pub fn remove_duplicates(server: &mut SearchEngine) -> Vec<DocId> {
    let duplicates = find_duplicates(server);
    for &document_id in &duplicates {
        println!("Found duplicate document id {document_id}");
        info!(document_id, "duplicate document removed");
        server.remove_document(document_id);
    }
    duplicates
}
