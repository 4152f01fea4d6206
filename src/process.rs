//! Batched multi-query execution.
//!
//! Queries fan out over the rayon pool, one task per query; each individual
//! query runs the sequential retrieval path, so parallelism comes from the
//! batch, not from within a query. Results are positional: `result[i]`
//! answers `queries[i]`.

use crate::error::Result;
use crate::types::Document;
use crate::SearchEngine;
use rayon::prelude::*;

/// Runs every query against the engine in parallel.
///
/// The first failing query's error is returned; the whole batch either
/// succeeds or yields nothing.
pub fn process_queries(
    server: &SearchEngine,
    queries: &[String],
) -> Result<Vec<Vec<Document>>> {
    queries
        .par_iter()
        .map(|raw_query| server.find_top_documents(raw_query))
        .collect()
}

/// Like [`process_queries`], flattened in query order.
pub fn process_queries_joined(server: &SearchEngine, queries: &[String]) -> Result<Vec<Document>> {
    Ok(process_queries(server, queries)?
        .into_iter()
        .flatten()
        .collect())
}
