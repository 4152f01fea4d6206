//! In-memory full-text search with TF-IDF ranking.
//!
//! This crate indexes short textual documents and answers ranked keyword
//! queries: an inverted index with per-document term frequencies, an IDF
//! scorer, a boolean query language with required and forbidden terms,
//! stop-word filtering, and an explicit sequential/parallel execution policy
//! for the hot paths.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenize.rs  │────▶│  engine.rs   │────▶│  search.rs   │
//! │ (split,      │     │ (SearchEngine│     │ (find_top_   │
//! │  validation) │     │  dual index) │     │  documents)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                     │
//!        ▼                    ▼                     ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  query.rs    │     │ matching.rs  │     │accumulator.rs│
//! │ (plus/minus  │     │ (match       │     │ (sharded par │
//! │  parsing)    │     │  explainer)  │     │  accumulator)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Around the core sit [`dedup`] (term-set duplicate removal), [`process`]
//! (batched multi-query), [`paginate`] (non-owning result pages), and
//! [`request_queue`] (rolling request statistics).
//!
//! # Usage
//!
//! ```
//! use quaero::{DocumentStatus, SearchEngine};
//!
//! let mut engine = SearchEngine::from_stop_words_text("in the").unwrap();
//! engine
//!     .add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
//!     .unwrap();
//!
//! let results = engine.find_top_documents("cat -dog").unwrap();
//! assert_eq!(results[0].id, 42);
//! ```
//!
//! # Concurrency contract
//!
//! The engine's maps are not internally synchronized; `&self`/`&mut self`
//! split readers from writers, which is exactly the external contract the
//! design requires. Within a single read, the parallel-policy entry points
//! fan work out over the rayon pool; the only internally synchronized piece
//! is the per-query [`ShardedAccumulator`].

// Module declarations
mod accumulator;
mod dedup;
mod engine;
mod error;
mod matching;
mod paginate;
mod process;
mod query;
mod request_queue;
mod search;
mod tokenize;
mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use accumulator::{ShardedAccumulator, DEFAULT_SHARD_COUNT};
pub use dedup::{find_duplicates, remove_duplicates};
pub use engine::SearchEngine;
pub use error::{ErrorKind, Result, SearchError};
pub use paginate::{paginate, Page, Paginator};
pub use process::{process_queries, process_queries_joined};
pub use request_queue::{RequestQueue, REQUEST_WINDOW};
pub use search::compare_documents;
pub use tokenize::{is_valid_word, split_into_words};
pub use types::{
    DocId, Document, DocumentStatus, ExecutionPolicy, MAX_RESULT_DOCUMENT_COUNT,
    RELEVANCE_EPSILON,
};
