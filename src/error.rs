// Copyright 2025-present Quaero contributors
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the search engine.
//!
//! Two kinds of failure exist: a caller handed us something malformed
//! ([`ErrorKind::InvalidArgument`]), or a caller indexed a document that is
//! not in the engine ([`ErrorKind::OutOfRange`]). Validation always precedes
//! mutation, so a returned error means no engine state changed.

use crate::types::DocId;
use std::error::Error;
use std::fmt;

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Coarse classification of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A precondition on the input was violated.
    InvalidArgument,
    /// A document id outside the current index set was accessed.
    OutOfRange,
}

/// Everything that can go wrong at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `add_document` was called with a negative id.
    NegativeDocumentId {
        /// The offending id.
        id: DocId,
    },
    /// `add_document` was called with an id that is already stored.
    DuplicateDocumentId {
        /// The offending id.
        id: DocId,
    },
    /// A word (stop-word, document word, or query term) contains a control
    /// character in U+0000..U+001F.
    InvalidWord {
        /// The offending word.
        word: String,
    },
    /// A query contained an empty term.
    EmptyQueryWord,
    /// A query term consisted of a single `-`.
    IsolatedMinus,
    /// A query term started with more than one `-`.
    DoubleMinus {
        /// The term after the first `-` was stripped.
        word: String,
    },
    /// A document id was accessed that is not in the index.
    DocumentNotFound {
        /// The requested id.
        id: DocId,
    },
}

impl SearchError {
    /// Which of the two failure kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::DocumentNotFound { .. } => ErrorKind::OutOfRange,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NegativeDocumentId { id } => {
                write!(f, "document id {} is negative", id)
            }
            SearchError::DuplicateDocumentId { id } => {
                write!(f, "document id {} is already stored", id)
            }
            SearchError::InvalidWord { word } => {
                write!(f, "word {:?} contains a control character", word)
            }
            SearchError::EmptyQueryWord => {
                write!(f, "query contains an empty term")
            }
            SearchError::IsolatedMinus => {
                write!(f, "query term consists of a single '-'")
            }
            SearchError::DoubleMinus { word } => {
                write!(f, "minus term {:?} starts with more than one '-'", word)
            }
            SearchError::DocumentNotFound { id } => {
                write!(f, "document id {} is not in the index", id)
            }
        }
    }
}

impl Error for SearchError {}
