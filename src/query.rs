// Copyright 2025-present Quaero contributors
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: raw strings into plus- and minus-terms.
//!
//! Two output shapes exist for the same input language:
//!
//! - [`Query`] — deduplicated ordered sets, used by sequential retrieval and
//!   by the match explainer.
//! - [`QueryVec`] — ordered vectors, used by the parallel paths where rayon
//!   wants indexable slices. Plus-terms are kept unique; minus-terms may
//!   repeat, since the minus side is purely a filter and erasing twice is
//!   harmless.
//!
//! A term that turns out to be a stop-word is dropped entirely, from either
//! side — but only after full validation, so `--in` fails even when `in` is
//! a stop-word.

use crate::error::{Result, SearchError};
use crate::tokenize::{is_valid_word, split_into_words};
use std::collections::BTreeSet;

/// A single parsed query token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QueryWord<'a> {
    /// The term with any leading `-` stripped.
    pub word: &'a str,
    /// Whether the token carried a leading `-`.
    pub is_minus: bool,
    /// Whether the stripped term is a stop-word.
    pub is_stop: bool,
}

/// Parse one token of a query.
pub(crate) fn parse_query_word<'a>(
    text: &'a str,
    stop_words: &BTreeSet<String>,
) -> Result<QueryWord<'a>> {
    if text.is_empty() {
        return Err(SearchError::EmptyQueryWord);
    }
    let (word, is_minus) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    if word.is_empty() {
        return Err(SearchError::IsolatedMinus);
    }
    if is_minus && word.starts_with('-') {
        return Err(SearchError::DoubleMinus {
            word: word.to_string(),
        });
    }
    if !is_valid_word(word) {
        return Err(SearchError::InvalidWord {
            word: word.to_string(),
        });
    }
    Ok(QueryWord {
        word,
        is_minus,
        is_stop: stop_words.contains(word),
    })
}

/// Set form of a parsed query: deduplicated, ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// Parse `text` into the set form.
    pub fn parse(text: &str, stop_words: &BTreeSet<String>) -> Result<Self> {
        let mut query = Query::default();
        for token in split_into_words(text) {
            let parsed = parse_query_word(token, stop_words)?;
            if parsed.is_stop {
                continue;
            }
            if parsed.is_minus {
                query.minus_words.insert(parsed.word.to_string());
            } else {
                query.plus_words.insert(parsed.word.to_string());
            }
        }
        Ok(query)
    }
}

/// Vector form of a parsed query, for the parallel paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueryVec {
    /// Unique plus-terms in first-seen order.
    pub plus_words: Vec<String>,
    /// Minus-terms in input order; duplicates preserved.
    pub minus_words: Vec<String>,
}

impl QueryVec {
    /// Parse `text` into the vector form.
    pub fn parse(text: &str, stop_words: &BTreeSet<String>) -> Result<Self> {
        let mut query = QueryVec::default();
        for token in split_into_words(text) {
            let parsed = parse_query_word(token, stop_words)?;
            if parsed.is_stop {
                continue;
            }
            if parsed.is_minus {
                query.minus_words.push(parsed.word.to_string());
            } else if !query.plus_words.iter().any(|w| w == parsed.word) {
                query.plus_words.push(parsed.word.to_string());
            }
        }
        Ok(query)
    }
}
