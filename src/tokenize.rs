//! Tokenization and word validation.
//!
//! Text is split on runs of ASCII space (U+0020) into zero-copy slices of the
//! input. Every downstream consumer — the indexer, the query parser, the
//! stop-word constructor — goes through [`split_into_words`] and
//! [`is_valid_word`], so this is the single place where the token contract
//! lives.

use crate::error::{Result, SearchError};
use std::collections::BTreeSet;

/// Split `text` on runs of ASCII space into non-empty tokens.
///
/// Leading and trailing spaces are elided. Each token borrows from the input;
/// no allocation happens here.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// A word is valid iff no byte of it lies in U+0000..U+001F.
///
/// Checking bytes rather than chars is sufficient: UTF-8 continuation bytes
/// are always >= 0x80, so a multi-byte scalar can never trip the check.
#[inline]
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < 0x20)
}

/// Build a deduplicated stop-word set from arbitrary string-likes.
///
/// Empty entries are dropped; a control character in any entry fails the
/// whole construction.
pub(crate) fn unique_valid_words<I, S>(words: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = BTreeSet::new();
    for word in words {
        let word = word.as_ref();
        if !is_valid_word(word) {
            return Err(SearchError::InvalidWord {
                word: word.to_string(),
            });
        }
        if !word.is_empty() {
            set.insert(word.to_string());
        }
    }
    Ok(set)
}
