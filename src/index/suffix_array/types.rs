//! Types for suffix index construction and search
//!
//! This module defines the configuration, statistics, pattern and error
//! types shared by the builder, the search routines and the LCS query.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Start offset of a suffix in the indexed text
pub type TextPosition = usize;

/// Suffix entry - start offset of the suffix it denotes
pub type SuffixEntry = usize;

/// Result type for iterator operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors raised by misuse of a match iterator
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Advance or dereference of an exhausted iterator
    #[error("match iterator advanced or dereferenced past its end")]
    OutOfRange,
}

/// Configuration for suffix index building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Order and match suffixes ignoring ASCII case (default: false)
    pub case_insensitive: bool,
    /// Texts longer than this many bytes are sorted in parallel
    pub parallel_sort_threshold: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            parallel_sort_threshold: 100_000,
        }
    }
}

/// Statistics about a suffix index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub text_size: usize,
    pub suffix_count: usize,
    pub case_insensitive: bool,
}

/// A search pattern, normalized to the bytes it matches
///
/// Built from a single character, a byte, or any string-like or byte-slice
/// value; every form searches with identical semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern<'p>(Cow<'p, [u8]>);

impl<'p> SearchPattern<'p> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// ASCII-lowercase the pattern, borrowing when it is already folded
    pub(crate) fn folded(self) -> Self {
        if self.0.iter().any(u8::is_ascii_uppercase) {
            SearchPattern(Cow::Owned(self.0.to_ascii_lowercase()))
        } else {
            self
        }
    }
}

impl From<char> for SearchPattern<'_> {
    fn from(c: char) -> Self {
        let mut buf = [0u8; 4];
        SearchPattern(Cow::Owned(c.encode_utf8(&mut buf).as_bytes().to_vec()))
    }
}

impl From<u8> for SearchPattern<'_> {
    fn from(b: u8) -> Self {
        SearchPattern(Cow::Owned(vec![b]))
    }
}

impl<'p> From<&'p str> for SearchPattern<'p> {
    fn from(s: &'p str) -> Self {
        SearchPattern(Cow::Borrowed(s.as_bytes()))
    }
}

impl<'p> From<&'p String> for SearchPattern<'p> {
    fn from(s: &'p String) -> Self {
        SearchPattern(Cow::Borrowed(s.as_bytes()))
    }
}

impl<'p> From<&'p [u8]> for SearchPattern<'p> {
    fn from(b: &'p [u8]) -> Self {
        SearchPattern(Cow::Borrowed(b))
    }
}

impl<'p, const N: usize> From<&'p [u8; N]> for SearchPattern<'p> {
    fn from(b: &'p [u8; N]) -> Self {
        SearchPattern(Cow::Borrowed(b.as_slice()))
    }
}

impl<'p> From<&'p Vec<u8>> for SearchPattern<'p> {
    fn from(b: &'p Vec<u8>) -> Self {
        SearchPattern(Cow::Borrowed(b.as_slice()))
    }
}

impl From<String> for SearchPattern<'_> {
    fn from(s: String) -> Self {
        SearchPattern(Cow::Owned(s.into_bytes()))
    }
}
