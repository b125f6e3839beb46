//! Prefix search over a suffix index
//!
//! A search binary-searches the sorted suffixes for the first one not less
//! than the pattern, then scans forward over the suffixes that start with the
//! pattern. The matching run is handed out as a [`MatchIter`].

use super::builder::SuffixIndex;
use super::types::*;
use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;

impl SuffixIndex {
    /// Find every suffix that starts with `pattern`
    ///
    /// Matches are enumerated in ascending lexicographic order of the whole
    /// suffix. Returns [`end`](Self::end) when nothing matches or the text is
    /// empty. An empty pattern matches every suffix of a non-empty text.
    pub fn search<'p>(&self, pattern: impl Into<SearchPattern<'p>>) -> MatchIter<'_> {
        let (lo, hi) = self.match_range(pattern);
        if lo == hi {
            return self.end();
        }
        MatchIter {
            index: self,
            cursor: Cursor::Active {
                first: lo,
                last: hi - 1,
            },
        }
    }

    /// The exhausted iterator every traversal ends at
    pub fn end(&self) -> MatchIter<'_> {
        MatchIter {
            index: self,
            cursor: Cursor::Exhausted,
        }
    }

    /// Search for a pattern in the suffix array
    ///
    /// Returns the range [lo, hi) of ranks in the sorted suffixes whose
    /// suffixes start with the pattern. The range is empty when nothing
    /// matches.
    pub fn match_range<'p>(&self, pattern: impl Into<SearchPattern<'p>>) -> (usize, usize) {
        if self.text.is_empty() {
            return (0, 0);
        }

        let mut pattern: SearchPattern<'p> = pattern.into();
        if self.config.case_insensitive {
            pattern = pattern.folded();
        }
        let pattern = pattern.as_bytes();
        let keys = self.keys();

        let lo = self.lower_bound(pattern);
        let mut hi = lo;
        while hi < self.suffixes.len()
            && pattern.len() <= keys.len()
            && keys[self.suffixes[hi]..].starts_with(pattern)
        {
            hi += 1;
        }

        (lo, hi)
    }

    /// Find the first rank whose suffix is not less than `pattern`
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        let keys = self.keys();
        let mut lo = 0;
        let mut hi = self.suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if &keys[self.suffixes[mid]..] < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Get the number of suffixes starting with `pattern`
    pub fn count_matches<'p>(&self, pattern: impl Into<SearchPattern<'p>>) -> usize {
        let (lo, hi) = self.match_range(pattern);
        hi - lo
    }

    /// Check if `pattern` occurs anywhere in the text
    pub fn contains<'p>(&self, pattern: impl Into<SearchPattern<'p>>) -> bool {
        let (lo, hi) = self.match_range(pattern);
        lo < hi
    }

    /// Start offsets of every occurrence of `pattern`, in enumeration order
    pub fn positions<'p>(&self, pattern: impl Into<SearchPattern<'p>>) -> Vec<TextPosition> {
        let (lo, hi) = self.match_range(pattern);
        self.suffixes[lo..hi].to_vec()
    }
}

/// Position of a [`MatchIter`] within its range of matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// `first` is the current match, `last` the final one (both inclusive)
    Active { first: usize, last: usize },
    /// Past the last match
    Exhausted,
}

/// Cursor over the run of sorted suffixes that share a searched prefix
///
/// The iterator borrows its index, so the index cannot change while the
/// iterator is alive. Two iterators compare equal when their cursors do,
/// regardless of which index they came from.
#[derive(Clone)]
pub struct MatchIter<'a> {
    index: &'a SuffixIndex,
    cursor: Cursor,
}

impl<'a> MatchIter<'a> {
    /// Step to the next match (pre-increment)
    ///
    /// Stepping from the last match exhausts the iterator; stepping an
    /// exhausted iterator fails with [`IndexError::OutOfRange`].
    pub fn advance(&mut self) -> Result<&mut Self> {
        match self.cursor {
            Cursor::Exhausted => return Err(IndexError::OutOfRange),
            Cursor::Active { first, last } if first == last => {
                self.cursor = Cursor::Exhausted;
            }
            Cursor::Active { first, last } => {
                self.cursor = Cursor::Active {
                    first: first + 1,
                    last,
                };
            }
        }
        Ok(self)
    }

    /// Step to the next match, returning the state before the step
    /// (post-increment)
    pub fn post_advance(&mut self) -> Result<Self> {
        let before = self.clone();
        self.advance()?;
        Ok(before)
    }

    /// The current matching suffix
    pub fn get(&self) -> Result<&'a [u8]> {
        let pos = self.position()?;
        Ok(&self.index.text[pos..])
    }

    /// The current matching suffix as text, replacing invalid UTF-8
    pub fn get_str(&self) -> Result<Cow<'a, str>> {
        self.get().map(String::from_utf8_lossy)
    }

    /// Start offset of the current match in the indexed text
    pub fn position(&self) -> Result<TextPosition> {
        match self.cursor {
            Cursor::Active { first, .. } => Ok(self.index.suffixes[first]),
            Cursor::Exhausted => Err(IndexError::OutOfRange),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_end(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }

    /// Number of matches left, including the current one
    pub fn remaining(&self) -> usize {
        match self.cursor {
            Cursor::Active { first, last } => last - first + 1,
            Cursor::Exhausted => 0,
        }
    }
}

impl PartialEq for MatchIter<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
    }
}

impl Eq for MatchIter<'_> {}

impl fmt::Debug for MatchIter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchIter")
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<'a> Iterator for MatchIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let suffix = self.get().ok()?;
        self.advance().ok()?;
        Some(suffix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MatchIter<'_> {}

impl FusedIterator for MatchIter<'_> {}
