//! Suffix index construction
//!
//! Builds the sorted suffix collection for a text by:
//! 1. Generating one entry per start offset `0..len`
//! 2. Sorting the entries by comparing the full suffixes they denote
//!
//! Every structural change (construction, assignment, concatenation)
//! regenerates and re-sorts the collection as a unit.

use super::types::*;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign};
use tracing::debug;

/// A text together with the sorted collection of all of its suffixes
///
/// Each entry of the collection is the start offset of one suffix of the
/// owned text. Entries are kept in ascending lexicographic byte order of the
/// suffixes they denote; no caller ever observes an unsorted state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuffixIndex {
    /// The indexed text, exactly as supplied
    pub(crate) text: Vec<u8>,
    /// ASCII-lowercased copy of `text`, present only for case-insensitive indexes
    pub(crate) folded: Option<Vec<u8>>,
    /// Sorted suffix start offsets
    pub(crate) suffixes: Vec<SuffixEntry>,
    pub(crate) config: IndexConfig,
}

impl SuffixIndex {
    /// Build an index over `text` with the default configuration
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        Self::with_config(text, IndexConfig::default())
    }

    /// Build an index over `text` with the given configuration
    pub fn with_config(text: impl Into<Vec<u8>>, config: IndexConfig) -> Self {
        let mut index = Self {
            text: text.into(),
            folded: None,
            suffixes: Vec::new(),
            config,
        };
        index.rebuild();
        index
    }

    /// Replace this index with an independent copy of `rhs`
    ///
    /// Assigning an index to itself cannot be expressed through `&mut self`
    /// and `&Self` at once, so the self-assignment case is a no-op by
    /// construction.
    pub fn assign(&mut self, rhs: &SuffixIndex) {
        self.clone_from(rhs);
    }

    /// The indexed text
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// The indexed text as UTF-8, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }

    /// Length of the indexed text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of suffixes (equals the text length)
    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }

    /// The `rank`-th suffix in sorted order
    pub fn suffix(&self, rank: usize) -> Option<&[u8]> {
        self.suffixes.get(rank).map(|&pos| &self.text[pos..])
    }

    /// All suffixes in ascending order
    pub fn suffixes(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.suffixes.iter().map(|&pos| &self.text[pos..])
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Get statistics about this index
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            text_size: self.text.len(),
            suffix_count: self.suffixes.len(),
            case_insensitive: self.config.case_insensitive,
        }
    }

    /// Bytes used for ordering and matching
    #[inline]
    pub(crate) fn keys(&self) -> &[u8] {
        self.folded.as_deref().unwrap_or(&self.text)
    }

    /// Regenerate the suffix collection from the current text
    fn rebuild(&mut self) {
        self.folded = self
            .config
            .case_insensitive
            .then(|| self.text.to_ascii_lowercase());

        self.suffixes = build_suffix_array(self.keys(), self.config.parallel_sort_threshold);

        debug!(
            text_size = self.text.len(),
            suffix_count = self.suffixes.len(),
            case_insensitive = self.config.case_insensitive,
            "built suffix index"
        );
    }
}

impl From<&str> for SuffixIndex {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SuffixIndex {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&[u8]> for SuffixIndex {
    fn from(text: &[u8]) -> Self {
        Self::new(text)
    }
}

impl From<Vec<u8>> for SuffixIndex {
    fn from(text: Vec<u8>) -> Self {
        Self::new(text)
    }
}

/// `&a + &b` builds a fresh index over `a`'s text followed by `b`'s text,
/// using `a`'s configuration. Both operands are left unchanged.
impl Add<&SuffixIndex> for &SuffixIndex {
    type Output = SuffixIndex;

    fn add(self, rhs: &SuffixIndex) -> SuffixIndex {
        let mut text = Vec::with_capacity(self.text.len() + rhs.text.len());
        text.extend_from_slice(&self.text);
        text.extend_from_slice(&rhs.text);
        SuffixIndex::with_config(text, self.config.clone())
    }
}

impl Add<&SuffixIndex> for SuffixIndex {
    type Output = SuffixIndex;

    fn add(mut self, rhs: &SuffixIndex) -> SuffixIndex {
        self += rhs;
        self
    }
}

/// `a += &b` appends `b`'s text and regenerates every suffix of the result
impl AddAssign<&SuffixIndex> for SuffixIndex {
    fn add_assign(&mut self, rhs: &SuffixIndex) {
        self.text.extend_from_slice(&rhs.text);
        self.rebuild();
    }
}

/// Build the sorted suffix collection for `keys`
///
/// This approach:
/// 1. Creates array of all suffix positions [0, 1, 2, ..., n-1]
/// 2. Sorts positions by comparing the suffixes they point to
/// 3. Uses rayon for parallel sorting above `parallel_threshold` bytes
///
/// Comparisons are unbounded so the order is exact; the worst case is
/// O(n² log n) byte comparisons.
pub(crate) fn build_suffix_array(keys: &[u8], parallel_threshold: usize) -> Vec<SuffixEntry> {
    let n = keys.len();

    let mut sa: Vec<SuffixEntry> = (0..n).collect();

    // All suffixes differ in length, so no two compare equal and an
    // unstable sort yields the same order as a stable one
    if n > parallel_threshold {
        sa.par_sort_unstable_by(|&a, &b| compare_suffixes(keys, a, b));
    } else {
        sa.sort_unstable_by(|&a, &b| compare_suffixes(keys, a, b));
    }

    sa
}

/// Compare two suffixes lexicographically
#[inline]
fn compare_suffixes(text: &[u8], a: usize, b: usize) -> Ordering {
    text[a..].cmp(&text[b..])
}
