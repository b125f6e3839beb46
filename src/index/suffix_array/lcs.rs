//! Longest common substring of two indexed texts
//!
//! Candidates are drawn from the shorter text, longest first and left to
//! right within a length, and looked up with a prefix search in the longer
//! index. The first candidate that matches wins.

use super::builder::SuffixIndex;
use super::types::IndexConfig;
use std::borrow::Cow;
use std::ops::BitAnd;
use tracing::debug;

impl SuffixIndex {
    /// Longest substring shared by this text and `other`'s text
    ///
    /// Among shared substrings of the maximal length, the one starting
    /// leftmost in the shorter text is returned. Texts of equal length use
    /// the lexicographically smaller one as the shorter text, so the result
    /// does not depend on operand order. If either index ignores ASCII case,
    /// the comparison ignores it too. Returns an empty slice when the texts
    /// share nothing.
    pub fn longest_common_substring<'a>(&'a self, other: &'a SuffixIndex) -> &'a [u8] {
        let (longer, shorter) = if self.text.len() > other.text.len()
            || (self.text.len() == other.text.len() && self.text > other.text)
        {
            (self, other)
        } else {
            (other, self)
        };

        // Mixed settings fold both sides: a case-sensitive longer index is
        // re-sorted under folded keys before the lookups
        let fold = self.config.case_insensitive || other.config.case_insensitive;
        let haystack: Cow<'_, SuffixIndex> = if fold && !longer.config.case_insensitive {
            let config = IndexConfig {
                case_insensitive: true,
                ..longer.config.clone()
            };
            Cow::Owned(SuffixIndex::with_config(longer.text.clone(), config))
        } else {
            Cow::Borrowed(longer)
        };

        let found = haystack.longest_prefix_match(&shorter.text);
        debug!(
            longer = longer.text.len(),
            shorter = shorter.text.len(),
            fold,
            found = found.len(),
            "longest common substring"
        );
        found
    }

    /// Longest substring of `needle` that occurs in this index
    fn longest_prefix_match<'p>(&self, needle: &'p [u8]) -> &'p [u8] {
        for len in (1..=needle.len()).rev() {
            for start in 0..=needle.len() - len {
                let candidate = &needle[start..start + len];
                if self.contains(candidate) {
                    return candidate;
                }
            }
        }
        &[]
    }
}

/// `&a & &b` is the longest common substring of the two texts
impl<'a> BitAnd<&'a SuffixIndex> for &'a SuffixIndex {
    type Output = &'a [u8];

    fn bitand(self, rhs: &'a SuffixIndex) -> &'a [u8] {
        self.longest_common_substring(rhs)
    }
}
