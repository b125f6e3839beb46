//! # sufidx - Suffix Index
//!
//! sufidx indexes every suffix of a text in sorted order and answers two
//! kinds of query over it: prefix search (every suffix starting with a
//! pattern) and the longest common substring of two indexed texts.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Suffix index construction, search and LCS
//! - [`output`] - Result formatting for the command-line front-end
//! - [`utils`] - Config file handling
//!
//! ## Quick Start
//!
//! ```
//! use sufidx::index::suffix_array::SuffixIndex;
//!
//! let index = SuffixIndex::from("asdasdasd");
//! let matches: Vec<&[u8]> = index.search('d').collect();
//! assert_eq!(matches, vec![&b"d"[..], &b"dasd"[..], &b"dasdasd"[..]]);
//!
//! let a = SuffixIndex::from("Hello World!");
//! let b = SuffixIndex::from("xyzHelloxyzWorld!xzy");
//! assert_eq!(&a & &b, b"World!");
//! ```
//!
//! ## Performance
//!
//! Suffixes are ordered by plain lexicographic comparison, so building costs
//! O(n² log n) byte comparisons in the worst case. A search is a binary
//! search plus a scan over the matching run. The LCS query searches the longer
//! index with candidate substrings of the shorter text, longest first.

pub mod index;
pub mod output;
pub mod utils;
