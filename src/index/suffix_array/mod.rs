//! Suffix index module
//!
//! This module provides prefix search and longest-common-substring queries
//! over the sorted suffixes of a single text.
//!
//! ## Architecture
//!
//! - `builder`: Owns the text and generates/sorts its suffixes
//! - `search`: Binary-search prefix lookup and the match iterator
//! - `lcs`: Longest common substring between two indexes
//! - `types`: Configuration, statistics, patterns and errors

pub mod builder;
pub mod lcs;
pub mod search;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixIndex;
pub use search::{Cursor, MatchIter};
pub use types::{IndexConfig, IndexError, IndexStats, SearchPattern};
