//! Word dictionary built on an unbalanced binary search tree plus a
//! fixed-size membership hash filter, with edit-distance-1 suggestions.
//!
//! # Architecture
//!
//! - [`tree`] -- arena-backed ordered word tree (insert, lookup, successor-copy
//!   deletion, traversal, shape statistics)
//! - [`filter`] -- fixed-capacity bit filter used as a fast reject
//! - [`dictionary`] -- tree + filter kept consistent across add/remove
//! - [`config`] -- dictionary configuration
//! - [`suggestion`] -- candidate generators and the filter-then-verify engine
//! - [`handle`] -- `SpellChecker`, the single integration point for callers
//!
//! All structures are single-writer. Mutation takes `&mut self`, so a live
//! traversal borrow rules out concurrent modification at compile time.

pub mod config;
pub mod dictionary;
pub mod filter;
#[cfg(feature = "suggest")]
pub mod handle;
#[cfg(feature = "suggest")]
pub mod suggestion;
pub mod tree;

pub use config::DictionaryConfig;
pub use dictionary::{Dictionary, DictionaryStats};
pub use filter::HashFilter;
pub use tree::OrderedWordTree;

/// Error type for dictionary operations.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// A query that needs at least one word was made on an empty tree.
    #[error("{operation} is undefined on an empty tree")]
    EmptyStructure { operation: &'static str },

    /// Input that the operation cannot process (e.g. an empty word).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value outside its supported range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = DictError> = std::result::Result<T, E>;
