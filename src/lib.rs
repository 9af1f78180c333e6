//! NodeTrie Library
//!
//! This library contains a node-based trie (prefix tree) engine mapping
//! byte-sequence keys to opaque values, together with the handle-based
//! surface a language-binding layer calls into. The library is designed to
//! sit below such binding layers, but is equally usable as a plain Rust
//! dependency.
//!
//! # Architecture
//!
//! The engine is designed with the following principles in mind:
//! - Strict component boundaries: callers reach the node graph only through
//!   the [`trie::Trie`] and [`trie::TrieRegistry`] surfaces
//! - Single-threaded core with the external synchronization contract encoded
//!   in the borrow checker (`&self` reads, `&mut self` mutation)
//! - Comprehensive error handling and propagation; absent keys are normal
//!   returns, not errors
//! - No unreachable garbage: deletion prunes dead branches eagerly

// Re-export public modules
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use trie::{PrefixIter, Trie, TrieConfig, TrieError, TrieHandle, TrieRegistry, TrieResult};

/// Version information for the NodeTrie library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
