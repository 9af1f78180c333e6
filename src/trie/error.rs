// Copyright (c) 2025 NodeTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the trie engine.
//!
//! Absent keys are not errors: lookups and removals report absence through
//! `Option` and `bool` returns. The variants here cover caller bugs and
//! resource exhaustion only.

/// Errors that can occur in trie operations.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TrieError {
    /// A key exceeded the configured maximum depth.
    #[error("key of {len} symbols exceeds the maximum depth of {max_depth}")]
    KeyTooLong {
        /// Length of the rejected key, in symbols.
        len: usize,
        /// The configured bound.
        max_depth: usize,
    },

    /// Node allocation failed during insertion. The trie is left in the state
    /// it held before the insertion began.
    #[error("node allocation failed, insertion rolled back")]
    AllocationFailure,

    /// An operation was invoked on a destroyed or unknown trie handle.
    #[error("invalid trie handle: {0}")]
    InvalidHandle(u64),
}

/// Result type for trie operations.
pub type TrieResult<T> = Result<T, TrieError>;
