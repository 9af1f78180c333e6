// Copyright (c) 2025 NodeTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node representation for the trie engine.
//!
//! Nodes are the fundamental building blocks of the trie. Each node holds the
//! dispatch map from key symbols to its exclusively owned children and, for
//! terminal nodes, the value stored under the key that ends here.

use fnv::FnvHashMap;

/// A single position in the key space.
///
/// A node is terminal exactly when `value` is `Some`: every stored key carries
/// a value, so the terminal flag and the value payload share one field. A node
/// with `value: None` is an interior branching point that some stored key
/// passes through without ending there.
#[derive(Debug)]
pub(crate) struct TrieNode<V> {
    /// Map from the next key symbol to the owned child node.
    ///
    /// Symbols are unique within a node by construction. Iteration order of
    /// this map is incidental; enumeration imposes its own fixed order.
    pub(crate) children: FnvHashMap<u8, Box<TrieNode<V>>>,

    /// Value stored under the key ending at this node, if any.
    pub(crate) value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty, non-terminal node.
    pub(crate) fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            value: None,
        }
    }

    /// True when this node is the endpoint of a stored key.
    pub(crate) fn is_terminal(&self) -> bool {
        self.value.is_some()
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
