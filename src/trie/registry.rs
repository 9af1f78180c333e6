// Copyright (c) 2025 NodeTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Handle-based surface over owned tries.
//!
//! A binding layer addresses tries through opaque handles rather than
//! references. The registry owns every trie it creates, validates the handle
//! on each call, and fails with [`TrieError::InvalidHandle`] once a handle has
//! been destroyed; it never silently proceeds on a stale handle.

use fnv::FnvHashMap;

use super::{PrefixIter, Trie, TrieConfig, TrieError, TrieResult};

/// Opaque identifier for a trie owned by a [`TrieRegistry`].
///
/// Handles are cheap to copy and remain comparable after destruction; ids are
/// never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrieHandle(u64);

/// Owns a set of tries addressed by opaque handles.
#[derive(Debug)]
pub struct TrieRegistry<V> {
    tries: FnvHashMap<u64, Trie<V>>,
    next_id: u64,
}

impl<V> TrieRegistry<V> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            tries: FnvHashMap::default(),
            next_id: 0,
        }
    }

    /// Allocates an empty trie with default configuration and returns its
    /// handle.
    pub fn create(&mut self) -> TrieResult<TrieHandle> {
        self.create_with_config(TrieConfig::default())
    }

    /// Allocates an empty trie with the given configuration and returns its
    /// handle.
    ///
    /// # Errors
    ///
    /// [`TrieError::AllocationFailure`] if the registry cannot grow.
    pub fn create_with_config(&mut self, config: TrieConfig) -> TrieResult<TrieHandle> {
        self.tries
            .try_reserve(1)
            .map_err(|_| TrieError::AllocationFailure)?;
        let id = self.next_id;
        self.next_id += 1;
        self.tries.insert(id, Trie::with_config(config));
        tracing::debug!(handle = id, "created trie");
        Ok(TrieHandle(id))
    }

    /// Releases the trie behind `handle` together with its entire node graph.
    ///
    /// The handle is invalid afterward; further operations on it fail with
    /// [`TrieError::InvalidHandle`].
    pub fn destroy(&mut self, handle: TrieHandle) -> TrieResult<()> {
        match self.tries.remove(&handle.0) {
            Some(trie) => {
                tracing::debug!(handle = handle.0, keys = trie.len(), "destroyed trie");
                Ok(())
            }
            None => Err(TrieError::InvalidHandle(handle.0)),
        }
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// already existed.
    pub fn insert(&mut self, handle: TrieHandle, key: &[u8], value: V) -> TrieResult<Option<V>> {
        self.trie_mut(handle)?.insert(key, value)
    }

    /// Looks up the value stored under `key`.
    pub fn lookup(&self, handle: TrieHandle, key: &[u8]) -> TrieResult<Option<&V>> {
        Ok(self.trie(handle)?.get(key))
    }

    /// True if any stored key begins with `prefix`, including `prefix`
    /// itself.
    pub fn contains_prefix(&self, handle: TrieHandle, prefix: &[u8]) -> TrieResult<bool> {
        Ok(self.trie(handle)?.contains_prefix(prefix))
    }

    /// Removes `key`; `true` if it was present.
    pub fn delete(&mut self, handle: TrieHandle, key: &[u8]) -> TrieResult<bool> {
        Ok(self.trie_mut(handle)?.remove(key).is_some())
    }

    /// Number of keys stored in the trie behind `handle`.
    pub fn size(&self, handle: TrieHandle) -> TrieResult<usize> {
        Ok(self.trie(handle)?.len())
    }

    /// Lazy enumeration of the stored pairs whose keys begin with `prefix`.
    pub fn iterate_prefix(&self, handle: TrieHandle, prefix: &[u8]) -> TrieResult<PrefixIter<'_, V>> {
        Ok(self.trie(handle)?.iter_prefix(prefix))
    }

    fn trie(&self, handle: TrieHandle) -> TrieResult<&Trie<V>> {
        self.tries
            .get(&handle.0)
            .ok_or(TrieError::InvalidHandle(handle.0))
    }

    fn trie_mut(&mut self, handle: TrieHandle) -> TrieResult<&mut Trie<V>> {
        self.tries
            .get_mut(&handle.0)
            .ok_or(TrieError::InvalidHandle(handle.0))
    }
}

impl<V> Default for TrieRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}
