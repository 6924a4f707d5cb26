//! Contract storage access for the migration.
//!
//! The migration never reaches for global state: every operation receives a
//! [`StateStore`]. A slot that was never written reads as zero, and writing
//! zero removes the slot.

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read/write access to contract storage.
pub trait StateStore {
    /// Read a storage slot. Absent slots read as zero.
    fn get_state(&self, address: Address, slot: B256) -> B256;

    /// Write a storage slot.
    fn set_state(&mut self, address: Address, slot: B256, value: B256);
}

impl<S: StateStore + ?Sized> StateStore for &mut S {
    fn get_state(&self, address: Address, slot: B256) -> B256 {
        (**self).get_state(address, slot)
    }

    fn set_state(&mut self, address: Address, slot: B256, value: B256) {
        (**self).set_state(address, slot, value)
    }
}

/// In-memory storage snapshot, keyed by contract then slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStateStore {
    accounts: BTreeMap<Address, BTreeMap<B256, B256>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-zero slots of one contract.
    pub fn storage(&self, address: Address) -> Option<&BTreeMap<B256, B256>> {
        self.accounts.get(&address)
    }

    /// Number of non-zero slots across all contracts.
    pub fn len(&self) -> usize {
        self.accounts.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl StateStore for MemoryStateStore {
    fn get_state(&self, address: Address, slot: B256) -> B256 {
        self.accounts
            .get(&address)
            .and_then(|storage| storage.get(&slot))
            .copied()
            .unwrap_or_default()
    }

    fn set_state(&mut self, address: Address, slot: B256, value: B256) {
        if value.is_zero() {
            if let Some(storage) = self.accounts.get_mut(&address) {
                storage.remove(&slot);
                if storage.is_empty() {
                    self.accounts.remove(&address);
                }
            }
            return;
        }

        self.accounts.entry(address).or_default().insert(slot, value);
    }
}

/// Write overlay on top of another store.
///
/// Reads see staged writes first. [`StagedStore::commit`] replays the writes
/// into the inner store in the order they were made; dropping the overlay
/// discards them.
#[derive(Debug)]
pub struct StagedStore<'a, S> {
    inner: &'a mut S,
    staged: BTreeMap<(Address, B256), B256>,
    journal: Vec<(Address, B256, B256)>,
}

impl<'a, S: StateStore> StagedStore<'a, S> {
    pub const fn new(inner: &'a mut S) -> Self {
        Self {
            inner,
            staged: BTreeMap::new(),
            journal: Vec::new(),
        }
    }

    /// Number of staged writes.
    pub fn pending(&self) -> usize {
        self.journal.len()
    }

    /// Apply staged writes to the inner store, returning how many were applied.
    pub fn commit(mut self) -> usize {
        let count = self.journal.len();
        for (address, slot, value) in std::mem::take(&mut self.journal) {
            self.inner.set_state(address, slot, value);
        }
        count
    }
}

impl<S: StateStore> StateStore for StagedStore<'_, S> {
    fn get_state(&self, address: Address, slot: B256) -> B256 {
        self.staged
            .get(&(address, slot))
            .copied()
            .unwrap_or_else(|| self.inner.get_state(address, slot))
    }

    fn set_state(&mut self, address: Address, slot: B256, value: B256) {
        self.staged.insert((address, slot), value);
        self.journal.push((address, slot, value));
    }
}
