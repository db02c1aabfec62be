/*!
 * Slot Registry
 * Ordered, idempotent storage of signal-to-slot bindings
 */

use crate::types::{SignalKey, SlotBinding};
use ahash::RandomState;
use dashmap::DashMap;
use std::sync::Arc;

/// Binding storage keyed by signal identity.
///
/// Bindings are kept in registration order and are never removed in normal
/// operation; `clear` exists for test isolation. Readers always receive a
/// snapshot, so no lock is held while slot code runs.
#[derive(Clone)]
pub struct SlotRegistry {
    slots: Arc<DashMap<SignalKey, Vec<SlotBinding>, RandomState>>,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self {
            slots: Arc::new(DashMap::with_hasher(RandomState::new())),
        }
    }

    /// Append a binding unless a strictly-equal one is already present.
    ///
    /// Returns false when the binding was a duplicate and nothing changed.
    pub fn insert(&self, key: SignalKey, binding: SlotBinding) -> bool {
        let mut bindings = self.slots.entry(key).or_default();
        if bindings.iter().any(|existing| *existing == binding) {
            return false;
        }
        bindings.push(binding);
        true
    }

    /// Snapshot of the bindings for a key, in registration order
    pub fn get(&self, key: &SignalKey) -> Vec<SlotBinding> {
        self.slots
            .get(key)
            .map(|bindings| bindings.value().clone())
            .unwrap_or_default()
    }

    /// True when at least one binding exists for the key
    pub fn contains(&self, key: &SignalKey) -> bool {
        self.slots
            .get(key)
            .map(|bindings| !bindings.value().is_empty())
            .unwrap_or(false)
    }

    /// All signal keys with at least one binding
    pub fn keys(&self) -> Vec<SignalKey> {
        self.slots
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Total bindings across all signals
    pub fn binding_count(&self) -> usize {
        self.slots.iter().map(|entry| entry.value().len()).sum()
    }

    /// Number of distinct signals with bindings
    pub fn signal_count(&self) -> usize {
        self.slots.len()
    }

    /// Drop every binding. Test isolation only.
    pub fn clear(&self) {
        self.slots.clear();
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::new()
    }
}
