/*!
 * Service Registry
 * DashMap-backed service locator for named-service slots
 */

use crate::traits::{ServiceLocator, SlotTarget};
use ahash::RandomState;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;

/// Default [`ServiceLocator`] implementation.
///
/// Maps service keys to shared slot targets. Hosts that already have a
/// dependency container implement [`ServiceLocator`] on it instead.
#[derive(Clone)]
pub struct ServiceRegistry {
    services: Arc<DashMap<String, Arc<dyn SlotTarget>, RandomState>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self {
            services: Arc::new(DashMap::with_hasher(RandomState::new())),
        }
    }

    /// Register a target under a service key, replacing any previous entry
    pub fn register(&self, key: impl Into<String>, target: Arc<dyn SlotTarget>) {
        let key = key.into();
        debug!("Registered service '{}'", key);
        self.services.insert(key, target);
    }

    /// Check if a service key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.services.contains_key(key)
    }

    /// Get registered service count
    pub fn count(&self) -> usize {
        self.services.len()
    }
}

impl ServiceLocator for ServiceRegistry {
    fn resolve(&self, key: &str) -> Option<Arc<dyn SlotTarget>> {
        self.services.get(key).map(|entry| entry.value().clone())
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
