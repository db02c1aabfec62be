/*!
 * Dispatch Traits
 * Capability abstractions for slot targets and service resolution
 */

use crate::types::{SignalResult, Value};
use std::sync::Arc;

/// A target exposing dynamically named slot operations.
///
/// Implementors decide which operation names they answer to; the dispatcher
/// checks `has_method` before every call and reports an unknown name as a
/// typed error instead of a runtime fault.
pub trait SlotTarget: Send + Sync {
    /// True when the target exposes the named operation
    fn has_method(&self, method: &str) -> bool;

    /// Invoke the named operation with the prepared argument list.
    ///
    /// Return `Value::Null` to leave the signal arguments unchanged, or a
    /// `Value::List` with the same number of elements to replace them.
    fn call(&self, method: &str, args: Vec<Value>) -> SignalResult<Value>;
}

/// Resolves named-service slot keys at dispatch time.
///
/// Hosts with their own service container implement this; everyone else can
/// use the bundled [`crate::locator::ServiceRegistry`].
pub trait ServiceLocator: Send + Sync {
    /// Resolve a service key to a slot target, `None` for unknown keys
    fn resolve(&self, key: &str) -> Option<Arc<dyn SlotTarget>>;
}
