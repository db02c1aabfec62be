/*!
 * Signalbus Library
 * Synchronous in-process signal/slot dispatch
 *
 * Components declare interest in named signals emitted by other components;
 * a dispatch call invokes every interested slot in registration order,
 * threading a mutable argument list through the chain.
 */

pub mod deprecation;
pub mod dispatch;
pub mod locator;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export public API
pub use deprecation::{DeprecatedSignal, DEPRECATED_SIGNALS};
pub use dispatch::Dispatcher;
pub use locator::ServiceRegistry;
pub use registry::SlotRegistry;
pub use traits::{ServiceLocator, SlotTarget};
pub use types::{
    DispatchStats, HandlerFn, SignalError, SignalKey, SignalResult, Slot, SlotBinding, Value,
};
