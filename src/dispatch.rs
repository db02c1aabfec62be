/*!
 * Signal Dispatcher
 * Synchronous dispatch of signals to their connected slots
 */

use crate::deprecation::{self, DeprecatedSignal, DEPRECATED_SIGNALS};
use crate::locator::ServiceRegistry;
use crate::registry::SlotRegistry;
use crate::traits::ServiceLocator;
use crate::types::{
    DispatchStats, SignalError, SignalKey, SignalResult, Slot, SlotBinding, Value,
};
use log::{debug, trace, warn};
use parking_lot::RwLock;
use std::sync::Arc;

/// Central signal/slot dispatcher.
///
/// Cheap to clone; clones share the same registry, locator and statistics.
/// Hosts construct one dispatcher and pass it to every component that needs
/// to connect or dispatch. There is no global instance.
#[derive(Clone)]
pub struct Dispatcher {
    registry: SlotRegistry,
    locator: Arc<dyn ServiceLocator>,
    deprecated: &'static [DeprecatedSignal],
    stats: Arc<RwLock<DispatchStats>>,
}

impl Dispatcher {
    /// Dispatcher with an empty bundled service registry
    pub fn new() -> Self {
        Self::with_locator(Arc::new(ServiceRegistry::new()))
    }

    /// Dispatcher resolving named-service slots through the given locator
    pub fn with_locator(locator: Arc<dyn ServiceLocator>) -> Self {
        Self::with_deprecation_table(locator, DEPRECATED_SIGNALS)
    }

    /// Dispatcher reporting against an alternate replacement table
    pub fn with_deprecation_table(
        locator: Arc<dyn ServiceLocator>,
        table: &'static [DeprecatedSignal],
    ) -> Self {
        Self {
            registry: SlotRegistry::new(),
            locator,
            deprecated: table,
            stats: Arc::new(RwLock::new(DispatchStats::default())),
        }
    }

    /// Connect a slot to a signal.
    ///
    /// One slot can be connected to multiple signals by calling this multiple
    /// times. Connecting a strictly-equal binding twice is a silent no-op.
    /// When `pass_signal_information` is set, the slot receives the textual
    /// signal identity (`source::signal`) as one extra trailing argument.
    ///
    /// There is no disconnect; bindings live as long as the dispatcher.
    pub fn connect(
        &self,
        source: &str,
        signal: &str,
        slot: Slot,
        pass_signal_information: bool,
    ) -> SignalResult<()> {
        if let Slot::Service { key, method } = &slot {
            if method.is_empty() {
                return Err(SignalError::InvalidBinding(format!(
                    "the slot method name must not be empty for service '{}'",
                    key
                )));
            }
        }
        let key = SignalKey::new(source, signal);
        let binding = SlotBinding::new(slot, pass_signal_information);
        if self.registry.insert(key, binding) {
            debug!("Connected slot to signal {}::{}", source, signal);
            self.stats.write().bindings_registered += 1;
        } else {
            debug!(
                "Ignored duplicate slot connection for signal {}::{}",
                source, signal
            );
            self.stats.write().duplicate_connects_ignored += 1;
        }
        Ok(())
    }

    /// Dispatch a signal to every connected slot, in registration order.
    ///
    /// Each slot sees the argument list as left by its predecessors and may
    /// replace it with a list of the same length; the final list is returned.
    /// Dispatching a signal nobody is connected to returns the arguments
    /// unchanged. The first failing slot aborts the chain.
    ///
    /// Slots run on the caller's stack with no lock held, so a slot may
    /// re-enter `connect` or `dispatch`; bindings added mid-dispatch do not
    /// join the iteration already in flight.
    pub fn dispatch(
        &self,
        source: &str,
        signal: &str,
        args: Vec<Value>,
    ) -> SignalResult<Vec<Value>> {
        trace!(
            "Dispatching signal {}::{} with arguments {:?}",
            source,
            signal,
            args
        );
        self.stats.write().signals_dispatched += 1;

        let key = SignalKey::new(source, signal);
        let bindings = self.registry.get(&key);
        if bindings.is_empty() {
            return Ok(args);
        }

        let mut working = args;
        for binding in &bindings {
            let returned = self.invoke(binding, &working, source, signal)?;
            self.stats.write().slots_invoked += 1;
            match returned {
                // Only an absent return leaves the arguments untouched; an
                // empty list is a real return and must match the arity.
                Value::Null => {}
                Value::List(list) => {
                    if list.len() != working.len() {
                        return Err(SignalError::InvalidSlotReturn(format!(
                            "slot {} returned {} arguments but received {}",
                            binding.slot.describe(),
                            list.len(),
                            working.len()
                        )));
                    }
                    working = list;
                }
                other => {
                    return Err(SignalError::InvalidSlotReturn(format!(
                        "slot {} returned a value of type {} instead of an argument list",
                        binding.slot.describe(),
                        other.type_name()
                    )));
                }
            }
        }
        Ok(working)
    }

    /// Resolve one binding and invoke it with the prepared argument list
    fn invoke(
        &self,
        binding: &SlotBinding,
        working: &[Value],
        source: &str,
        signal: &str,
    ) -> SignalResult<Value> {
        let mut call_args = working.to_vec();
        if binding.pass_signal_information {
            call_args.push(Value::Str(format!("{}::{}", source, signal)));
        }
        match &binding.slot {
            Slot::Callable(handler) => handler(call_args),
            Slot::Object { target, method } => {
                if !target.has_method(method) {
                    return Err(SignalError::InvalidSlot(format!(
                        "the slot method '{}' does not exist on the bound object",
                        method
                    )));
                }
                target.call(method, call_args)
            }
            Slot::Service { key, method } => {
                let target = self.locator.resolve(key).ok_or_else(|| {
                    SignalError::UnresolvedSlot(format!(
                        "the service '{}' is not known to the locator",
                        key
                    ))
                })?;
                if !target.has_method(method) {
                    return Err(SignalError::InvalidSlot(format!(
                        "the slot method '{}' does not exist on service '{}'",
                        method, key
                    )));
                }
                target.call(method, call_args)
            }
        }
    }

    /// Snapshot of all slots connected to the given signal
    pub fn get_slots(&self, source: &str, signal: &str) -> Vec<SlotBinding> {
        self.registry.get(&SignalKey::new(source, signal))
    }

    /// True when at least one slot is connected to the signal
    pub fn has_slots(&self, source: &str, signal: &str) -> bool {
        self.registry.contains(&SignalKey::new(source, signal))
    }

    /// Total bindings across all signals
    pub fn binding_count(&self) -> usize {
        self.registry.binding_count()
    }

    /// Report every bound signal that has a modern replacement event.
    ///
    /// Emits at most one batched warning per call, nothing when no deprecated
    /// signal is bound. Diagnostic only: never fails, never affects dispatch,
    /// intended to run once per unit of work by the host.
    pub fn report_deprecated_signal_slots(&self) {
        let messages = deprecation::collect_messages(self.deprecated, self.registry.keys());
        if !messages.is_empty() {
            warn!(
                target: "signalbus::deprecation",
                "The following deprecated signals are connected:\n{}",
                messages.join("\n")
            );
        }
    }

    /// Current dispatch statistics
    pub fn stats(&self) -> DispatchStats {
        self.stats.read().clone()
    }

    /// Drop all bindings and zero the statistics. Test isolation only.
    pub fn reset(&self) {
        self.registry.clear();
        *self.stats.write() = DispatchStats::default();
        debug!("Dispatcher reset");
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
