/*!
 * Signal Types
 * Signal identity, slot bindings, argument values and result types
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::traits::SlotTarget;

/// Signal operation result
pub type SignalResult<T> = Result<T, SignalError>;

/// Signal dispatch errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SignalError {
    #[error("Invalid binding: {0}")]
    InvalidBinding(String),

    #[error("Unresolved slot: {0}")]
    UnresolvedSlot(String),

    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    #[error("Invalid slot return: {0}")]
    InvalidSlotReturn(String),

    #[error("Slot execution failed: {0}")]
    SlotFailed(String),
}

/// A single signal argument.
///
/// Slots receive arguments as a `Vec<Value>` and answer with one `Value`:
/// `Null` leaves the argument list untouched, a `List` of matching length
/// replaces it, anything else is rejected by the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Variant name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            // Non-finite floats have no JSON form and degrade to null
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Compound signal identity: emitting source plus signal name.
///
/// Both parts are case-sensitive and matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalKey {
    pub source: String,
    pub signal: String,
}

impl SignalKey {
    pub fn new(source: impl Into<String>, signal: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            signal: signal.into(),
        }
    }
}

impl fmt::Display for SignalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.source, self.signal)
    }
}

/// Slot handler callback function type
pub type HandlerFn = Arc<dyn Fn(Vec<Value>) -> SignalResult<Value> + Send + Sync>;

/// The callable side of a binding.
///
/// `Service` holds only a lookup key and is resolved through the locator on
/// every dispatch. `Object` keeps a shared reference to its target for the
/// lifetime of the binding. `Callable` is invoked directly; it has no method
/// name.
#[derive(Clone)]
pub enum Slot {
    Service { key: String, method: String },
    Object { target: Arc<dyn SlotTarget>, method: String },
    Callable(HandlerFn),
}

impl Slot {
    /// Slot resolved by service key at dispatch time
    pub fn service(key: impl Into<String>, method: impl Into<String>) -> Self {
        Slot::Service {
            key: key.into(),
            method: method.into(),
        }
    }

    /// Slot bound to an already-constructed target
    pub fn object(target: Arc<dyn SlotTarget>, method: impl Into<String>) -> Self {
        Slot::Object {
            target,
            method: method.into(),
        }
    }

    /// Slot bound to a closure, invoked directly
    pub fn callable<F>(handler: F) -> Self
    where
        F: Fn(Vec<Value>) -> SignalResult<Value> + Send + Sync + 'static,
    {
        Slot::Callable(Arc::new(handler))
    }

    /// Human-readable slot description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            Slot::Service { key, method } => format!("{}::{}", key, method),
            Slot::Object { method, .. } => format!("<object>::{}", method),
            Slot::Callable(_) => "<callable>".to_string(),
        }
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Slot::Service { key: a, method: am },
                Slot::Service { key: b, method: bm },
            ) => a == b && am == bm,
            (
                Slot::Object { target: a, method: am },
                Slot::Object { target: b, method: bm },
            ) => {
                // Identity comparison: the same shared target, not a lookalike
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const () && am == bm
            }
            (Slot::Callable(a), Slot::Callable(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Service { key, method } => f
                .debug_struct("Service")
                .field("key", key)
                .field("method", method)
                .finish(),
            Slot::Object { method, .. } => f
                .debug_struct("Object")
                .field("method", method)
                .finish_non_exhaustive(),
            Slot::Callable(_) => f.write_str("Callable"),
        }
    }
}

/// One registered interest in a signal
#[derive(Debug, Clone, PartialEq)]
pub struct SlotBinding {
    pub slot: Slot,
    /// Append the textual signal identity as a trailing, call-local argument
    pub pass_signal_information: bool,
}

impl SlotBinding {
    pub fn new(slot: Slot, pass_signal_information: bool) -> Self {
        Self {
            slot,
            pass_signal_information,
        }
    }
}

/// Dispatch statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchStats {
    pub signals_dispatched: u64,
    pub slots_invoked: u64,
    pub bindings_registered: u64,
    pub duplicate_connects_ignored: u64,
}
