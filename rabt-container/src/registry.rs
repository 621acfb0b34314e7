//! Binding registry — maps canonical keys to creation strategies.
//!
//! Each [`BindingKey`] holds at most one [`Strategy`]; registering again
//! under the same key replaces the previous strategy.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::injector::Injector;
use crate::key::BindingKey;

/// Type alias for factory functions.
///
/// A factory receives the injector (so it can pull its own dependencies,
/// reentrantly) and returns a freshly produced, type-erased instance.
///
/// `Arc` rather than `Box` because strategies are cloned out of the
/// registry before invocation, so no registry borrow is live while the
/// factory runs.
pub type FactoryFn = Arc<dyn Fn(&Injector) -> Arc<dyn Any + Send + Sync> + Send + Sync>;

/// A creation strategy registered under a key.
#[derive(Clone)]
pub enum Strategy {
    /// Invoked fresh on every resolution; results are never cached.
    Factory(FactoryFn),
    /// A fixed value captured once; every resolution returns the same
    /// shared handle until the key is rebound or removed.
    Instance(Arc<dyn Any + Send + Sync>),
}

impl Strategy {
    /// Wraps a typed closure into a factory strategy.
    pub fn factory<T, F>(factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&Injector) -> T + Send + Sync + 'static,
    {
        Strategy::Factory(Arc::new(move |injector| {
            Arc::new(factory(injector)) as Arc<dyn Any + Send + Sync>
        }))
    }

    /// Captures a value as an instance strategy.
    pub fn instance<T: Send + Sync + 'static>(value: T) -> Self {
        Strategy::Instance(Arc::new(value))
    }

    /// Uses an existing shared handle as an instance strategy.
    pub fn shared<T: Send + Sync + 'static>(value: Arc<T>) -> Self {
        Strategy::Instance(value)
    }

    /// Produces an instance: runs the factory, or clones the stored
    /// handle (identity preserved, never a copy of the value).
    pub(crate) fn produce(&self, injector: &Injector) -> Arc<dyn Any + Send + Sync> {
        match self {
            Strategy::Factory(factory) => factory(injector),
            Strategy::Instance(value) => Arc::clone(value),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Strategy::Factory(_) => "factory",
            Strategy::Instance(_) => "instance",
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Strategy").field(&self.kind()).finish()
    }
}

/// Stores the active strategy for each key.
#[derive(Default)]
pub(crate) struct Registry {
    bindings: HashMap<BindingKey, Strategy>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Registers `strategy` under `key`, replacing any existing one.
    pub fn set(&mut self, key: BindingKey, strategy: Strategy) {
        debug!(key = %key, kind = strategy.kind(), "Bound");
        self.bindings.insert(key, strategy);
    }

    /// Pure lookup. Clones the strategy out so the caller holds no
    /// borrow of the map while invoking it.
    pub fn get(&self, key: &BindingKey) -> Option<Strategy> {
        self.bindings.get(key).cloned()
    }

    /// Deletes the entry if present; an absent key is a no-op.
    pub fn remove(&mut self, key: &BindingKey) {
        if self.bindings.remove(key).is_some() {
            debug!(key = %key, "Removed binding");
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
