//! # The Injector — heart of Rabt
//!
//! A runtime binding container: keys (type identities or string names)
//! map to creation strategies, and instances are resolved on demand by
//! walking a fixed fallback chain.
//!
//! # Resolution order
//! ```text
//! create(key)
//!    │
//!    ├─ 1. explicit binding?   factory → run it, instance → share it
//!    ├─ 2. Injectable type?    T::inject(injector)
//!    └─ 3. otherwise           None
//! ```
//! First success wins; an explicit binding always beats self-construction.
//! String keys stop after step 1 — a string carries no type to construct
//! from.
//!
//! # Examples
//! ```rust
//! use rabt_container::prelude::*;
//! use std::sync::Arc;
//!
//! struct Greeter {
//!     greeting: Arc<String>,
//! }
//!
//! impl Injectable for Greeter {
//!     fn inject(injector: &Injector) -> Self {
//!         let greeting = injector
//!             .create_as::<String>("greeting")
//!             .unwrap_or_else(|| Arc::new(String::from("hello")));
//!         Greeter { greeting }
//!     }
//! }
//!
//! let injector = Injector::new();
//! injector.bind_instance("greeting", String::from("salaam"));
//!
//! let greeter = injector.create::<Greeter>().unwrap();
//! assert_eq!(*greeter.greeting, "salaam");
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::injectable::Injectable;
use crate::key::BindingKey;
use crate::module::Module;
use crate::registry::{Registry, Strategy};

/// Runtime binding container and resolver.
///
/// An `Injector` is a cheap-to-clone shared handle: clones operate on
/// the same registry, so a back-reference handed to a constructed
/// instance observes later rebinds. Binding and resolution never hold a
/// lock while user code runs, so factories and [`Injectable::inject`]
/// implementations may freely call back into the same injector.
///
/// Resolution is best-effort: every `create` flavour returns `Option`,
/// and an unresolvable or mismatched key is a normal miss, never a
/// fault. Panics raised inside a factory or constructor propagate
/// unchanged.
#[derive(Clone)]
pub struct Injector {
    registry: Arc<RwLock<Registry>>,
}

impl Injector {
    /// Creates an empty injector.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry::new())),
        }
    }

    /// Creates an injector and lets each module pre-register bindings.
    ///
    /// Modules run in order, once each, before the injector is returned.
    ///
    /// # Examples
    /// ```
    /// use rabt_container::prelude::*;
    ///
    /// struct Defaults;
    ///
    /// impl Module for Defaults {
    ///     fn configure(&self, injector: &Injector) {
    ///         injector.bind_instance("answer", 42i32);
    ///     }
    /// }
    ///
    /// let injector = Injector::with_modules([&Defaults as &dyn Module]);
    /// assert_eq!(*injector.create_as::<i32>("answer").unwrap(), 42);
    /// ```
    pub fn with_modules<'a, M>(modules: M) -> Self
    where
        M: IntoIterator<Item = &'a dyn Module>,
    {
        let injector = Self::new();
        for module in modules {
            debug!(module = module.name(), "Configuring module");
            module.configure(&injector);
        }
        injector
    }

    // ── Binding ──

    /// Registers `strategy` under `key`, replacing any previous binding
    /// for that key.
    pub fn bind(&self, key: impl Into<BindingKey>, strategy: Strategy) {
        self.registry.write().set(key.into(), strategy);
    }

    /// Registers a factory: invoked fresh on every resolution, with this
    /// injector as its argument. Results are never cached.
    pub fn bind_factory<K, T, F>(&self, key: K, factory: F)
    where
        K: Into<BindingKey>,
        T: Send + Sync + 'static,
        F: Fn(&Injector) -> T + Send + Sync + 'static,
    {
        self.bind(key, Strategy::factory(factory));
    }

    /// Registers a fixed instance: every resolution returns the same
    /// shared handle until the key is rebound or removed.
    ///
    /// Returns that handle, so the caller keeps the identity every
    /// later `create` will yield.
    pub fn bind_instance<K, T>(&self, key: K, value: T) -> Arc<T>
    where
        K: Into<BindingKey>,
        T: Send + Sync + 'static,
    {
        let value = Arc::new(value);
        self.bind(key, Strategy::shared(Arc::clone(&value)));
        value
    }

    /// Registers an existing shared handle as a fixed instance.
    pub fn bind_shared<K, T>(&self, key: K, value: Arc<T>)
    where
        K: Into<BindingKey>,
        T: Send + Sync + 'static,
    {
        self.bind(key, Strategy::shared(value));
    }

    /// Deletes the binding for `key`. Absent keys are a silent no-op;
    /// afterwards resolution behaves as if the key was never bound.
    pub fn remove_binding(&self, key: impl Into<BindingKey>) {
        self.registry.write().remove(&key.into());
    }

    // ── Creation ──

    /// Resolves type `T` through the full fallback chain.
    ///
    /// In order, first success wins:
    /// 1. an explicit binding under `T`'s key — always preferred, even
    ///    when `T` could construct itself; a bound value that is not
    ///    actually a `T` is a silent miss, **not** a fall-through to
    ///    self-construction;
    /// 2. self-construction via [`Injectable::inject`].
    ///
    /// Before returning, any instance whose type opts into
    /// [`InjectorAware`](crate::injectable::InjectorAware) receives a
    /// back-reference to this injector.
    pub fn create<T: Injectable>(&self) -> Option<Arc<T>> {
        let key = BindingKey::of::<T>();
        if let Some(strategy) = self.lookup(&key) {
            trace!(key = %key, "Resolving from binding");
            let value = strategy.produce(self).downcast::<T>().ok()?;
            self.tag(&value);
            return Some(value);
        }

        trace!(key = %key, "Resolving through self-construction");
        let value = Arc::new(T::inject(self));
        self.tag(&value);
        Some(value)
    }

    /// Resolves `key` from its binding and downcasts the result to `T`.
    ///
    /// Binding-only: no construction fallback applies, so string keys
    /// with no registered binding always yield `None` — regardless of
    /// any type having a matching name. A bound value of the wrong type
    /// is likewise a silent miss.
    pub fn create_as<T>(&self, key: impl Into<BindingKey>) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.create_any(key)?.downcast::<T>().ok()
    }

    /// Resolves `key` from its binding, type-erased.
    ///
    /// Binding-only, like [`create_as`](Injector::create_as); the caller
    /// downcasts.
    pub fn create_any(&self, key: impl Into<BindingKey>) -> Option<Arc<dyn Any + Send + Sync>> {
        let key = key.into();
        let strategy = self.lookup(&key)?;
        trace!(key = %key, "Resolving from binding");
        Some(strategy.produce(self))
    }

    /// Number of active bindings.
    pub fn binding_count(&self) -> usize {
        self.registry.read().len()
    }

    // ── Internal ──

    /// Clones the strategy out under a short read lock. No lock is held
    /// while a strategy runs, which is what makes reentrant `create`,
    /// `bind` and `remove_binding` calls from inside factories safe.
    fn lookup(&self, key: &BindingKey) -> Option<Strategy> {
        self.registry.read().get(key)
    }

    /// Back-reference hook: tag-before-return, no-op when the type
    /// declines the capability.
    fn tag<T: Injectable>(&self, value: &Arc<T>) {
        if let Some(aware) = value.as_injector_aware() {
            trace!("Handing back-reference to instance");
            aware.set_injector(self);
        }
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injector")
            .field("bindings", &self.binding_count())
            .finish()
    }
}

// ═══════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════

pub mod prelude {
    pub use super::Injector;
    pub use crate::injectable::{Injectable, InjectorAware};
    pub use crate::injectable_default;
    pub use crate::key::BindingKey;
    pub use crate::module::Module;
    pub use crate::registry::Strategy;
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
