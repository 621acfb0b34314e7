//! Module trait — a batch of related binding registrations.
//!
//! Modules group related bindings so an injector can be configured in
//! one step at construction time instead of one `bind` call at a time.
//!
//! # Examples
//! ```rust,ignore
//! struct DatabaseModule;
//!
//! impl Module for DatabaseModule {
//!     fn configure(&self, injector: &Injector) {
//!         injector.bind_instance("database_url", String::from("postgres://localhost"));
//!         injector.bind_factory(BindingKey::of::<Pool>(), |i| Pool::connect(i));
//!     }
//! }
//!
//! let injector = Injector::with_modules([&DatabaseModule as &dyn Module]);
//! ```

use crate::injector::Injector;

/// A batch of binding registrations applied at injector construction.
///
/// Each module passed to [`Injector::with_modules`] is invoked exactly
/// once with the new injector, before it is handed to the caller.
pub trait Module: Send + Sync {
    /// Registers this module's bindings into `injector`.
    fn configure(&self, injector: &Injector);

    /// Human-readable name for logging.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
