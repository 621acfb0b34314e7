//! # Rabt — runtime binding registry and resolver
//!
//! A small inversion-of-control container: bind a key (a type identity
//! or a string name) to a creation strategy, and resolve instances on
//! demand. Resolution walks a fixed fallback chain — explicit binding,
//! then self-construction for types that declare it — and misses are
//! `None`, never errors.
//!
//! # Examples
//! ```rust
//! use rabt::prelude::*;
//! use std::sync::Arc;
//!
//! struct Mailer {
//!     sender: Arc<String>,
//! }
//!
//! impl Injectable for Mailer {
//!     fn inject(injector: &Injector) -> Self {
//!         let sender = injector
//!             .create_as::<String>("sender_address")
//!             .unwrap_or_else(|| Arc::new(String::from("noreply@example.com")));
//!         Mailer { sender }
//!     }
//! }
//!
//! struct MailModule;
//!
//! impl Module for MailModule {
//!     fn configure(&self, injector: &Injector) {
//!         injector.bind_instance("sender_address", String::from("team@example.com"));
//!     }
//! }
//!
//! let injector = Injector::with_modules([&MailModule as &dyn Module]);
//!
//! // Self-constructed, pulling the module's binding.
//! let mailer = injector.create::<Mailer>().unwrap();
//! assert_eq!(*mailer.sender, "team@example.com");
//!
//! // An explicit binding always wins over self-construction.
//! injector.bind_factory(BindingKey::of::<Mailer>(), |_| Mailer {
//!     sender: Arc::new(String::from("override@example.com")),
//! });
//! let mailer = injector.create::<Mailer>().unwrap();
//! assert_eq!(*mailer.sender, "override@example.com");
//!
//! // Bindings can be removed; resolution then falls back again.
//! injector.remove_binding(BindingKey::of::<Mailer>());
//! let mailer = injector.create::<Mailer>().unwrap();
//! assert_eq!(*mailer.sender, "team@example.com");
//! ```

pub use rabt_container::*;
