//! Core container implementation for Rabt.

pub mod injectable;
pub mod injector;
pub mod key;
pub mod module;
pub mod registry;

pub use injectable::{Injectable, InjectorAware};
pub use injector::{Injector, prelude};
pub use key::BindingKey;
pub use module::Module;
pub use registry::{FactoryFn, Strategy};
