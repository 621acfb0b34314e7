//! Construction capabilities.
//!
//! [`Injectable`] is the self-constructing capability: a type that can
//! build itself given the injector, used as the resolution fallback when
//! no binding covers the type's key. [`InjectorAware`] is the optional
//! back-reference hook handed to freshly resolved instances.

use crate::injector::Injector;

/// Self-constructing capability.
///
/// A type implementing `Injectable` can be resolved without any binding
/// having been registered for it: the resolver calls
/// [`inject`](Injectable::inject) with the injector, and the constructor
/// may pull its own dependencies through it — reentrant `create` calls
/// on the same injector are permitted and expected. Avoiding infinite
/// construction cycles is the implementor's responsibility; the resolver
/// does not detect them.
///
/// An explicit binding always takes precedence: `inject` is never called
/// for a key that has any binding, factory or instance.
///
/// For types whose fallback is plain zero-argument construction, use
/// [`injectable_default!`](crate::injectable_default) instead of writing
/// the impl by hand.
///
/// # Examples
/// ```
/// use rabt_container::prelude::*;
/// use std::sync::Arc;
///
/// struct Repository {
///     url: Arc<String>,
/// }
///
/// impl Injectable for Repository {
///     fn inject(injector: &Injector) -> Self {
///         let url = injector
///             .create_as::<String>("database_url")
///             .unwrap_or_else(|| Arc::new(String::from("sqlite::memory:")));
///         Repository { url }
///     }
/// }
///
/// let injector = Injector::new();
/// injector.bind_instance("database_url", String::from("postgres://localhost"));
///
/// let repo = injector.create::<Repository>().unwrap();
/// assert_eq!(*repo.url, "postgres://localhost");
/// ```
pub trait Injectable: Send + Sync + Sized + 'static {
    /// Builds an instance, pulling dependencies from `injector`.
    fn inject(injector: &Injector) -> Self;

    /// Back-reference capability probe.
    ///
    /// The resolver calls this on every instance it is about to return
    /// and, when the answer is `Some`, hands the instance the injector
    /// that created it. The default declines; override it together with
    /// an [`InjectorAware`] impl to opt in.
    fn as_injector_aware(&self) -> Option<&dyn InjectorAware> {
        None
    }
}

/// Back-reference hook for resolved instances.
///
/// Called with the creating injector before the instance is returned
/// from `create`. Implementors need interior mutability to store the
/// handle (the injector is cheap to clone), and should tolerate being
/// called more than once — once per resolution of a shared instance.
///
/// # Examples
/// ```
/// use rabt_container::prelude::*;
/// use once_cell::sync::OnceCell;
///
/// #[derive(Default)]
/// struct Tracked {
///     injector: OnceCell<Injector>,
/// }
///
/// impl Injectable for Tracked {
///     fn inject(_: &Injector) -> Self {
///         Tracked::default()
///     }
///
///     fn as_injector_aware(&self) -> Option<&dyn InjectorAware> {
///         Some(self)
///     }
/// }
///
/// impl InjectorAware for Tracked {
///     fn set_injector(&self, injector: &Injector) {
///         let _ = self.injector.set(injector.clone());
///     }
/// }
///
/// let injector = Injector::new();
/// let tracked = injector.create::<Tracked>().unwrap();
/// assert!(tracked.injector.get().is_some());
/// ```
pub trait InjectorAware: Send + Sync {
    /// Receives the injector that produced this instance.
    fn set_injector(&self, injector: &Injector);
}

/// Implements [`Injectable`] for default-constructible types.
///
/// This is the zero-argument construction fallback: resolution of an
/// unbound key falls back to `Default::default()`.
///
/// # Examples
/// ```
/// use rabt_container::prelude::*;
///
/// #[derive(Default)]
/// struct Widget {
///     label: String,
/// }
///
/// rabt_container::injectable_default!(Widget);
///
/// let injector = Injector::new();
/// let widget = injector.create::<Widget>().unwrap();
/// assert_eq!(widget.label, "");
/// ```
#[macro_export]
macro_rules! injectable_default {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::injectable::Injectable for $ty {
                fn inject(_: &$crate::injector::Injector) -> Self {
                    <$ty as ::core::default::Default>::default()
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Widget {
        size: u32,
    }

    injectable_default!(Widget);

    #[test]
    fn default_macro_delegates_to_default() {
        let injector = Injector::new();
        let widget = Widget::inject(&injector);
        assert_eq!(widget.size, 0);
    }

    #[test]
    fn aware_probe_declines_by_default() {
        let injector = Injector::new();
        let widget = Widget::inject(&injector);
        assert!(widget.as_injector_aware().is_none());
    }
}
