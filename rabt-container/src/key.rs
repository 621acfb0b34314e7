//! Binding identification keys.
//!
//! [`BindingKey`] is the canonical lookup identity for a binding: a
//! string either derived from a type's name or chosen directly by the
//! caller as a free-form namespace tag.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

/// Canonical lookup identity for a binding.
///
/// Two keys are equal iff their canonical string forms are equal. Type
/// keys are derived from the type's fully qualified name, which is
/// stable for the duration of the process; string keys pass through
/// unchanged and are not required to correspond to any real type.
///
/// # Examples
/// ```
/// use rabt_container::key::BindingKey;
///
/// // Type key — derived from the type's canonical name
/// let key = BindingKey::of::<String>();
/// assert_eq!(key.as_str(), "alloc::string::String");
///
/// // String key — free-form namespace
/// let key = BindingKey::from("database_url");
/// assert_eq!(key.as_str(), "database_url");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BindingKey {
    repr: Cow<'static, str>,
}

impl BindingKey {
    /// Creates the key for type `T`.
    ///
    /// Deterministic: the same type always yields the same key within
    /// one process run. Distinct types that happen to render the same
    /// name collide; that is a known limitation, not a checked error.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            repr: Cow::Borrowed(type_name::<T>()),
        }
    }

    /// Returns the canonical string form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.repr
    }
}

impl From<&str> for BindingKey {
    fn from(name: &str) -> Self {
        Self {
            repr: Cow::Owned(name.to_owned()),
        }
    }
}

impl From<String> for BindingKey {
    fn from(name: String) -> Self {
        Self {
            repr: Cow::Owned(name),
        }
    }
}

impl fmt::Debug for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BindingKey({:?})", self.repr)
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MyStruct;

    #[test]
    fn key_of_type() {
        let key = BindingKey::of::<MyStruct>();
        assert!(key.as_str().contains("MyStruct"));
    }

    #[test]
    fn key_of_type_is_deterministic() {
        assert_eq!(BindingKey::of::<String>(), BindingKey::of::<String>());
    }

    #[test]
    fn keys_of_distinct_types_differ() {
        assert_ne!(BindingKey::of::<String>(), BindingKey::of::<i32>());
    }

    #[test]
    fn string_key_passes_through() {
        let key = BindingKey::from("Sholvah!");
        assert_eq!(key.as_str(), "Sholvah!");
        assert_eq!(key, BindingKey::from(String::from("Sholvah!")));
    }

    #[test]
    fn equality_is_purely_textual() {
        // A string key spelled like a type's canonical name IS that
        // type's key: keys are one flat string namespace.
        let by_type = BindingKey::of::<MyStruct>();
        let by_name = BindingKey::from(std::any::type_name::<MyStruct>());
        assert_eq!(by_type, by_name);
    }

    #[test]
    fn key_in_hashmap() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(BindingKey::of::<String>(), "string");
        map.insert(BindingKey::from("greeting"), "greeting");
        assert_eq!(map.get(&BindingKey::of::<String>()), Some(&"string"));
        assert_eq!(map.get(&BindingKey::from("greeting")), Some(&"greeting"));
        assert_eq!(map.get(&BindingKey::of::<i32>()), None);
    }

    #[test]
    fn unsized_type_key() {
        // dyn traits work as keys
        trait MyTrait {}
        let key = BindingKey::of::<dyn MyTrait>();
        assert!(key.as_str().contains("MyTrait"));
    }
}
