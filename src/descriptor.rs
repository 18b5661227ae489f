//! Property descriptors: the metadata record behind a single named property.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::object::PropertyObject;

/// Shared getter handle for accessor properties.
///
/// Cloning shares the underlying function; equality is identity-based, so a
/// copied accessor property compares equal to its original but not to a
/// freshly constructed getter with the same body.
#[derive(Clone)]
pub struct Getter(Arc<dyn Fn(&PropertyObject) -> Value + Send + Sync>);

impl Getter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&PropertyObject) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the getter against the object that owns the property.
    pub fn call(&self, object: &PropertyObject) -> Value {
        (self.0)(object)
    }
}

impl PartialEq for Getter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[getter]")
    }
}

/// Shared setter handle for accessor properties. Same sharing and equality
/// rules as [`Getter`].
#[derive(Clone)]
pub struct Setter(Arc<dyn Fn(&mut PropertyObject, Value) + Send + Sync>);

impl Setter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut PropertyObject, Value) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the setter against the object that owns the property.
    pub fn call(&self, object: &mut PropertyObject, value: Value) {
        (self.0)(object, value)
    }
}

impl PartialEq for Setter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Setter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[setter]")
    }
}

/// A full property descriptor: either a plain data slot or a getter/setter
/// pair, plus the flags that control enumeration and redefinition.
///
/// Descriptors are treated as opaque atomic units by the merger: they are
/// relocated whole, never edited field by field.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyDescriptor {
    Data {
        value: Value,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    Accessor {
        get: Option<Getter>,
        set: Option<Setter>,
        enumerable: bool,
        configurable: bool,
    },
}

impl PropertyDescriptor {
    /// A writable, enumerable, configurable data descriptor, the flags a
    /// plain object-literal property gets.
    pub fn data(value: impl Into<Value>) -> Self {
        Self::Data {
            value: value.into(),
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// A data descriptor with explicit flags.
    pub fn data_with(value: impl Into<Value>, writable: bool, enumerable: bool, configurable: bool) -> Self {
        Self::Data {
            value: value.into(),
            writable,
            enumerable,
            configurable,
        }
    }

    /// An enumerable, configurable accessor descriptor.
    pub fn accessor(get: Option<Getter>, set: Option<Setter>) -> Self {
        Self::Accessor {
            get,
            set,
            enumerable: true,
            configurable: true,
        }
    }

    /// An accessor descriptor with explicit flags.
    pub fn accessor_with(get: Option<Getter>, set: Option<Setter>, enumerable: bool, configurable: bool) -> Self {
        Self::Accessor {
            get,
            set,
            enumerable,
            configurable,
        }
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self, Self::Accessor { .. })
    }

    pub fn enumerable(&self) -> bool {
        match self {
            Self::Data { enumerable, .. } | Self::Accessor { enumerable, .. } => *enumerable,
        }
    }

    pub fn configurable(&self) -> bool {
        match self {
            Self::Data { configurable, .. } | Self::Accessor { configurable, .. } => *configurable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_defaults_all_flags_true() {
        let descriptor = PropertyDescriptor::data(json!(42));
        assert!(!descriptor.is_accessor());
        assert!(descriptor.enumerable());
        assert!(descriptor.configurable());
        match descriptor {
            PropertyDescriptor::Data { value, writable, .. } => {
                assert_eq!(value, json!(42));
                assert!(writable);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_data_with_explicit_flags() {
        let descriptor = PropertyDescriptor::data_with(json!("x"), false, false, true);
        assert!(!descriptor.enumerable());
        assert!(descriptor.configurable());
        match descriptor {
            PropertyDescriptor::Data { writable, .. } => assert!(!writable),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_accessor_defaults() {
        let descriptor = PropertyDescriptor::accessor(Some(Getter::new(|_| json!(1))), None);
        assert!(descriptor.is_accessor());
        assert!(descriptor.enumerable());
        assert!(descriptor.configurable());
    }

    #[test]
    fn test_getter_clone_compares_equal() {
        let getter = Getter::new(|_| json!("hello"));
        assert_eq!(getter, getter.clone());
    }

    #[test]
    fn test_distinct_getters_compare_unequal() {
        let a = Getter::new(|_| json!("same body"));
        let b = Getter::new(|_| json!("same body"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_cloned_descriptor_shares_accessors() {
        let original = PropertyDescriptor::accessor(
            Some(Getter::new(|_| json!(7))),
            Some(Setter::new(|_, _| {})),
        );
        let copy = original.clone();
        assert_eq!(original, copy);
    }

    #[test]
    fn test_data_descriptors_compare_by_value_and_flags() {
        assert_eq!(PropertyDescriptor::data(json!(1)), PropertyDescriptor::data(json!(1)));
        assert_ne!(
            PropertyDescriptor::data(json!(1)),
            PropertyDescriptor::data_with(json!(1), true, false, true)
        );
    }
}
