//! Dynamic objects backed by an insertion-ordered descriptor table.

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::descriptor::PropertyDescriptor;

/// An object whose named properties carry full descriptor metadata.
///
/// Property enumeration yields insertion order, and redefining an existing
/// property keeps its original position. There is no prototype link: every
/// property on a `PropertyObject` is an own property.
#[derive(Debug, Default, PartialEq)]
pub struct PropertyObject {
    properties: IndexMap<String, PropertyDescriptor>,
}

impl PropertyObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `descriptor` under `name`, replacing any existing descriptor
    /// for that name.
    pub fn define_property(&mut self, name: impl Into<String>, descriptor: PropertyDescriptor) {
        self.properties.insert(name.into(), descriptor);
    }

    pub fn has_own_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// All own property names, enumerable or not, in insertion order.
    pub fn own_property_names(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }

    pub fn own_property_descriptor(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }

    /// Iterate `(name, descriptor)` pairs in insertion order.
    pub fn own_properties(&self) -> impl Iterator<Item = (&String, &PropertyDescriptor)> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Read the current value of `name`: the stored value for data
    /// properties, the getter's result for accessor properties (`Null` when
    /// there is no getter), `None` when the property does not exist.
    pub fn get(&self, name: &str) -> Option<Value> {
        let descriptor = self.properties.get(name)?;
        Some(self.evaluate(descriptor))
    }

    /// Write `value` to `name`. Writes through setters, silently ignores
    /// non-writable data properties and setter-less accessors, and defines a
    /// fresh data property when the name is absent.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.properties.get(name) {
            Some(PropertyDescriptor::Data { writable: true, .. }) => {
                if let Some(PropertyDescriptor::Data { value: slot, .. }) = self.properties.get_mut(name) {
                    *slot = value;
                }
            }
            Some(PropertyDescriptor::Data { writable: false, .. }) => {}
            Some(PropertyDescriptor::Accessor { set: Some(setter), .. }) => {
                let setter = setter.clone();
                setter.call(self, value);
            }
            Some(PropertyDescriptor::Accessor { set: None, .. }) => {}
            None => {
                self.properties.insert(name.to_string(), PropertyDescriptor::data(value));
            }
        }
    }

    /// Build an object from a JSON object value; every entry becomes a
    /// writable, enumerable, configurable data property. `None` for
    /// non-object JSON.
    pub fn from_json(value: &Value) -> Option<Self> {
        value.as_object().map(|map| {
            let mut object = Self::new();
            for (name, value) in map {
                object.define_property(name.clone(), PropertyDescriptor::data(value.clone()));
            }
            object
        })
    }

    /// The JSON view of this object: enumerable properties only, accessor
    /// properties evaluated through their getters.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (name, descriptor) in &self.properties {
            if descriptor.enumerable() {
                map.insert(name.clone(), self.evaluate(descriptor));
            }
        }
        Value::Object(map)
    }

    fn evaluate(&self, descriptor: &PropertyDescriptor) -> Value {
        match descriptor {
            PropertyDescriptor::Data { value, .. } => value.clone(),
            PropertyDescriptor::Accessor { get: Some(getter), .. } => getter.call(self),
            PropertyDescriptor::Accessor { get: None, .. } => Value::Null,
        }
    }
}

impl From<serde_json::Map<String, Value>> for PropertyObject {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        let mut object = Self::new();
        for (name, value) in map {
            object.define_property(name, PropertyDescriptor::data(value));
        }
        object
    }
}

impl Serialize for PropertyObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let visible = self.properties.values().filter(|d| d.enumerable()).count();
        let mut map = serializer.serialize_map(Some(visible))?;
        for (name, descriptor) in &self.properties {
            if descriptor.enumerable() {
                map.serialize_entry(name, &self.evaluate(descriptor))?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = serde_json::Map::deserialize(deserializer)?;
        Ok(Self::from(map))
    }
}
