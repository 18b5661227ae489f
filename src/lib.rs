//! Mixin-style property descriptor merging.
//!
//! Provides a dynamic object model with full property descriptors (data or
//! accessor, with enumerable/writable/configurable flags) and a single
//! `merge` operation that copies whole descriptors from a source object onto
//! a destination object, optionally skipping names the destination already
//! owns.

pub mod descriptor;
pub mod error;
pub mod merge;
pub mod object;

pub use descriptor::{Getter, PropertyDescriptor, Setter};
pub use error::MergeError;
pub use merge::merge;
pub use object::PropertyObject;
