//! Mixin-style merge of property descriptors from one object onto another.

use log::debug;

use crate::error::MergeError;
use crate::object::PropertyObject;

/// Merge the property descriptors of `src` into `dest`, returning `dest`.
///
/// Every own property of `src` (enumerable or not, data or accessor) is
/// installed onto `dest` as a whole descriptor, in `src`'s insertion order.
/// When `redefine` is `Some(false)`, names `dest` already owns are skipped
/// and their descriptors left untouched; omitted (`None`) defaults to `true`,
/// meaning existing properties are redefined. Properties of `dest` whose
/// names do not appear on `src` are never touched, and `src` itself is never
/// mutated.
///
/// `None` for `dest` or `src` yields [`MergeError::MissingDest`] or
/// [`MergeError::MissingSrc`] before anything is merged.
///
/// ```
/// use propmerge::{merge, PropertyObject};
/// use serde_json::json;
///
/// let mut dest = PropertyObject::from_json(&json!({"a": 1})).unwrap();
/// let src = PropertyObject::from_json(&json!({"a": 2, "b": 3})).unwrap();
///
/// merge(Some(&mut dest), Some(&src), None).unwrap();
/// assert_eq!(dest.to_json(), json!({"a": 2, "b": 3}));
/// ```
pub fn merge<'a>(
    dest: Option<&'a mut PropertyObject>,
    src: Option<&PropertyObject>,
    redefine: Option<bool>,
) -> Result<&'a mut PropertyObject, MergeError> {
    let dest = dest.ok_or(MergeError::MissingDest)?;
    let src = src.ok_or(MergeError::MissingSrc)?;
    let redefine = redefine.unwrap_or(true);

    for (name, descriptor) in src.own_properties() {
        if !redefine && dest.has_own_property(name) {
            debug!("merge: keeping existing property '{}'", name);
            continue;
        }
        dest.define_property(name.clone(), descriptor.clone());
    }

    Ok(dest)
}
