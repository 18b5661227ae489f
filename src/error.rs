//! Error type for the merge operation.

use thiserror::Error;

/// The two invalid-argument failures `merge` can raise. Validation happens
/// before any property is touched, so a failed call never partially mutates
/// the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("argument dest is required")]
    MissingDest,
    #[error("argument src is required")]
    MissingSrc,
}
