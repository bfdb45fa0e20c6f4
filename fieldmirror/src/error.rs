//! Error types for copying and type resolution.

use fieldmirror_types::{AccessError, ConstructError, TypeKey};
use thiserror::Error;

/// Result type for copy operations.
pub type Result<T> = std::result::Result<T, CopyError>;

/// Why a copy did not happen (or stopped part way).
///
/// "No member matched" is not an error: create-and-copy then returns the
/// freshly constructed target untouched.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The target could not be constructed.
    #[error("construction failed: {0}")]
    Construction(#[from] ConstructError),

    /// A member read or write was rejected. Members copied before the
    /// rejection keep their new values.
    #[error("member access rejected: {0}")]
    Access(#[from] AccessError),

    /// One side of a create-and-copy declares no members in its whole chain.
    #[error("{type_name} declares no members")]
    NoMembers { type_name: TypeKey },

    /// The target is neither the source's type nor a subtype of it.
    #[error("{target} is not assignable from {source_type}")]
    NotAssignable { source_type: TypeKey, target: TypeKey },
}

/// Errors from generic argument resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The runtime type's superclass is missing or not parameterized.
    #[error("superclass of {type_name} is not parameterized")]
    NotParameterized {
        type_name: TypeKey,
        superclass: Option<TypeKey>,
    },
}
