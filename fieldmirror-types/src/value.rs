//! Type-erased member values.

use crate::{AccessError, MemberDescriptor, TypeKey};
use std::any::Any;
use std::fmt;

/// An owned member value read from one instance and written into another.
///
/// Reading a member clones the field, so reference-counted members alias
/// the same allocation on both sides while plain values are copied.
pub struct Value {
    type_key: TypeKey,
    inner: Box<dyn Any>,
}

impl Value {
    /// Wraps a value.
    #[must_use]
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            type_key: TypeKey::of::<T>(),
            inner: Box::new(value),
        }
    }

    /// Key of the wrapped value's type.
    #[must_use]
    pub fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Unwraps the value, handing it back unchanged if it is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, Value> {
        let Self { type_key, inner } = self;
        match inner.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(inner) => Err(Self { type_key, inner }),
        }
    }

    /// Unwraps the value for a write into `member`.
    pub fn take<T: Any>(self, member: &MemberDescriptor) -> Result<T, AccessError> {
        self.downcast::<T>().map_err(|rejected| AccessError::TypeMismatch {
            member: member.name().to_owned(),
            expected: TypeKey::of::<T>(),
            found: rejected.type_key,
        })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type", &self.type_key.as_str())
            .finish_non_exhaustive()
    }
}
