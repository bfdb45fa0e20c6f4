//! The reflection capability.

use crate::TypeDescriptor;
use fieldmirror_types::{AccessError, MemberDescriptor, Value};
use std::any::Any;
use std::sync::Arc;

/// Member-level access to an instance.
///
/// Members declared by an ancestor type are reached by delegating to the
/// embedded ancestor value. Implementations are usually generated with
/// [`impl_reflect!`](crate::impl_reflect).
pub trait Reflect: Any {
    /// Descriptor of this instance's runtime type.
    fn descriptor(&self) -> Arc<TypeDescriptor>;

    /// Reads a member, cloning its value.
    ///
    /// Returns [`AccessError::UnknownMember`] if neither this type nor any
    /// ancestor declares `member`.
    fn read_member(&self, member: &MemberDescriptor) -> Result<Value, AccessError>;

    /// Writes a member.
    ///
    /// Returns [`AccessError::TypeMismatch`] if `value` is not of the
    /// member's declared type and [`AccessError::Immutable`] for constants.
    fn write_member(&mut self, member: &MemberDescriptor, value: Value)
        -> Result<(), AccessError>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Static side of [`Reflect`]: the descriptor of a type without an instance.
pub trait Reflected: Reflect + Sized {
    fn type_descriptor() -> Arc<TypeDescriptor>;
}

impl dyn Reflect {
    /// Returns true if the runtime type is `T`.
    pub fn is<T: Reflect>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}
