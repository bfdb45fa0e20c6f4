//! Core type definitions for fieldmirror.
//!
//! This crate defines the plain metadata that the mapper operates on:
//! - [`TypeKey`]: fully qualified identity of a type
//! - [`TypeRef`] and [`GenericType`]: runtime type references, including
//!   generic types with their bound arguments
//! - [`MemberDescriptor`]: one data member (name, declared type, declaring
//!   type, scope, mutability), independent of any instance
//! - [`Value`]: a type-erased member value moved between instances
//!
//! Behavior (enumeration, matching, copying, resolution) lives in the
//! `fieldmirror` crate.

mod error;
mod key;
mod member;
mod value;

pub use error::{AccessError, ConstructError};
pub use key::{GenericType, TypeKey, TypeRef};
pub use member::{MemberDescriptor, MemberScope, Mutability};
pub use value::Value;
