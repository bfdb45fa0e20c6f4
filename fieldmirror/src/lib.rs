//! Structural member matching and field copying for fieldmirror.
//!
//! Types opt in through the [`Reflect`] capability, which gives member-level
//! access plus a [`TypeDescriptor`]. On top of it this crate provides:
//! - [`members`]: enumerate a type's members up its ancestor chain and
//!   match members by name and declared type
//! - [`copy`]: create-and-copy into a fresh instance, or copy into an
//!   existing instance of the same type or a subtype
//! - [`generics`]: recover type arguments bound to a generic interface or
//!   generic superclass, and resolve type references through a
//!   [`TypeRegistry`]
//! - [`schema`]: serializable snapshots of descriptors for diagnostics
//!
//! [`impl_reflect!`] derives the capability for plain structs.
//!
//! Every operation is a single synchronous pass over descriptors built on
//! demand; nothing is cached between calls.

pub mod copy;
mod descriptor;
mod error;
pub mod generics;
mod macros;
pub mod members;
mod reflect;
mod registry;
pub mod schema;

pub use copy::{copy_create, copy_create_dyn, copy_fields};
pub use descriptor::{Constructor, TypeDescriptor, TypeDescriptorBuilder, TypeKind};
pub use error::{CopyError, ResolveError, Result};
pub use fieldmirror_types::{
    AccessError, ConstructError, GenericType, MemberDescriptor, MemberScope, Mutability, TypeKey,
    TypeRef, Value,
};
pub use generics::{
    interface_type_arguments, interface_type_arguments_by_name, resolve_type_handle,
    superclass_type_arguments, type_class_name,
};
pub use members::{enumerate_members, find_match};
pub use reflect::{Reflect, Reflected};
pub use registry::TypeRegistry;
pub use schema::TypeSchema;
