//! Generic type argument resolution.
//!
//! Recovers the concrete arguments bound where a generic interface is
//! implemented or a generic superclass is extended, and turns type
//! references back into loadable descriptors.

use crate::{Reflect, ResolveError, TypeDescriptor, TypeRegistry};
use fieldmirror_types::{TypeKey, TypeRef};
use std::sync::Arc;
use tracing::debug;

/// Kind keywords that may prefix a textual type descriptor.
const KIND_PREFIXES: &[&str] = &[
    "struct",
    "enum",
    "union",
    "trait",
    "interface",
    "class",
    "dyn",
    "type",
];

/// Arguments bound to `interface` by the runtime type of `instance`.
///
/// Only interfaces implemented directly by the runtime type are inspected,
/// and they are matched by identity of their raw key. Returns `None` when
/// the interface is not implemented there or is implemented without
/// arguments.
pub fn interface_type_arguments(
    instance: &dyn Reflect,
    interface: &TypeKey,
) -> Option<Vec<TypeRef>> {
    find_interface_arguments(instance, |key| key == interface)
}

/// Same as [`interface_type_arguments`], naming the interface by its
/// qualified name.
pub fn interface_type_arguments_by_name(
    instance: &dyn Reflect,
    interface: &str,
) -> Option<Vec<TypeRef>> {
    find_interface_arguments(instance, |key| key.as_str() == interface)
}

fn find_interface_arguments(
    instance: &dyn Reflect,
    is_target: impl Fn(&TypeKey) -> bool,
) -> Option<Vec<TypeRef>> {
    let ty = instance.descriptor();
    let implemented = ty
        .interfaces()
        .iter()
        .find(|interface| interface.raw_key().is_some_and(&is_target))?;
    let arguments = implemented.type_arguments();
    if arguments.is_none() {
        debug!(
            type_name = %ty.key(),
            interface = %implemented,
            "interface implemented without type arguments"
        );
    }
    arguments.map(<[TypeRef]>::to_vec)
}

/// Arguments bound to the generic superclass of `instance`'s runtime type.
///
/// Callers use this when the hierarchy guarantees a parameterized parent;
/// anything else is [`ResolveError::NotParameterized`].
pub fn superclass_type_arguments(instance: &dyn Reflect) -> Result<Vec<TypeRef>, ResolveError> {
    let ty = instance.descriptor();
    match ty.generic_superclass() {
        Some(generic) if generic.is_parameterized() => Ok(generic.arguments.clone()),
        _ => Err(ResolveError::NotParameterized {
            type_name: ty.key().clone(),
            superclass: ty.parent().map(|parent| parent.key().clone()),
        }),
    }
}

/// Resolves a type reference to a loadable descriptor.
///
/// A concrete reference is looked up directly. Any other form is rendered
/// to its textual descriptor, reduced to a qualified name with
/// [`type_class_name`] and looked up by that name. Unknown or unparseable
/// references resolve to `None`.
pub fn resolve_type_handle(registry: &TypeRegistry, ty: &TypeRef) -> Option<Arc<TypeDescriptor>> {
    if let TypeRef::Class(key) = ty {
        let found = registry.get(key);
        if found.is_none() {
            debug!(type_name = %key, "type is not registered");
        }
        return found;
    }
    let Some(name) = type_class_name(ty) else {
        debug!(descriptor = %ty, "no type name in descriptor");
        return None;
    };
    let found = registry.get_by_name(&name);
    if found.is_none() {
        debug!(descriptor = %ty, type_name = %name, "type is not registered");
    }
    found
}

/// Qualified name token of a type reference's textual descriptor.
///
/// `struct app::User` and `app::User` both give `app::User`; generic
/// arguments are dropped, so `app::Repo<app::User>` gives `app::Repo`.
pub fn type_class_name(ty: &TypeRef) -> Option<String> {
    let text = ty.to_string();
    let mut tokens = text.split_whitespace();
    let first = tokens.next()?;
    let token = if KIND_PREFIXES.contains(&first) {
        tokens.next()?
    } else {
        first
    };
    let name = token.split('<').next().unwrap_or(token).trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}
