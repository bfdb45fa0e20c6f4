//! Instance copying.
//!
//! Two entry points share the enumerator and matcher:
//! - create-and-copy builds a fresh target through its zero-argument
//!   constructor and fills every member that has a same-named,
//!   same-typed counterpart on the source
//! - copy-into-existing writes every non-constant member of the source
//!   into a target of the same type or a subtype
//!
//! Copies are one level deep. A member value is cloned out of the source,
//! so `Arc`/`Rc` members end up shared and plain values end up duplicated.

use crate::members::{enumerate_members, find_match};
use crate::{CopyError, Reflect, Reflected, Result, TypeDescriptor};
use fieldmirror_types::ConstructError;
use tracing::{debug, warn};

/// Creates a `T` and copies every matching member of `source` into it.
///
/// Members of `T` without a counterpart keep their constructed values; if
/// nothing matches at all the freshly constructed `T` is returned.
pub fn copy_create<T: Reflected>(source: &dyn Reflect) -> Result<T> {
    let target_type = T::type_descriptor();
    let target = copy_create_dyn(source, &target_type)?;
    let found = target.descriptor().key().clone();
    match target.into_any().downcast::<T>() {
        Ok(target) => Ok(*target),
        Err(_) => {
            warn!(expected = %target_type.key(), found = %found, "constructor produced wrong type");
            Err(ConstructError::WrongType {
                expected: target_type.key().clone(),
                found,
            }
            .into())
        }
    }
}

/// Type-erased form of [`copy_create`] for a target known only by its
/// descriptor.
///
/// The constructed instance must report `target_type` as its descriptor;
/// anything else is [`ConstructError::WrongType`] and nothing is copied.
pub fn copy_create_dyn(
    source: &dyn Reflect,
    target_type: &TypeDescriptor,
) -> Result<Box<dyn Reflect>> {
    let mut target = target_type.construct().inspect_err(|e| {
        warn!(type_name = %target_type.key(), error = %e, "cannot construct copy target");
    })?;
    let constructed = target.descriptor();
    if constructed.key() != target_type.key() {
        warn!(
            expected = %target_type.key(),
            found = %constructed.key(),
            "constructor produced wrong type"
        );
        return Err(ConstructError::WrongType {
            expected: target_type.key().clone(),
            found: constructed.key().clone(),
        }
        .into());
    }

    let source_type = source.descriptor();
    let source_members = enumerate_members(&source_type);
    let target_members = enumerate_members(target_type);
    if source_members.is_empty() {
        return Err(CopyError::NoMembers {
            type_name: source_type.key().clone(),
        });
    }
    if target_members.is_empty() {
        return Err(CopyError::NoMembers {
            type_name: target_type.key().clone(),
        });
    }

    let mut copied = 0usize;
    for member in target_members {
        let Some(matched) = find_match(&source_members, member) else {
            continue;
        };
        let value = source.read_member(matched).inspect_err(|e| {
            warn!(member = %matched, error = %e, "source member read rejected");
        })?;
        target.write_member(member, value).inspect_err(|e| {
            warn!(member = %member, error = %e, "target member write rejected");
        })?;
        debug!(member = %member, "copied member");
        copied += 1;
    }

    debug!(
        source = %source_type.key(),
        target = %target_type.key(),
        copied,
        "created copy"
    );
    Ok(target)
}

/// Copies every non-constant member of `source` into `target`.
///
/// `target` must be of `source`'s runtime type or a subtype of it. Copying
/// stops at the first rejected read or write; members copied before that
/// keep their new values.
pub fn copy_fields(source: &dyn Reflect, target: &mut dyn Reflect) -> Result<()> {
    let source_type = source.descriptor();
    let target_type = target.descriptor();
    if !target_type.is_subtype_of(source_type.key()) {
        return Err(CopyError::NotAssignable {
            source_type: source_type.key().clone(),
            target: target_type.key().clone(),
        });
    }

    for member in enumerate_members(&source_type) {
        if member.is_constant() {
            continue;
        }
        let value = source.read_member(member).inspect_err(|e| {
            warn!(member = %member, error = %e, "source member read rejected");
        })?;
        target.write_member(member, value).inspect_err(|e| {
            warn!(member = %member, error = %e, "target member write rejected");
        })?;
        debug!(member = %member, "copied member");
    }
    Ok(())
}
