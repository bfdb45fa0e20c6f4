//! Errors raised by the reflection capability itself.

use crate::{MemberDescriptor, TypeKey};
use thiserror::Error;

/// A member read or write was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The receiver has no member with this name and declaring type.
    #[error("{type_name} has no member `{member}` declared by {declaring_type}")]
    UnknownMember {
        type_name: TypeKey,
        member: String,
        declaring_type: TypeKey,
    },

    /// The written value is not of the member's declared type.
    #[error("member `{member}` expects {expected}, got {found}")]
    TypeMismatch {
        member: String,
        expected: TypeKey,
        found: TypeKey,
    },

    /// The member is a constant.
    #[error("member `{member}` of {declaring_type} is a constant")]
    Immutable {
        member: String,
        declaring_type: TypeKey,
    },

    /// The type refused the access.
    #[error("access to member `{member}` denied: {reason}")]
    Denied { member: String, reason: String },
}

impl AccessError {
    #[must_use]
    pub fn unknown(type_name: TypeKey, member: &MemberDescriptor) -> Self {
        Self::UnknownMember {
            type_name,
            member: member.name().to_owned(),
            declaring_type: member.declaring_type().clone(),
        }
    }

    #[must_use]
    pub fn immutable(member: &MemberDescriptor) -> Self {
        Self::Immutable {
            member: member.name().to_owned(),
            declaring_type: member.declaring_type().clone(),
        }
    }

    #[must_use]
    pub fn denied(member: &MemberDescriptor, reason: impl Into<String>) -> Self {
        Self::Denied {
            member: member.name().to_owned(),
            reason: reason.into(),
        }
    }
}

/// A zero-argument construction did not produce an instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    /// The type declares no zero-argument constructor.
    #[error("{type_name} has no zero-argument constructor")]
    NoConstructor { type_name: TypeKey },

    /// The constructor ran and failed.
    #[error("constructor of {type_name} failed: {reason}")]
    Failed { type_name: TypeKey, reason: String },

    /// The constructor produced an instance of another type.
    #[error("constructor of {expected} produced {found}")]
    WrongType { expected: TypeKey, found: TypeKey },
}

impl ConstructError {
    #[must_use]
    pub fn failed(type_name: TypeKey, reason: impl Into<String>) -> Self {
        Self::Failed {
            type_name,
            reason: reason.into(),
        }
    }
}
