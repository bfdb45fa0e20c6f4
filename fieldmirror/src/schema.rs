//! Serializable snapshots of type descriptors.

use crate::members::enumerate_members;
use crate::{TypeDescriptor, TypeKind};
use fieldmirror_types::{MemberDescriptor, TypeKey};
use serde::{Deserialize, Serialize};

/// What the copier sees of a type: identity, ancestry, generic bindings
/// and the flattened member list in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSchema {
    pub type_name: TypeKey,
    pub simple_name: String,
    pub kind: TypeKind,
    /// Ancestor keys, nearest first, excluding the type itself.
    pub ancestors: Vec<TypeKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    pub members: Vec<MemberDescriptor>,
    pub constructible: bool,
}

impl TypeSchema {
    pub fn from_descriptor(ty: &TypeDescriptor) -> Self {
        Self {
            type_name: ty.key().clone(),
            simple_name: ty.simple_name().to_owned(),
            kind: ty.kind(),
            ancestors: ty.ancestors().skip(1).map(|a| a.key().clone()).collect(),
            superclass: ty.superclass().map(|s| s.to_string()),
            interfaces: ty.interfaces().iter().map(ToString::to_string).collect(),
            members: enumerate_members(ty).into_iter().cloned().collect(),
            constructible: ty.is_constructible(),
        }
    }

    /// Members that a copy can write (everything except class-scoped
    /// constants).
    pub fn copyable_members(&self) -> impl Iterator<Item = &MemberDescriptor> {
        self.members.iter().filter(|m| !m.is_constant())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
