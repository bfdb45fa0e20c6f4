//! Member descriptors.

use crate::TypeKey;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;

/// Whether a member belongs to each instance or to the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberScope {
    #[default]
    Instance,
    Class,
}

/// Whether a member can be written after initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutability {
    #[default]
    Mutable,
    Constant,
}

/// Metadata for one data member of a type, independent of any instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberDescriptor {
    name: Cow<'static, str>,
    declared_type: TypeKey,
    declaring_type: TypeKey,
    scope: MemberScope,
    mutability: Mutability,
    /// Rust identity of the declared type, when known. Type names are not
    /// unique, so matching compares this as well. Not serialized.
    #[serde(skip)]
    declared_type_id: Option<TypeId>,
}

impl MemberDescriptor {
    /// Creates a mutable instance member.
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        declared_type: TypeKey,
        declaring_type: TypeKey,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type,
            declaring_type,
            scope: MemberScope::Instance,
            mutability: Mutability::Mutable,
            declared_type_id: None,
        }
    }

    /// Mutable instance member whose declared type is `F`.
    #[must_use]
    pub fn field<F: Any>(declaring_type: TypeKey, name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, TypeKey::of::<F>(), declaring_type).bound_to::<F>()
    }

    /// Class-scoped constant whose declared type is `F`.
    #[must_use]
    pub fn constant<F: Any>(declaring_type: TypeKey, name: impl Into<Cow<'static, str>>) -> Self {
        Self::field::<F>(declaring_type, name)
            .with_scope(MemberScope::Class)
            .with_mutability(Mutability::Constant)
    }

    /// Records `F` as the Rust type behind the declared type key.
    #[must_use]
    pub fn bound_to<F: Any>(mut self) -> Self {
        self.declared_type_id = Some(TypeId::of::<F>());
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: MemberScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = mutability;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn declared_type(&self) -> &TypeKey {
        &self.declared_type
    }

    #[must_use]
    pub fn declaring_type(&self) -> &TypeKey {
        &self.declaring_type
    }

    #[must_use]
    pub fn declared_type_id(&self) -> Option<TypeId> {
        self.declared_type_id
    }

    #[must_use]
    pub fn scope(&self) -> MemberScope {
        self.scope
    }

    #[must_use]
    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// True for class-scoped constants, which are never copied.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.scope == MemberScope::Class && self.mutability == Mutability::Constant
    }

    /// Two members are the same field for copying iff name and declared
    /// type are equal. Declaring type is ignored. When both sides know the
    /// Rust type behind the declared type, those must agree too.
    #[must_use]
    pub fn same_field(&self, other: &MemberDescriptor) -> bool {
        let same_type_id = match (self.declared_type_id, other.declared_type_id) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };
        self.name == other.name && self.declared_type == other.declared_type && same_type_id
    }
}

impl fmt::Display for MemberDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}: {}",
            self.declaring_type, self.name, self.declared_type
        )
    }
}
