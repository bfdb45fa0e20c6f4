//! Type descriptors: identity, declared members, ancestry, generic bindings
//! and the zero-argument constructor of a type.

use crate::Reflect;
use fieldmirror_types::{
    ConstructError, GenericType, MemberDescriptor, MemberScope, TypeKey, TypeRef,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Zero-argument constructor stored on a descriptor.
pub type Constructor = Arc<dyn Fn() -> Result<Box<dyn Reflect>, ConstructError> + Send + Sync>;

/// What sort of type a descriptor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Struct,
    /// A trait family such as `app::Repo`; declares no members.
    Interface,
}

/// Runtime description of a type.
///
/// Ancestry is a finite chain: a descriptor can only point at a parent
/// that was built before it.
#[derive(Clone)]
pub struct TypeDescriptor {
    key: TypeKey,
    kind: TypeKind,
    members: Vec<MemberDescriptor>,
    parent: Option<Arc<TypeDescriptor>>,
    generic_superclass: Option<GenericType>,
    interfaces: Vec<TypeRef>,
    constructor: Option<Constructor>,
}

impl TypeDescriptor {
    /// Starts a descriptor for the type identified by `key`.
    #[must_use]
    pub fn builder(key: TypeKey) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            descriptor: Self {
                key,
                kind: TypeKind::Struct,
                members: Vec::new(),
                parent: None,
                generic_superclass: None,
                interfaces: Vec::new(),
                constructor: None,
            },
        }
    }

    /// Starts a descriptor for the Rust type `T`.
    #[must_use]
    pub fn builder_of<T: ?Sized + 'static>() -> TypeDescriptorBuilder {
        Self::builder(TypeKey::of::<T>())
    }

    /// Descriptor of an interface family, e.g. `app::Repo`.
    #[must_use]
    pub fn interface(key: TypeKey) -> Arc<Self> {
        Self::builder(key).kind(TypeKind::Interface).build()
    }

    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    pub fn simple_name(&self) -> &str {
        self.key.simple_name()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Members declared by this type itself, in declaration order.
    pub fn declared_members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    /// Direct ancestor, if any.
    pub fn parent(&self) -> Option<&TypeDescriptor> {
        self.parent.as_deref()
    }

    /// Shared handle to the direct ancestor, if any.
    pub fn parent_handle(&self) -> Option<Arc<TypeDescriptor>> {
        self.parent.clone()
    }

    /// This type followed by each ancestor, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        std::iter::successors(Some(self), |ty| ty.parent())
    }

    /// Returns true if `key` is this type or one of its ancestors.
    pub fn is_subtype_of(&self, key: &TypeKey) -> bool {
        self.ancestors().any(|ty| ty.key() == key)
    }

    /// The parent with the arguments it was bound with, if it is generic.
    pub fn generic_superclass(&self) -> Option<&GenericType> {
        self.generic_superclass.as_ref()
    }

    /// The parent as a type reference: parameterized when bound with
    /// arguments, plain otherwise.
    pub fn superclass(&self) -> Option<TypeRef> {
        match (&self.generic_superclass, &self.parent) {
            (Some(generic), _) => Some(TypeRef::Parameterized(generic.clone())),
            (None, Some(parent)) => Some(TypeRef::Class(parent.key.clone())),
            (None, None) => None,
        }
    }

    /// Interfaces this type implements directly.
    pub fn interfaces(&self) -> &[TypeRef] {
        &self.interfaces
    }

    pub fn is_constructible(&self) -> bool {
        self.constructor.is_some()
    }

    /// Runs the zero-argument constructor.
    pub fn construct(&self) -> Result<Box<dyn Reflect>, ConstructError> {
        match &self.constructor {
            Some(constructor) => constructor(),
            None => Err(ConstructError::NoConstructor {
                type_name: self.key.clone(),
            }),
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("members", &self.members)
            .field("parent", &self.parent.as_ref().map(|p| p.key()))
            .field("generic_superclass", &self.generic_superclass)
            .field("interfaces", &self.interfaces)
            .field("constructible", &self.constructor.is_some())
            .finish()
    }
}

/// Builder for [`TypeDescriptor`].
///
/// Members added here are declared by the type being built.
#[must_use]
pub struct TypeDescriptorBuilder {
    descriptor: TypeDescriptor,
}

impl TypeDescriptorBuilder {
    pub fn kind(mut self, kind: TypeKind) -> Self {
        self.descriptor.kind = kind;
        self
    }

    /// Declares a mutable instance member of type `F`.
    pub fn field<F: Any>(self, name: impl Into<Cow<'static, str>>) -> Self {
        let member = MemberDescriptor::field::<F>(self.descriptor.key.clone(), name);
        self.member(member)
    }

    /// Declares a mutable class-scoped member of type `F`.
    pub fn class_field<F: Any>(self, name: impl Into<Cow<'static, str>>) -> Self {
        let member = MemberDescriptor::field::<F>(self.descriptor.key.clone(), name)
            .with_scope(MemberScope::Class);
        self.member(member)
    }

    /// Declares a class-scoped constant of type `F`.
    pub fn constant<F: Any>(self, name: impl Into<Cow<'static, str>>) -> Self {
        let member = MemberDescriptor::constant::<F>(self.descriptor.key.clone(), name);
        self.member(member)
    }

    /// Declares an arbitrary member. Its declaring type is taken as given.
    pub fn member(mut self, member: MemberDescriptor) -> Self {
        self.descriptor.members.push(member);
        self
    }

    /// Sets the direct ancestor.
    pub fn extends(mut self, parent: Arc<TypeDescriptor>) -> Self {
        self.descriptor.parent = Some(parent);
        self.descriptor.generic_superclass = None;
        self
    }

    /// Sets the direct ancestor, recording the arguments bound to its raw
    /// generic type at this point of the hierarchy.
    pub fn extends_generic(mut self, parent: Arc<TypeDescriptor>, arguments: Vec<TypeRef>) -> Self {
        let raw = TypeKey::new(parent.key.raw_name().to_owned());
        self.descriptor.generic_superclass = Some(GenericType { raw, arguments });
        self.descriptor.parent = Some(parent);
        self
    }

    /// Adds a directly implemented interface.
    pub fn implements(mut self, interface: impl Into<TypeRef>) -> Self {
        self.descriptor.interfaces.push(interface.into());
        self
    }

    /// Sets the zero-argument constructor.
    pub fn constructor<T, F>(mut self, construct: F) -> Self
    where
        T: Reflect,
        F: Fn() -> Result<T, ConstructError> + Send + Sync + 'static,
    {
        let constructor: Constructor =
            Arc::new(move || construct().map(|value| Box::new(value) as Box<dyn Reflect>));
        self.descriptor.constructor = Some(constructor);
        self
    }

    /// Uses `T::default()` as the zero-argument constructor.
    pub fn default_constructor<T: Reflect + Default>(self) -> Self {
        self.constructor(|| Ok(T::default()))
    }

    pub fn build(self) -> Arc<TypeDescriptor> {
        Arc::new(self.descriptor)
    }
}
