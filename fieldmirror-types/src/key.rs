//! Type identities and runtime type references.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Fully qualified identity of a type, e.g. `geo::Point`.
///
/// Two keys are the same type iff their qualified names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeKey(Cow<'static, str>);

impl TypeKey {
    /// Key of a Rust type, derived from its qualified type name.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<T>()))
    }

    /// Key for a type that has no Rust type of its own, such as the raw
    /// family `app::Repo` of a generic trait.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the qualified name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Qualified name with any generic argument list removed.
    #[must_use]
    pub fn raw_name(&self) -> &str {
        match self.0.find('<') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Last path segment of the raw name (`geo::Point<i32>` -> `Point`).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        let raw = self.raw_name();
        raw.rsplit("::").next().unwrap_or(raw)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TypeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A generic type together with the arguments bound at one point of a
/// hierarchy, e.g. `app::Repo<app::User>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericType {
    pub raw: TypeKey,
    pub arguments: Vec<TypeRef>,
}

impl GenericType {
    /// Creates a generic type reference with no arguments bound yet.
    #[must_use]
    pub fn new(raw: TypeKey) -> Self {
        Self {
            raw,
            arguments: Vec::new(),
        }
    }

    /// Binds the next argument to the Rust type `T`.
    #[must_use]
    pub fn with_arg<T: ?Sized + 'static>(self) -> Self {
        self.with_argument(TypeRef::of::<T>())
    }

    /// Binds the next argument.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<TypeRef>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Returns true if at least one argument is bound.
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        !self.arguments.is_empty()
    }
}

impl fmt::Display for GenericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)?;
        if self.arguments.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(">")
    }
}

/// A runtime type reference.
///
/// `Display` renders the textual descriptor that
/// `fieldmirror::generics::type_class_name` parses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeRef {
    /// A concrete, loadable type.
    Class(TypeKey),
    /// A generic type with bound arguments.
    Parameterized(GenericType),
    /// An unbound type parameter such as `T`.
    Variable(String),
    /// An opaque textual descriptor, e.g. `struct app::User`.
    Descriptor(String),
}

impl TypeRef {
    /// Reference to the concrete Rust type `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Class(TypeKey::of::<T>())
    }

    /// Reference to an unbound type parameter.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Reference given only by its textual descriptor.
    #[must_use]
    pub fn descriptor(text: impl Into<String>) -> Self {
        Self::Descriptor(text.into())
    }

    /// The key of a concrete reference.
    #[must_use]
    pub fn as_class(&self) -> Option<&TypeKey> {
        match self {
            Self::Class(key) => Some(key),
            _ => None,
        }
    }

    /// Identity of the referenced type, ignoring bound arguments.
    #[must_use]
    pub fn raw_key(&self) -> Option<&TypeKey> {
        match self {
            Self::Class(key) => Some(key),
            Self::Parameterized(generic) => Some(&generic.raw),
            Self::Variable(_) | Self::Descriptor(_) => None,
        }
    }

    /// Bound arguments of a parameterized reference.
    #[must_use]
    pub fn type_arguments(&self) -> Option<&[TypeRef]> {
        match self {
            Self::Parameterized(generic) if generic.is_parameterized() => {
                Some(&generic.arguments)
            }
            _ => None,
        }
    }
}

impl From<TypeKey> for TypeRef {
    fn from(key: TypeKey) -> Self {
        Self::Class(key)
    }
}

impl From<GenericType> for TypeRef {
    fn from(generic: GenericType) -> Self {
        Self::Parameterized(generic)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(key) => write!(f, "{key}"),
            Self::Parameterized(generic) => write!(f, "{generic}"),
            Self::Variable(name) | Self::Descriptor(name) => f.write_str(name),
        }
    }
}
