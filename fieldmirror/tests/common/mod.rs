//! Shared fixture types for fieldmirror tests.

#![allow(dead_code)]

use fieldmirror::{
    impl_reflect, AccessError, ConstructError, GenericType, MemberDescriptor, Reflect, Reflected,
    TypeDescriptor, TypeKey, TypeRef, Value,
};
use std::any::Any;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber once; `RUST_LOG=fieldmirror=debug` shows
/// per-member copy logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ── Point / Point3D ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Reflected for Point {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<i32>("x")
            .field::<i32>("y")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Point { x, y });

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point3D {
    pub base: Point,
    pub z: i32,
}

impl Point3D {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            base: Point { x, y },
            z,
        }
    }
}

impl Reflected for Point3D {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .extends(Point::type_descriptor())
            .field::<i32>("z")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Point3D { z } extends base: Point);

// ── Shadowed members ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labelled {
    pub label: String,
    pub weight: f64,
}

impl Reflected for Labelled {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<String>("label")
            .field::<f64>("weight")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Labelled { label, weight });

/// Declares its own `label`, shadowing the one on `Labelled`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Renamed {
    pub base: Labelled,
    pub label: String,
}

impl Reflected for Renamed {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .extends(Labelled::type_descriptor())
            .field::<String>("label")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Renamed { label } extends base: Labelled);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub label: String,
}

impl Reflected for Tag {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<String>("label")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Tag { label });

/// Same member names as `Point`, different declared types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatPoint {
    pub x: f64,
    pub y: f64,
}

impl Reflected for FloatPoint {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<f64>("x")
            .field::<f64>("y")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(FloatPoint { x, y });

// ── Constants ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub name: String,
}

impl Settings {
    pub const VERSION: u32 = 3;
}

impl Reflected for Settings {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .constant::<u32>("VERSION")
            .field::<String>("name")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Settings { name } constants { VERSION });

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: String,
}

impl Profile {
    pub const VERSION: u32 = 1;
}

impl Reflected for Profile {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .constant::<u32>("VERSION")
            .field::<String>("name")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Profile { name } constants { VERSION });

// ── Construction edge cases ──────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Empty;

impl Reflected for Empty {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Empty {});

/// Declares no zero-argument constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    pub x: i32,
}

impl Reflected for Handle {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>().field::<i32>("x").build()
    }
}

impl_reflect!(Handle { x });

/// Its constructor always fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Faulty {
    pub x: i32,
}

impl Reflected for Faulty {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<i32>("x")
            .constructor(|| {
                Err::<Faulty, _>(ConstructError::failed(
                    TypeKey::of::<Faulty>(),
                    "resource unavailable",
                ))
            })
            .build()
    }
}

impl_reflect!(Faulty { x });

/// Its constructor hands back a `Point`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Liar {
    pub x: i32,
}

impl Reflected for Liar {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<i32>("x")
            .constructor(|| Ok(Point::default()))
            .build()
    }
}

impl_reflect!(Liar { x });

// ── Access rejection ─────────────────────────────────────────────

/// Refuses writes to `secret`. Hand-written to exercise the capability
/// without the macro.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locked {
    pub open: i32,
    pub secret: i32,
    pub after: i32,
}

impl Reflect for Locked {
    fn descriptor(&self) -> Arc<TypeDescriptor> {
        Self::type_descriptor()
    }

    fn read_member(&self, member: &MemberDescriptor) -> Result<Value, AccessError> {
        match member.name() {
            "open" => Ok(Value::new(self.open)),
            "secret" => Ok(Value::new(self.secret)),
            "after" => Ok(Value::new(self.after)),
            _ => Err(AccessError::unknown(TypeKey::of::<Self>(), member)),
        }
    }

    fn write_member(&mut self, member: &MemberDescriptor, value: Value) -> Result<(), AccessError> {
        match member.name() {
            "open" => self.open = value.take(member)?,
            "secret" => return Err(AccessError::denied(member, "sealed")),
            "after" => self.after = value.take(member)?,
            _ => return Err(AccessError::unknown(TypeKey::of::<Self>(), member)),
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl Reflected for Locked {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<i32>("open")
            .field::<i32>("secret")
            .field::<i32>("after")
            .default_constructor::<Self>()
            .build()
    }
}

/// Same members as `Locked`, no restrictions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unlocked {
    pub open: i32,
    pub secret: i32,
    pub after: i32,
}

impl Reflected for Unlocked {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<i32>("open")
            .field::<i32>("secret")
            .field::<i32>("after")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Unlocked { open, secret, after });

// ── Shared references ────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub body: Arc<Vec<u8>>,
    pub revision: u64,
}

impl Reflected for Document {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<Arc<Vec<u8>>>("body")
            .field::<u64>("revision")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Document { body, revision });

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentView {
    pub body: Arc<Vec<u8>>,
}

impl Reflected for DocumentView {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<Arc<Vec<u8>>>("body")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(DocumentView { body });

// ── Generic hierarchy ────────────────────────────────────────────

pub fn repo_interface() -> TypeKey {
    TypeKey::new("fixtures::Repo")
}

/// Its simple name contains "Repo"; must never be mistaken for it.
pub fn repo_admin_interface() -> TypeKey {
    TypeKey::new("fixtures::RepoAdmin")
}

pub fn auditable_interface() -> TypeKey {
    TypeKey::new("fixtures::Auditable")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub name: String,
    pub age: u32,
}

impl Reflected for User {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<String>("name")
            .field::<u32>("age")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(User { name, age });

/// Generic base type; the capability is written by hand because the
/// macro only covers concrete types.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository<T> {
    pub items: Vec<T>,
}

impl<T: Clone + 'static> Reflect for Repository<T> {
    fn descriptor(&self) -> Arc<TypeDescriptor> {
        Self::type_descriptor()
    }

    fn read_member(&self, member: &MemberDescriptor) -> Result<Value, AccessError> {
        if *member.declaring_type() == TypeKey::of::<Self>() && member.name() == "items" {
            return Ok(Value::new(self.items.clone()));
        }
        Err(AccessError::unknown(TypeKey::of::<Self>(), member))
    }

    fn write_member(&mut self, member: &MemberDescriptor, value: Value) -> Result<(), AccessError> {
        if *member.declaring_type() == TypeKey::of::<Self>() && member.name() == "items" {
            self.items = value.take(member)?;
            return Ok(());
        }
        Err(AccessError::unknown(TypeKey::of::<Self>(), member))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl<T: Clone + 'static> Reflected for Repository<T> {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .field::<Vec<T>>("items")
            .constructor(|| Ok(Repository::<T> { items: Vec::new() }))
            .build()
    }
}

/// `UserRepo extends Repository<User> implements RepoAdmin<String>, Repo<User>, Auditable`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRepo {
    pub base: Repository<User>,
    pub table: String,
}

impl Default for UserRepo {
    fn default() -> Self {
        Self {
            base: Repository { items: Vec::new() },
            table: "users".into(),
        }
    }
}

impl Reflected for UserRepo {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .extends_generic(
                Repository::<User>::type_descriptor(),
                vec![TypeRef::of::<User>()],
            )
            .implements(GenericType::new(repo_admin_interface()).with_arg::<String>())
            .implements(GenericType::new(repo_interface()).with_arg::<User>())
            .implements(auditable_interface())
            .field::<String>("table")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(UserRepo { table } extends base: Repository<User>);

/// Extends `Point` without binding any generic arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedPoint {
    pub base: Point,
    pub name: String,
}

impl Reflected for NamedPoint {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .extends(Point::type_descriptor())
            .implements(auditable_interface())
            .field::<String>("name")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(NamedPoint { name } extends base: Point);

/// Inherits `Repo<User>` from `UserRepo` but implements nothing itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminRepo {
    pub base: UserRepo,
    pub level: u8,
}

impl Reflected for AdminRepo {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .extends(UserRepo::type_descriptor())
            .field::<u8>("level")
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(AdminRepo { level } extends base: UserRepo);

// ── Declared types sharing a name ────────────────────────────────

/// Declares `value` as `units::Length`, backed by `f64`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meters {
    pub value: f64,
}

impl Reflected for Meters {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .member(
                MemberDescriptor::new("value", TypeKey::new("units::Length"), TypeKey::of::<Self>())
                    .bound_to::<f64>(),
            )
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Meters { value });

/// Declares `value` as `units::Length` too, backed by `f32`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feet {
    pub value: f32,
}

impl Reflected for Feet {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        TypeDescriptor::builder_of::<Self>()
            .member(
                MemberDescriptor::new("value", TypeKey::new("units::Length"), TypeKey::of::<Self>())
                    .bound_to::<f32>(),
            )
            .default_constructor::<Self>()
            .build()
    }
}

impl_reflect!(Feet { value });
