//! Declarative derivation of the reflection capability.

/// Implements [`Reflect`](crate::Reflect) for a struct from its member list.
///
/// The struct must also implement [`Reflected`](crate::Reflected) with a
/// descriptor started by
/// [`TypeDescriptor::builder_of::<Self>()`](crate::TypeDescriptor::builder_of)
/// that declares the same members.
///
/// ```ignore
/// impl_reflect!(Point { x, y });
/// impl_reflect!(Point3D { z } extends base: Point);
/// impl_reflect!(Settings { name } constants { VERSION });
/// ```
///
/// - listed fields are read by cloning and written by downcasting the value
/// - `constants` name associated constants; reads return them, writes are
///   rejected with [`AccessError::Immutable`](crate::AccessError::Immutable)
/// - members declared by any other type go to the `extends` field
#[macro_export]
macro_rules! impl_reflect {
    (
        $ty:ty { $($field:ident),* $(,)? }
        $(constants { $($constant:ident),* $(,)? })?
        $(extends $base:ident : $parent:ty)?
    ) => {
        impl $crate::Reflect for $ty {
            fn descriptor(&self) -> ::std::sync::Arc<$crate::TypeDescriptor> {
                <Self as $crate::Reflected>::type_descriptor()
            }

            #[allow(unreachable_code)]
            fn read_member(
                &self,
                member: &$crate::MemberDescriptor,
            ) -> ::std::result::Result<$crate::Value, $crate::AccessError> {
                if *member.declaring_type() == $crate::TypeKey::of::<Self>() {
                    match member.name() {
                        $(stringify!($field) => {
                            return Ok($crate::Value::new(::std::clone::Clone::clone(&self.$field)));
                        })*
                        $($(stringify!($constant) => {
                            return Ok($crate::Value::new(Self::$constant));
                        })*)?
                        _ => {}
                    }
                }
                $(return <$parent as $crate::Reflect>::read_member(&self.$base, member);)?
                Err($crate::AccessError::unknown($crate::TypeKey::of::<Self>(), member))
            }

            #[allow(unreachable_code, unused_variables)]
            fn write_member(
                &mut self,
                member: &$crate::MemberDescriptor,
                value: $crate::Value,
            ) -> ::std::result::Result<(), $crate::AccessError> {
                if *member.declaring_type() == $crate::TypeKey::of::<Self>() {
                    match member.name() {
                        $(stringify!($field) => {
                            self.$field = value.take(member)?;
                            return Ok(());
                        })*
                        $($(stringify!($constant) => {
                            return Err($crate::AccessError::immutable(member));
                        })*)?
                        _ => {}
                    }
                }
                $(return <$parent as $crate::Reflect>::write_member(&mut self.$base, member, value);)?
                Err($crate::AccessError::unknown($crate::TypeKey::of::<Self>(), member))
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
                self
            }
        }
    };
}
