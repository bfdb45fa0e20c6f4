//! Registry of loadable types.

use crate::{Reflected, TypeDescriptor};
use fieldmirror_types::TypeKey;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Descriptors that can be loaded by key or by qualified name.
///
/// The registry is owned by the caller and passed to
/// [`resolve_type_handle`](crate::generics::resolve_type_handle); the
/// resolver itself keeps no state.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<TypeKey, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` and every ancestor in its chain.
    pub fn register<T: Reflected>(&mut self) -> Arc<TypeDescriptor> {
        let descriptor = T::type_descriptor();
        self.register_descriptor(Arc::clone(&descriptor));
        descriptor
    }

    /// Registers a descriptor and every ancestor in its chain. A later
    /// registration under the same key replaces the earlier one.
    pub fn register_descriptor(&mut self, descriptor: Arc<TypeDescriptor>) {
        let mut next = Some(descriptor);
        while let Some(ty) = next {
            next = ty.parent_handle();
            debug!(type_name = %ty.key(), "registering type");
            self.types.insert(ty.key().clone(), ty);
        }
    }

    pub fn get(&self, key: &TypeKey) -> Option<Arc<TypeDescriptor>> {
        self.types.get(key).cloned()
    }

    /// Looks a type up by its qualified name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.types.get(name).cloned()
    }

    pub fn contains(&self, key: &TypeKey) -> bool {
        self.types.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<TypeDescriptor>> {
        self.types.values()
    }
}
