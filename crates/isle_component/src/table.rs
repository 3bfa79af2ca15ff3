//! Per-kind component tables.
//!
//! A [`Table<T>`] maps entity ids to the latest `T` written for them. The
//! [`Engine`](crate::Engine) keeps tables of different kinds side by side
//! behind the object-safe [`ErasedTable`] trait and recovers the concrete
//! table with a downcast.

use std::any::Any;
use std::collections::HashMap;

use crate::component::Component;
use crate::entity::Id;

/// Storage for every value of one component kind.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: HashMap<Id, T>,
}

impl<T> Table<T> {
    /// Create a new, empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Set or overwrite the value for `id`.
    pub fn insert(&mut self, id: Id, value: T) {
        self.rows.insert(id, value);
    }

    /// Returns the value stored for `id`, if any.
    #[must_use]
    pub fn get(&self, id: Id) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Returns `true` if `id` has a value in this table.
    #[must_use]
    pub fn contains(&self, id: Id) -> bool {
        self.rows.contains_key(&id)
    }

    /// Returns the number of entities holding this kind.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no entity holds this kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over `(id, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> {
        self.rows.iter().map(|(&id, value)| (id, value))
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Object-safe view of a [`Table<T>`] used for type-erased storage.
pub trait ErasedTable: Send + Sync {
    /// Name of the component kind stored in this table.
    fn kind_name(&self) -> &'static str;

    /// Rust type name of the stored values.
    fn rust_type(&self) -> &'static str;

    /// Number of rows.
    fn len(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedTable for Table<T> {
    fn kind_name(&self) -> &'static str {
        T::type_name()
    }

    fn rust_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::IdAllocator;

    #[test]
    fn test_insert_overwrites() {
        let mut alloc = IdAllocator::new();
        let id = alloc.allocate();
        let mut table = Table::new();
        table.insert(id, 1u8);
        table.insert(id, 2u8);
        assert_eq!(table.get(id), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_row_is_none() {
        let mut alloc = IdAllocator::new();
        let present = alloc.allocate();
        let absent = alloc.allocate();
        let mut table = Table::new();
        table.insert(present, "x");
        assert!(table.contains(present));
        assert!(!table.contains(absent));
        assert_eq!(table.get(absent), None);
    }
}
