//! The component registry.
//!
//! The [`Engine`] owns the id allocator and one [`Table`] per component kind.
//! Tables are created lazily on first write and keyed by
//! [`ComponentTypeId`], so component kinds need no registration.
//!
//! ## Iteration
//!
//! Two iteration forms exist, one per mutation policy:
//!
//! - [`Engine::each`] snapshots the ids of a kind before the first visit and
//!   hands the callback `&mut Engine`. Writes of any kind are allowed from
//!   inside the callback, including the kind being visited. The visit set is
//!   fixed when iteration starts; each value is read at the moment its entity
//!   is visited.
//! - [`Engine::iter`] borrows the table. The borrow checker rejects any write
//!   while the iterator is alive.
//!
//! The registry is single-threaded: every mutating method takes `&mut self`.

use std::collections::HashMap;

use tracing::debug;

use crate::component::{Component, ComponentTypeId};
use crate::entity::{Id, IdAllocator};
use crate::table::{ErasedTable, Table};

/// Type-erased per-kind storage plus id allocation.
#[derive(Default)]
pub struct Engine {
    /// Entity id allocator.
    allocator: IdAllocator,
    /// One table per component kind.
    tables: HashMap<ComponentTypeId, Box<dyn ErasedTable>>,
}

impl Engine {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh, never-before-issued id.
    pub fn new_id(&mut self) -> Id {
        self.allocator.allocate()
    }

    /// Returns the number of ids issued so far.
    #[must_use]
    pub fn entity_count(&self) -> u64 {
        self.allocator.count()
    }

    /// Set or overwrite the `T` component of `id`.
    pub fn write<T: Component>(&mut self, id: Id, value: T) {
        self.table_mut::<T>().insert(id, value);
    }

    /// Returns a copy of the `T` component of `id`, or `None` if the entity
    /// has no component of that kind.
    #[must_use]
    pub fn read<T: Component>(&self, id: Id) -> Option<T> {
        self.table::<T>()?.get(id).cloned()
    }

    /// Returns `true` if `id` holds a `T` component.
    #[must_use]
    pub fn contains<T: Component>(&self, id: Id) -> bool {
        self.table::<T>().is_some_and(|table| table.contains(id))
    }

    /// Returns the number of entities holding a `T` component.
    #[must_use]
    pub fn count<T: Component>(&self) -> usize {
        self.table::<T>().map_or(0, Table::len)
    }

    /// Returns the ids currently holding a `T` component, in unspecified
    /// order.
    #[must_use]
    pub fn ids<T: Component>(&self) -> Vec<Id> {
        self.table::<T>()
            .map(|table| table.iter().map(|(id, _)| id).collect())
            .unwrap_or_default()
    }

    /// Visit every entity holding a `T` component exactly once.
    ///
    /// The id set is snapshotted first. `visit` receives the registry back and
    /// may write any component, including other entities' `T`. Entities that
    /// gain a `T` during the pass are not visited.
    pub fn each<T: Component>(&mut self, mut visit: impl FnMut(&mut Engine, Id, T)) {
        for id in self.ids::<T>() {
            if let Some(value) = self.read::<T>(id) {
                visit(self, id, value);
            }
        }
    }

    /// Borrowing, read-only iteration over every `(id, &T)` pair in
    /// unspecified order.
    pub fn iter<T: Component>(&self) -> impl Iterator<Item = (Id, &T)> {
        self.table::<T>().into_iter().flat_map(|table| table.iter())
    }

    fn table<T: Component>(&self) -> Option<&Table<T>> {
        let erased = self.tables.get(&T::component_type_id())?;
        match erased.as_any().downcast_ref::<Table<T>>() {
            Some(table) => Some(table),
            None => kind_mismatch::<T>(erased.as_ref()),
        }
    }

    fn table_mut<T: Component>(&mut self) -> &mut Table<T> {
        let erased = self
            .tables
            .entry(T::component_type_id())
            .or_insert_with(|| {
                debug!(kind = T::type_name(), "created component table");
                Box::new(Table::<T>::new())
            });
        if !erased.as_any().is::<Table<T>>() {
            kind_mismatch::<T>(erased.as_ref());
        }
        match erased.as_any_mut().downcast_mut::<Table<T>>() {
            Some(table) => table,
            None => unreachable!("table type checked above"),
        }
    }
}

/// Two distinct Rust types claimed the same kind name. This is a static
/// contract violation, not a runtime condition.
fn kind_mismatch<T: Component>(stored: &dyn ErasedTable) -> ! {
    panic!(
        "component kind mismatch: `{}` is already stored as `{}` ({} rows), cannot access it as `{}`",
        T::type_name(),
        stored.rust_type(),
        stored.len(),
        std::any::type_name::<T>()
    )
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<(&'static str, usize)> = self
            .tables
            .values()
            .map(|table| (table.kind_name(), table.len()))
            .collect();
        kinds.sort_unstable();
        f.debug_struct("Engine")
            .field("entities", &self.allocator.count())
            .field("kinds", &kinds)
            .finish()
    }
}
