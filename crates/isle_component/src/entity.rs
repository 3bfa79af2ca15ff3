//! Entity identifiers and allocation.
//!
//! An [`Id`] is a lightweight `u32` with no data of its own. An entity is
//! simply the set of component kinds holding an entry under its id.

use serde::{Deserialize, Serialize};

/// A unique entity identifier.
///
/// Ids are only produced by [`IdAllocator::allocate`] and are never reused
/// within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id(u32);

impl Id {
    /// Returns the raw `u32` identifier.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Id({})", self.0)
    }
}

/// Allocates monotonically increasing entity ids, starting at 0.
///
/// There is no free list: entities are permanent, so an id is never handed
/// out twice.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next_id: u32,
    exhausted: bool,
}

impl IdAllocator {
    /// Creates a new allocator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh id.
    ///
    /// # Panics
    ///
    /// Panics once every `u32` value has been issued; handing one out again
    /// would break uniqueness.
    pub fn allocate(&mut self) -> Id {
        assert!(!self.exhausted, "entity id space exhausted");
        let id = self.next_id;
        match self.next_id.checked_add(1) {
            Some(next) => self.next_id = next,
            None => self.exhausted = true,
        }
        Id(id)
    }

    /// Returns the number of ids allocated so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        if self.exhausted {
            u64::from(u32::MAX) + 1
        } else {
            u64::from(self.next_id)
        }
    }
}
