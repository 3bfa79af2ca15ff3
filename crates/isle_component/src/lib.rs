//! # isle_component
//!
//! The registry half of the simulation: what an entity is, what a component
//! is, and where component values live.
//!
//! This crate provides:
//!
//! - [`Component`] trait: the contract all registry data must satisfy.
//! - [`Id`]: monotonically increasing entity identifiers.
//! - [`IdAllocator`]: the single allocation counter for an [`Engine`].
//! - [`Table`]: one typed `Id -> T` table per component kind.
//! - [`Engine`]: owns the allocator and every table.

pub mod component;
pub mod engine;
pub mod entity;
pub mod table;

pub use component::{Component, ComponentTypeId};
pub use engine::Engine;
pub use entity::{Id, IdAllocator};
pub use table::Table;
