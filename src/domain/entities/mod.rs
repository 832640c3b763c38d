//! Entities: objects with an identity (`id`, `name`) built from a raw mapping.
//!
//! # Entity Types
//!
//! - [`Thing`] - the base entity; requires `id`
//! - [`HotItem`] - an entry of a hot list; requires `rank`
//!
//! # Design Pattern
//!
//! Specific entities embed a [`Thing`] for the shared identity fields and
//! decode their own fields into typed struct members at construction time.
//! Missing required fields fail construction immediately; missing optional
//! fields become `None`.

pub mod hot_item;
pub mod thing;

pub use hot_item::HotItem;
pub use thing::{Thing, ThingId};
