//! Identity-less wrappers over raw mappings.
//!
//! - [`DictObject`] - read-only view over an arbitrary mapping
//! - [`HotItems`] - ranked collection of [`crate::domain::entities::HotItem`]

pub mod dict_object;
pub mod hot_items;

pub use dict_object::DictObject;
pub use hot_items::HotItems;
