//! Typed views over the key/value data returned by the remote API.
//!
//! # Architecture
//!
//! - [`raw`] - the raw mapping type and field extraction rules
//! - [`entities`] - objects with identity ([`entities::Thing`], [`entities::HotItem`])
//! - [`objects`] - value objects and collections ([`objects::DictObject`], [`objects::HotItems`])
//! - [`diagnostics`] - human-readable dumps through an injected line sink
//!
//! # Construction Flow
//!
//! 1. The HTTP layer parses a response into a [`raw::RawData`] mapping
//! 2. A wrapper checks required keys and decodes typed fields
//! 3. Embedded URLs are repaired by [`crate::utils::url_normalizer::fix_url`]
//! 4. Collections build one entity per raw entry, in order

pub mod diagnostics;
pub mod entities;
pub mod objects;
pub mod raw;
