//! # BoardGameGeek Core
//!
//! Typed model layer for the BoardGameGeek XML API 2 client.
//!
//! The HTTP layer fetches and parses responses into string-keyed mappings
//! ([`domain::raw::RawData`]). This crate turns those mappings into validated
//! objects with typed accessors, and defines the error type every layer of
//! the client reports through.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - entities, value objects, collections
//! - **Errors** ([`error`]) - the shared error taxonomy
//! - **Utilities** ([`utils`]) - URL repair for image links
//! - **Configuration** ([`config`], [`telemetry`]) - optional logging setup
//!
//! ## Quick Start
//!
//! ```
//! use boardgamegeek_core::prelude::*;
//! use serde_json::json;
//!
//! let hot = HotItems::try_from(json!({
//!     "items": [
//!         { "id": 1, "rank": 1, "name": "A" },
//!         { "id": 2, "rank": 2, "name": "B", "thumbnail": "//x.com/i.png" },
//!     ]
//! }))?;
//!
//! assert_eq!(hot.len(), 2);
//! assert_eq!(hot[1].thumbnail(), Some("https://x.com/i.png"));
//! # Ok::<(), BggError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;
pub mod utils;

pub use error::{BggError, ErrorKind, Result};

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::domain::diagnostics::{BufferSink, Diagnostic, LineSink, TracingSink};
    pub use crate::domain::entities::{HotItem, Thing, ThingId};
    pub use crate::domain::objects::{DictObject, HotItems};
    pub use crate::domain::raw::RawData;
    pub use crate::error::{BggError, ErrorKind, Result};
}
