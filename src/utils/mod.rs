//! Helpers shared across the model layer.
//!
//! - [`url_normalizer`] - repair of protocol-relative image URLs

pub mod url_normalizer;
