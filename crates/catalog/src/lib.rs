//! Catalog domain module (read side).
//!
//! This crate describes catalog items as the analytics layer sees them: an
//! immutable snapshot read from whatever owns the catalog (no IO, no HTTP, no
//! storage).

pub mod image;
pub mod item;
pub mod provider;

pub use image::ImageRef;
pub use item::CatalogItem;
pub use provider::CatalogProvider;
