//! In-memory entity storage.

pub mod entity_store;

pub use entity_store::{EntityStore, InMemoryEntityStore};
