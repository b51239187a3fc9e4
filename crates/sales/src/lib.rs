//! Sales order history (read side).
//!
//! Orders here are immutable snapshots of what was sold, when, and at which
//! price. Cart and order mutation live elsewhere; this crate only describes
//! the shape the analytics layer consumes (no IO, no HTTP, no storage).

pub mod order;
pub mod provider;

pub use order::{Order, OrderLine};
pub use provider::OrderHistoryProvider;
