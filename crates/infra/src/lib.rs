//! Infrastructure layer: in-memory data sources, seed loading, and the
//! fetch-then-analyse runner used by the HTTP surface.

pub mod analysis_runner;
pub mod providers;
pub mod seed;
pub mod store;


pub use analysis_runner::AnalysisRunner;
pub use providers::{InMemoryCatalog, InMemoryOrderHistory};
pub use seed::{SeedError, SeedSnapshot};
