//! `stockwise-analytics`
//!
//! **Responsibility:** ABC/XYZ inventory classification over a read-only
//! snapshot of the catalog and the order history.
//!
//! This crate never mutates its inputs and never persists its outputs:
//! - `period` turns "trailing N months" into a window of full calendar months
//! - `revenue` + `abc` rank items by revenue contribution
//! - `demand` + `xyz` rank items by demand stability
//! - `report` merges both axes into one record per catalog item
//! - `summary`, `category`, `export` are views over an assembled report list

pub mod abc;
pub mod category;
pub mod demand;
pub mod error;
pub mod export;
pub mod job;
pub mod period;
pub mod report;
pub mod revenue;
pub mod snapshot;
pub mod summary;
pub mod xyz;

pub use abc::{AbcClass, AbcOutcome, AbcThresholds};
pub use category::{CategoryBreakdown, CategoryStat};
pub use error::AnalyticsError;
pub use job::{AbcXyzAnalysis, AnalysisOutput, DEFAULT_MONTHS, MAX_MONTHS};
pub use period::{resolve_period, Period, YearMonth};
pub use report::{ClassificationReport, CombinedClass};
pub use revenue::RevenueTable;
pub use snapshot::SalesSnapshot;
pub use summary::{ClassMatrix, DashboardSummary};
pub use xyz::{XyzClass, XyzOutcome, XyzThresholds};
