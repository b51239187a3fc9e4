use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::abc::{self, AbcThresholds};
use crate::demand::DemandSeries;
use crate::error::AnalyticsError;
use crate::period::{resolve_period, Period};
use crate::report::{self, ClassificationReport};
use crate::revenue::RevenueTable;
use crate::snapshot::SalesSnapshot;
use crate::xyz::{self, XyzThresholds};

/// Trailing window used when the caller does not choose one.
pub const DEFAULT_MONTHS: i32 = 12;

/// Longest accepted window (ten years).
pub const MAX_MONTHS: i32 = 120;

/// Result of one ABC/XYZ run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutput {
    pub period: Period,
    pub total_revenue: Decimal,
    /// One report per catalog item, revenue descending.
    pub reports: Vec<ClassificationReport>,
}

/// Deterministic ABC/XYZ classification over a sales snapshot.
///
/// Model:
/// - Resolve the trailing window from `now` (injected, never read from a clock here).
/// - Revenue per item → ABC; monthly units per item → XYZ.
/// - Merge both into one report per catalog item.
#[derive(Debug, Clone)]
pub struct AbcXyzAnalysis {
    snapshot: SalesSnapshot,
    now: DateTime<Utc>,
    months: i32,
    abc_thresholds: AbcThresholds,
    xyz_thresholds: XyzThresholds,
}

impl AbcXyzAnalysis {
    pub fn new(snapshot: SalesSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            snapshot,
            now,
            months: DEFAULT_MONTHS,
            abc_thresholds: AbcThresholds::default(),
            xyz_thresholds: XyzThresholds::default(),
        }
    }

    pub fn with_months(mut self, months: i32) -> Self {
        self.months = months;
        self
    }

    pub fn with_abc_thresholds(mut self, thresholds: AbcThresholds) -> Self {
        self.abc_thresholds = thresholds;
        self
    }

    pub fn with_xyz_thresholds(mut self, thresholds: XyzThresholds) -> Self {
        self.xyz_thresholds = thresholds;
        self
    }

    pub fn snapshot(&self) -> &SalesSnapshot {
        &self.snapshot
    }

    pub fn run(&self) -> Result<AnalysisOutput, AnalyticsError> {
        if !(1..=MAX_MONTHS).contains(&self.months) {
            return Err(AnalyticsError::InvalidInput(format!(
                "months must be between 1 and {MAX_MONTHS} (got {})",
                self.months
            )));
        }
        self.abc_thresholds.validate()?;
        self.xyz_thresholds.validate()?;

        let SalesSnapshot { items, orders } = &self.snapshot;
        let period = resolve_period(self.months, self.now);

        let revenue = RevenueTable::aggregate(items, orders, &period)?;
        let abc = abc::classify(&revenue, &self.abc_thresholds);
        tracing::debug!(classified = abc.len(), total = %revenue.total(), "abc pass done");

        let demand = DemandSeries::build(orders, &period);
        let xyz = xyz::classify(&demand, &self.xyz_thresholds);
        tracing::debug!(
            classified = xyz.len(),
            months = demand.total_months(),
            "xyz pass done"
        );

        let reports = report::assemble(items, &revenue, &abc, &xyz);

        tracing::info!(
            months = self.months,
            start = %period.start(),
            end = %period.end(),
            items = reports.len(),
            total_revenue = %revenue.total(),
            "abc/xyz analysis complete"
        );

        Ok(AnalysisOutput {
            period,
            total_revenue: revenue.total(),
            reports,
        })
    }
}
