use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use stockwise_analytics::{
    AbcThresholds, AbcXyzAnalysis, AnalysisOutput, AnalyticsError, SalesSnapshot, XyzThresholds,
};
use stockwise_catalog::CatalogProvider;
use stockwise_sales::OrderHistoryProvider;

/// Fetches a fresh snapshot from both sources and runs one analysis over it.
///
/// Every call reads the sources again; nothing is cached between runs.
#[derive(Debug)]
pub struct AnalysisRunner<C: ?Sized, H: ?Sized> {
    catalog: Arc<C>,
    history: Arc<H>,
    abc_thresholds: AbcThresholds,
    xyz_thresholds: XyzThresholds,
}

impl<C: ?Sized, H: ?Sized> Clone for AnalysisRunner<C, H> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            history: Arc::clone(&self.history),
            abc_thresholds: self.abc_thresholds,
            xyz_thresholds: self.xyz_thresholds,
        }
    }
}

impl<C, H> AnalysisRunner<C, H>
where
    C: CatalogProvider + ?Sized,
    H: OrderHistoryProvider + ?Sized,
{
    pub fn new(catalog: Arc<C>, history: Arc<H>) -> Self {
        Self {
            catalog,
            history,
            abc_thresholds: AbcThresholds::default(),
            xyz_thresholds: XyzThresholds::default(),
        }
    }

    pub fn with_abc_thresholds(mut self, thresholds: AbcThresholds) -> Self {
        self.abc_thresholds = thresholds;
        self
    }

    pub fn with_xyz_thresholds(mut self, thresholds: XyzThresholds) -> Self {
        self.xyz_thresholds = thresholds;
        self
    }

    /// Run over the trailing `months` full calendar months before `now`.
    pub fn run(&self, months: i32, now: DateTime<Utc>) -> Result<AnalysisOutput, AnalyticsError> {
        let snapshot = SalesSnapshot::fetch(&*self.catalog, &*self.history).inspect_err(|e| {
            warn!(error = %e, "failed to fetch sales snapshot");
        })?;

        AbcXyzAnalysis::new(snapshot, now)
            .with_months(months)
            .with_abc_thresholds(self.abc_thresholds)
            .with_xyz_thresholds(self.xyz_thresholds)
            .run()
    }

    /// Same as [`Self::run`] with the current wall clock.
    pub fn run_now(&self, months: i32) -> Result<AnalysisOutput, AnalyticsError> {
        self.run(months, Utc::now())
    }
}
