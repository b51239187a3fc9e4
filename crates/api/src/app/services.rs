use std::sync::Arc;

use axum::http::StatusCode;

use stockwise_analytics::AnalysisOutput;
use stockwise_catalog::CatalogProvider;
use stockwise_infra::{AnalysisRunner, InMemoryCatalog, InMemoryOrderHistory, SeedError, SeedSnapshot};
use stockwise_sales::OrderHistoryProvider;

use crate::app::errors;
use crate::config::ApiConfig;

/// Runner over type-erased sources, so tests can plug in their own.
pub type ReportRunner = AnalysisRunner<dyn CatalogProvider, dyn OrderHistoryProvider>;

/// Everything the report handlers need.
#[derive(Clone)]
pub struct AppServices {
    runner: ReportRunner,
    public_url: String,
    default_months: i32,
}

impl AppServices {
    pub fn new(runner: ReportRunner, public_url: impl Into<String>, default_months: i32) -> Self {
        Self {
            runner,
            public_url: public_url.into(),
            default_months,
        }
    }

    pub fn from_sources(
        catalog: Arc<dyn CatalogProvider>,
        history: Arc<dyn OrderHistoryProvider>,
        config: &ApiConfig,
    ) -> Self {
        Self::new(
            AnalysisRunner::new(catalog, history),
            config.public_url.clone(),
            config.default_months,
        )
    }

    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    pub fn default_months(&self) -> i32 {
        self.default_months
    }

    /// Run one analysis off the async runtime.
    pub async fn analyze(&self, months: i32) -> Result<AnalysisOutput, axum::response::Response> {
        let runner = self.runner.clone();
        match tokio::task::spawn_blocking(move || runner.run_now(months)).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(errors::analytics_error_to_response(e)),
            Err(e) => {
                tracing::warn!(error = %e, "analysis task failed");
                Err(errors::json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "analysis task failed",
                ))
            }
        }
    }
}

/// In-memory wiring (dev/test): empty sources, optionally seeded from `config.seed_path`.
pub fn build_services(config: &ApiConfig) -> Result<AppServices, SeedError> {
    let catalog = Arc::new(InMemoryCatalog::new());
    let history = Arc::new(InMemoryOrderHistory::new());

    match &config.seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading seed snapshot");
            SeedSnapshot::from_path(path)?.load_into(&catalog, &history)?;
        }
        None => tracing::warn!("STOCKWISE_SEED_PATH not set; starting with empty catalog and order history"),
    }

    Ok(AppServices::from_sources(catalog, history, config))
}
