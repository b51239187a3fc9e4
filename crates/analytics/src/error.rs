use thiserror::Error;

use stockwise_core::DomainError;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("invalid analysis input: {0}")]
    InvalidInput(String),

    #[error("snapshot source failed: {0}")]
    Source(#[from] DomainError),

    #[error("export failed: {0}")]
    Export(String),
}
