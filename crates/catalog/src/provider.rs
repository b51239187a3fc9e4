use std::sync::Arc;

use stockwise_core::DomainResult;

use crate::item::CatalogItem;

/// Read access to the full catalog as of "now".
///
/// The analytics layer never asks for filtered or incremental views; it reads
/// the whole list once per report.
pub trait CatalogProvider: Send + Sync {
    fn list_items(&self) -> DomainResult<Vec<CatalogItem>>;
}

impl<S> CatalogProvider for Arc<S>
where
    S: CatalogProvider + ?Sized,
{
    fn list_items(&self) -> DomainResult<Vec<CatalogItem>> {
        (**self).list_items()
    }
}
