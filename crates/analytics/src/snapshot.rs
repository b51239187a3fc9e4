use stockwise_catalog::{CatalogItem, CatalogProvider};
use stockwise_sales::{Order, OrderHistoryProvider};

use crate::error::AnalyticsError;

/// Point-in-time copy of the catalog and the full order history.
///
/// Fetched once per report and owned by that report run; nothing is cached
/// between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesSnapshot {
    pub items: Vec<CatalogItem>,
    pub orders: Vec<Order>,
}

impl SalesSnapshot {
    pub fn new(items: Vec<CatalogItem>, orders: Vec<Order>) -> Self {
        Self { items, orders }
    }

    /// Read both collaborators once.
    pub fn fetch<C, H>(catalog: &C, history: &H) -> Result<Self, AnalyticsError>
    where
        C: CatalogProvider + ?Sized,
        H: OrderHistoryProvider + ?Sized,
    {
        let items = catalog.list_items()?;
        let orders = history.list_orders()?;
        tracing::debug!(items = items.len(), orders = orders.len(), "sales snapshot fetched");
        Ok(Self { items, orders })
    }
}
