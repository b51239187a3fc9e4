//! In-memory catalog and order-history sources.

use stockwise_catalog::{CatalogItem, CatalogProvider};
use stockwise_core::DomainResult;
use stockwise_sales::{Order, OrderHistoryProvider};

use crate::store::{EntityStore, InMemoryEntityStore};

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: InMemoryEntityStore<CatalogItem>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, item: CatalogItem) -> DomainResult<()> {
        self.items.upsert(item)
    }

    pub fn replace_all(&self, items: impl IntoIterator<Item = CatalogItem>) -> DomainResult<()> {
        self.items.replace_all(items.into_iter().collect())
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn list_items(&self) -> DomainResult<Vec<CatalogItem>> {
        self.items.list()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryOrderHistory {
    orders: InMemoryEntityStore<Order>,
}

impl InMemoryOrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, order: Order) -> DomainResult<()> {
        self.orders.upsert(order)
    }

    pub fn replace_all(&self, orders: impl IntoIterator<Item = Order>) -> DomainResult<()> {
        self.orders.replace_all(orders.into_iter().collect())
    }
}

impl OrderHistoryProvider for InMemoryOrderHistory {
    fn list_orders(&self) -> DomainResult<Vec<Order>> {
        self.orders.list()
    }
}
