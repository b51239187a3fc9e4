//! JSON seed snapshots for the in-memory sources.
//!
//! Shape:
//! ```json
//! { "items":  [{ "id", "name", "price", "description"?, "category", "image"? }],
//!   "orders": [{ "id", "customerId", "placedAt", "lines": [{ "productId", "quantity", "unitPrice" }] }] }
//! ```
//! Records go through the domain constructors, so a seed file can never hold
//! a blank name, a negative price or a zero quantity.

use std::path::Path;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use stockwise_catalog::{CatalogItem, ImageRef};
use stockwise_core::{CustomerId, DomainError, DomainResult, OrderId, ProductId};
use stockwise_sales::Order;

use crate::providers::{InMemoryCatalog, InMemoryOrderHistory};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed seed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid seed record: {0}")]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl ItemRecord {
    pub fn into_domain(self) -> DomainResult<CatalogItem> {
        let mut item = CatalogItem::new(self.id, self.name, self.price, self.category)?;
        if let Some(description) = self.description {
            item = item.with_description(description);
        }
        if let Some(image) = self.image {
            item = item.with_image(ImageRef::new(image));
        }
        Ok(item)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub placed_at: DateTime<Utc>,
    #[serde(default)]
    pub lines: Vec<LineRecord>,
}

impl OrderRecord {
    pub fn into_domain(self) -> DomainResult<Order> {
        self.lines
            .into_iter()
            .try_fold(Order::new(self.id, self.customer_id, self.placed_at), |order, line| {
                order.with_line(line.product_id, line.quantity, line.unit_price)
            })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedSnapshot {
    #[serde(default)]
    pub items: Vec<ItemRecord>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

impl SeedSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Validate every record and replace the contents of both sources.
    ///
    /// Nothing is written unless all records are valid.
    pub fn load_into(self, catalog: &InMemoryCatalog, history: &InMemoryOrderHistory) -> Result<(), SeedError> {
        let items = self
            .items
            .into_iter()
            .map(ItemRecord::into_domain)
            .collect::<DomainResult<Vec<_>>>()?;
        let orders = self
            .orders
            .into_iter()
            .map(OrderRecord::into_domain)
            .collect::<DomainResult<Vec<_>>>()?;

        tracing::info!(items = items.len(), orders = orders.len(), "seed snapshot loaded");
        catalog.replace_all(items)?;
        history.replace_all(orders)?;
        Ok(())
    }
}
