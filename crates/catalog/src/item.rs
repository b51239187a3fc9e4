use rust_decimal::Decimal;

use stockwise_core::{DomainError, DomainResult, Entity, ProductId};

use crate::image::ImageRef;

/// Catalog item as read from the catalog collaborator.
///
/// Immutable once constructed; the analytics engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    id: ProductId,
    name: String,
    price: Decimal,
    description: Option<String>,
    category: String,
    image: Option<ImageRef>,
}

impl CatalogItem {
    /// Build a validated catalog item.
    ///
    /// Rules:
    /// - `name` must not be blank
    /// - `price` must not be negative
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name must not be blank"));
        }

        if price < Decimal::ZERO {
            return Err(DomainError::validation("price must not be negative"));
        }

        Ok(Self {
            id,
            name,
            price,
            description: None,
            category: category.into(),
            image: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current list price (not the price any past order was placed at).
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }
}

impl Entity for CatalogItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
