use std::sync::Arc;

use stockwise_core::DomainResult;

use crate::order::Order;

/// Read access to the complete order history.
///
/// Implementations return every order; callers filter by timestamp themselves.
pub trait OrderHistoryProvider: Send + Sync {
    fn list_orders(&self) -> DomainResult<Vec<Order>>;
}

impl<S> OrderHistoryProvider for Arc<S>
where
    S: OrderHistoryProvider + ?Sized,
{
    fn list_orders(&self) -> DomainResult<Vec<Order>> {
        (**self).list_orders()
    }
}
