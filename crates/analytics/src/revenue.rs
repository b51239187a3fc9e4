//! Per-item revenue over a reporting window.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::Decimal;

use stockwise_catalog::CatalogItem;
use stockwise_core::ProductId;
use stockwise_sales::Order;

use crate::error::AnalyticsError;
use crate::period::Period;

/// Revenue per catalog item inside one window.
///
/// Every catalog item has an entry (zero when it sold nothing). Lines for
/// products missing from the catalog are ignored, so `total` is always the
/// sum of the per-item figures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevenueTable {
    by_item: BTreeMap<ProductId, Decimal>,
    total: Decimal,
}

impl RevenueTable {
    /// Seed one zero entry per catalog item, then add `quantity × unit_price`
    /// for every line of every order placed inside `period`.
    ///
    /// Fails with `InvalidInput` when a per-item sum or the total leaves the
    /// decimal range.
    pub fn aggregate(items: &[CatalogItem], orders: &[Order], period: &Period) -> Result<Self, AnalyticsError> {
        let mut by_item: BTreeMap<ProductId, Decimal> = items
            .iter()
            .map(|item| (item.id_typed(), Decimal::ZERO))
            .collect();

        for order in orders.iter().filter(|o| period.contains(o.placed_at())) {
            for line in order.lines() {
                if let Some(revenue) = by_item.get_mut(&line.product_id()) {
                    *revenue = revenue.checked_add(line.revenue()).ok_or_else(overflow)?;
                }
            }
        }

        let total = by_item
            .values()
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(*r))
            .ok_or_else(overflow)?;
        Ok(Self { by_item, total })
    }

    pub fn revenue_of(&self, product_id: &ProductId) -> Decimal {
        self.by_item.get(product_id).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn len(&self) -> usize {
        self.by_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_item.is_empty()
    }

    /// Entries ordered by revenue descending, ties by ascending id.
    pub fn ranked(&self) -> Vec<(ProductId, Decimal)> {
        let mut entries: Vec<(ProductId, Decimal)> =
            self.by_item.iter().map(|(id, rev)| (*id, *rev)).collect();
        entries.sort_by(|a, b| revenue_rank((&a.0, a.1), (&b.0, b.1)));
        entries
    }
}

fn overflow() -> AnalyticsError {
    AnalyticsError::InvalidInput("revenue overflow".to_string())
}

/// Ordering shared by the ABC walk and the final report list.
pub fn revenue_rank(a: (&ProductId, Decimal), b: (&ProductId, Decimal)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use stockwise_core::{CustomerId, OrderId};

    use crate::period::resolve_period;

    fn item(n: u128) -> CatalogItem {
        CatalogItem::new(ProductId::from_u128(n), format!("item-{n}"), dec!(10), "misc").unwrap()
    }

    fn order(n: u128, at: chrono::DateTime<Utc>, lines: &[(u128, u32, Decimal)]) -> Order {
        let mut order = Order::new(OrderId::from_u128(n), CustomerId::from_u128(1), at);
        for (product, qty, price) in lines {
            order = order.with_line(ProductId::from_u128(*product), *qty, *price).unwrap();
        }
        order
    }

    fn period() -> Period {
        resolve_period(3, Utc.with_ymd_and_hms(2025, 6, 10, 0, 0, 0).unwrap())
    }

    #[test]
    fn every_catalog_item_is_seeded_with_zero() {
        let table = RevenueTable::aggregate(&[item(1), item(2)], &[], &period()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.revenue_of(&ProductId::from_u128(1)), Decimal::ZERO);
        assert_eq!(table.total(), Decimal::ZERO);
    }

    #[test]
    fn revenue_uses_price_at_purchase() {
        let at = Utc.with_ymd_and_hms(2025, 4, 2, 9, 0, 0).unwrap();
        let orders = vec![
            order(1, at, &[(1, 2, dec!(7.50)), (2, 1, dec!(3))]),
            order(2, at, &[(1, 1, dec!(8))]),
        ];
        let table = RevenueTable::aggregate(&[item(1), item(2)], &orders, &period()).unwrap();
        assert_eq!(table.revenue_of(&ProductId::from_u128(1)), dec!(23));
        assert_eq!(table.revenue_of(&ProductId::from_u128(2)), dec!(3));
        assert_eq!(table.total(), dec!(26));
    }

    #[test]
    fn window_boundaries_are_inclusive() {
        let p = period();
        let one_ns = Duration::nanoseconds(1);
        let orders = vec![
            order(1, p.start(), &[(1, 1, dec!(1))]),
            order(2, p.end(), &[(1, 1, dec!(10))]),
            order(3, p.start() - one_ns, &[(1, 1, dec!(100))]),
            order(4, p.end() + one_ns, &[(1, 1, dec!(1000))]),
        ];
        let table = RevenueTable::aggregate(&[item(1)], &orders, &p).unwrap();
        assert_eq!(table.revenue_of(&ProductId::from_u128(1)), dec!(11));
    }

    #[test]
    fn lines_for_unknown_products_are_ignored() {
        let at = Utc.with_ymd_and_hms(2025, 4, 2, 9, 0, 0).unwrap();
        let orders = vec![order(1, at, &[(1, 1, dec!(5)), (99, 4, dec!(50))])];
        let table = RevenueTable::aggregate(&[item(1)], &orders, &period()).unwrap();
        assert_eq!(table.total(), dec!(5));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn ranked_breaks_ties_by_id() {
        let at = Utc.with_ymd_and_hms(2025, 4, 2, 9, 0, 0).unwrap();
        let orders = vec![order(1, at, &[(3, 1, dec!(5)), (2, 1, dec!(5)), (1, 1, dec!(9))])];
        let table = RevenueTable::aggregate(&[item(3), item(1), item(2)], &orders, &period()).unwrap();
        let ids: Vec<_> = table.ranked().into_iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![ProductId::from_u128(1), ProductId::from_u128(2), ProductId::from_u128(3)]
        );
    }

    #[test]
    fn item_revenue_overflow_is_an_error() {
        let at = Utc.with_ymd_and_hms(2025, 4, 2, 9, 0, 0).unwrap();
        let price = Decimal::MAX / Decimal::TWO;
        let orders: Vec<Order> = (1..=3).map(|n| order(n, at, &[(1, 1, price)])).collect();
        let err = RevenueTable::aggregate(&[item(1)], &orders, &period()).unwrap_err();
        match err {
            AnalyticsError::InvalidInput(msg) if msg.contains("revenue overflow") => {}
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn total_overflow_is_an_error() {
        let at = Utc.with_ymd_and_hms(2025, 4, 2, 9, 0, 0).unwrap();
        let price = Decimal::MAX / Decimal::TWO;
        let orders = vec![order(1, at, &[(1, 1, price), (2, 1, price), (3, 1, price)])];
        let result = RevenueTable::aggregate(&[item(1), item(2), item(3)], &orders, &period());
        assert!(matches!(result, Err(AnalyticsError::InvalidInput(_))));
    }
}
