use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use stockwise_core::{CustomerId, DomainError, DomainResult, Entity, OrderId, ProductId};

/// Order line: product, quantity, price paid per unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    product_id: ProductId,
    quantity: u32,
    /// Unit price at the time of purchase, independent of the current catalog price.
    unit_price: Decimal,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: u32, unit_price: Decimal) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        if unit_price < Decimal::ZERO {
            return Err(DomainError::validation("unit_price must not be negative"));
        }

        if unit_price.checked_mul(Decimal::from(quantity)).is_none() {
            return Err(DomainError::validation("line revenue exceeds the decimal range"));
        }

        Ok(Self {
            product_id,
            quantity,
            unit_price,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// `quantity × unit_price`; always representable (checked in `new`).
    pub fn revenue(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    placed_at: DateTime<Utc>,
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new(id: OrderId, customer_id: CustomerId, placed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_id,
            placed_at,
            lines: Vec::new(),
        }
    }

    /// Append a validated line, keeping insertion order.
    pub fn with_line(
        mut self,
        product_id: ProductId,
        quantity: u32,
        unit_price: Decimal,
    ) -> DomainResult<Self> {
        self.lines.push(OrderLine::new(product_id, quantity, unit_price)?);
        Ok(self)
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Sum of line revenues; `None` when it exceeds the decimal range.
    pub fn total(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |acc, line| acc.checked_add(line.revenue()))
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    fn test_order() -> Order {
        Order::new(OrderId::from_u128(1), CustomerId::from_u128(1), test_time())
    }

    #[test]
    fn line_revenue_is_quantity_times_unit_price() {
        let line = OrderLine::new(ProductId::from_u128(1), 3, dec!(19.99)).unwrap();
        assert_eq!(line.revenue(), dec!(59.97));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let err = OrderLine::new(ProductId::from_u128(1), 0, dec!(10)).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("quantity must be positive") => {}
            _ => panic!("Expected Validation error for zero quantity"),
        }
    }

    #[test]
    fn negative_unit_price_is_rejected() {
        let err = OrderLine::new(ProductId::from_u128(1), 1, dec!(-1)).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("unit_price must not be negative") => {}
            _ => panic!("Expected Validation error for negative unit price"),
        }
    }

    #[test]
    fn lines_keep_insertion_order() {
        let order = test_order()
            .with_line(ProductId::from_u128(2), 1, dec!(5))
            .unwrap()
            .with_line(ProductId::from_u128(1), 2, dec!(7))
            .unwrap();

        let ids: Vec<_> = order.lines().iter().map(OrderLine::product_id).collect();
        assert_eq!(ids, vec![ProductId::from_u128(2), ProductId::from_u128(1)]);
        assert_eq!(order.total(), Some(dec!(19)));
    }

    #[test]
    fn line_revenue_beyond_decimal_range_is_rejected() {
        let price = Decimal::MAX / Decimal::TWO;
        let err = OrderLine::new(ProductId::from_u128(1), 3, price).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("exceeds the decimal range") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert!(OrderLine::new(ProductId::from_u128(1), 1, price).is_ok());
    }

    #[test]
    fn total_beyond_decimal_range_is_none() {
        let price = Decimal::MAX / Decimal::TWO;
        let order = test_order()
            .with_line(ProductId::from_u128(1), 1, price)
            .unwrap()
            .with_line(ProductId::from_u128(2), 1, price)
            .unwrap()
            .with_line(ProductId::from_u128(3), 1, price)
            .unwrap();
        assert_eq!(order.total(), None);
    }

    #[test]
    fn invalid_line_does_not_produce_order() {
        assert!(test_order().with_line(ProductId::from_u128(1), 0, dec!(1)).is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the order total equals the sum of its line revenues.
            #[test]
            fn total_is_sum_of_line_revenues(
                lines in prop::collection::vec((1u32..1_000u32, 0i64..1_000_000i64), 0..20)
            ) {
                let mut order = test_order();
                let mut expected = Decimal::ZERO;
                for (i, (qty, cents)) in lines.iter().enumerate() {
                    let price = Decimal::new(*cents, 2);
                    expected += price * Decimal::from(*qty);
                    order = order.with_line(ProductId::from_u128(i as u128), *qty, price).unwrap();
                }
                prop_assert_eq!(order.total(), Some(expected));
            }
        }
    }
}
