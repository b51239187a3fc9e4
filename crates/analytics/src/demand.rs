//! Monthly demand series per item.

use std::collections::BTreeMap;

use stockwise_core::ProductId;
use stockwise_sales::Order;

use crate::period::{Period, YearMonth};

/// Units sold per calendar month, for every item that sold inside the window.
///
/// Each series has exactly `total_months` entries, start month first; months
/// without sales are zero. Items without any line in the window have no series.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemandSeries {
    total_months: i64,
    by_item: BTreeMap<ProductId, Vec<u64>>,
}

impl DemandSeries {
    pub fn build(orders: &[Order], period: &Period) -> Self {
        let mut sparse: BTreeMap<ProductId, BTreeMap<YearMonth, u64>> = BTreeMap::new();

        for order in orders.iter().filter(|o| period.contains(o.placed_at())) {
            let month = YearMonth::of(order.placed_at());
            for line in order.lines() {
                *sparse
                    .entry(line.product_id())
                    .or_default()
                    .entry(month)
                    .or_default() += u64::from(line.quantity());
            }
        }

        let by_item = sparse
            .into_iter()
            .map(|(product_id, monthly)| {
                let series = period
                    .months()
                    .map(|m| monthly.get(&m).copied().unwrap_or(0))
                    .collect();
                (product_id, series)
            })
            .collect();

        Self {
            total_months: period.total_months(),
            by_item,
        }
    }

    pub fn total_months(&self) -> i64 {
        self.total_months
    }

    pub fn series_of(&self, product_id: &ProductId) -> Option<&[u64]> {
        self.by_item.get(product_id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &[u64])> {
        self.by_item.iter().map(|(id, s)| (id, s.as_slice()))
    }
}
