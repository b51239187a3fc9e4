//! ABC (Pareto) classification by revenue contribution.
//!
//! Model:
//! - Rank items by revenue, highest first.
//! - Walk the ranking accumulating revenue; each share is rounded to four
//!   fractional digits (half-up) before being expressed as a percentage.
//! - Cumulative percentage ≤ `a` ⇒ A, ≤ `b` ⇒ B, otherwise C.
//!
//! Zero-revenue entries do not advance the cumulative percentage; they are
//! classified against whatever value the last revenue-bearing entry left.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use stockwise_core::ProductId;

use crate::error::AnalyticsError;
use crate::revenue::RevenueTable;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
const SHARE_SCALE: u32 = 4;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    #[default]
    C,
}

impl AbcClass {
    pub const ALL: [AbcClass; 3] = [AbcClass::A, AbcClass::B, AbcClass::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        }
    }
}

impl core::fmt::Display for AbcClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cumulative-percentage cut-offs (inclusive upper bounds).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AbcThresholds {
    pub a: Decimal,
    pub b: Decimal,
}

impl Default for AbcThresholds {
    fn default() -> Self {
        Self {
            a: Decimal::from(80),
            b: Decimal::from(95),
        }
    }
}

impl AbcThresholds {
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.a <= Decimal::ZERO || self.a > HUNDRED || self.b > HUNDRED {
            return Err(AnalyticsError::InvalidInput(
                "abc thresholds must be within (0, 100]".to_string(),
            ));
        }
        if self.a > self.b {
            return Err(AnalyticsError::InvalidInput(
                "abc threshold `a` must not exceed `b`".to_string(),
            ));
        }
        Ok(())
    }

    fn class_for(&self, cumulative_percentage: Decimal) -> AbcClass {
        if cumulative_percentage <= self.a {
            AbcClass::A
        } else if cumulative_percentage <= self.b {
            AbcClass::B
        } else {
            AbcClass::C
        }
    }
}

/// ABC result for one item.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct AbcOutcome {
    /// This item's share of total revenue, in percent.
    pub revenue_share_percentage: f64,
    pub class: AbcClass,
}

/// `numerator / denominator` rounded half-up to four digits, as a percentage.
fn rounded_percentage(numerator: Decimal, denominator: Decimal) -> Decimal {
    (numerator / denominator).round_dp_with_strategy(SHARE_SCALE, RoundingStrategy::MidpointAwayFromZero)
        * HUNDRED
}

/// Classify every entry of `revenue`.
///
/// Returns an empty map when total revenue is zero: callers fall back to
/// `AbcOutcome::default()` (share 0, class C) for every item.
pub fn classify(revenue: &RevenueTable, thresholds: &AbcThresholds) -> BTreeMap<ProductId, AbcOutcome> {
    let total = revenue.total();
    if total <= Decimal::ZERO {
        return BTreeMap::new();
    }

    let mut outcomes = BTreeMap::new();
    let mut cumulative_revenue = Decimal::ZERO;
    let mut cumulative_percentage = Decimal::ZERO;

    for (product_id, item_revenue) in revenue.ranked() {
        let mut share = 0.0;
        if item_revenue > Decimal::ZERO {
            share = rounded_percentage(item_revenue, total).to_f64().unwrap_or_default();
            cumulative_revenue += item_revenue;
            cumulative_percentage = rounded_percentage(cumulative_revenue, total);
        }

        outcomes.insert(
            product_id,
            AbcOutcome {
                revenue_share_percentage: share,
                class: thresholds.class_for(cumulative_percentage),
            },
        );
    }

    outcomes
}
