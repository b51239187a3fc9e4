//! XYZ classification by demand variability.
//!
//! Model:
//! - Take the monthly unit series of an item over the whole window.
//! - mean = sum / months, population std dev (divide by months, not months - 1).
//! - cv = std / mean; cv ≤ `x` ⇒ X, cv ≤ `y` ⇒ Y, otherwise Z.
//!
//! A window shorter than two months carries no variability signal: every item
//! stays Z with cv 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockwise_core::ProductId;

use crate::demand::DemandSeries;
use crate::error::AnalyticsError;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum XyzClass {
    X,
    Y,
    #[default]
    Z,
}

impl XyzClass {
    pub const ALL: [XyzClass; 3] = [XyzClass::X, XyzClass::Y, XyzClass::Z];

    pub fn as_str(&self) -> &'static str {
        match self {
            XyzClass::X => "X",
            XyzClass::Y => "Y",
            XyzClass::Z => "Z",
        }
    }
}

impl core::fmt::Display for XyzClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coefficient-of-variation cut-offs (inclusive upper bounds).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct XyzThresholds {
    pub x: f64,
    pub y: f64,
}

impl Default for XyzThresholds {
    fn default() -> Self {
        Self { x: 0.4, y: 0.8 }
    }
}

impl XyzThresholds {
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if !(self.x.is_finite() && self.y.is_finite() && self.x >= 0.0) {
            return Err(AnalyticsError::InvalidInput(
                "xyz thresholds must be finite and non-negative".to_string(),
            ));
        }
        if self.x > self.y {
            return Err(AnalyticsError::InvalidInput(
                "xyz threshold `x` must not exceed `y`".to_string(),
            ));
        }
        Ok(())
    }

    fn class_for(&self, cv: f64) -> XyzClass {
        if cv <= self.x {
            XyzClass::X
        } else if cv <= self.y {
            XyzClass::Y
        } else {
            XyzClass::Z
        }
    }
}

/// XYZ result for one item.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct XyzOutcome {
    pub coefficient_of_variation: f64,
    pub class: XyzClass,
}

/// Mean and population standard deviation of a demand series.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DemandStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl DemandStats {
    /// `months` is the window length, which is also the series length.
    pub fn of(series: &[u64], months: i64) -> Self {
        let n = months as f64;
        let mean = series.iter().map(|&q| q as f64).sum::<f64>() / n;
        let variance = series
            .iter()
            .map(|&q| {
                let d = q as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// `None` when the mean is zero (no variability can be expressed).
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        (self.mean != 0.0).then(|| self.std_dev / self.mean)
    }
}

/// Classify every item that has a demand series.
///
/// Items absent from the result keep `XyzOutcome::default()` (cv 0, class Z).
pub fn classify(demand: &DemandSeries, thresholds: &XyzThresholds) -> BTreeMap<ProductId, XyzOutcome> {
    let months = demand.total_months();
    if months < 2 {
        return BTreeMap::new();
    }

    demand
        .iter()
        .map(|(product_id, series)| {
            let outcome = match DemandStats::of(series, months).coefficient_of_variation() {
                Some(cv) => XyzOutcome {
                    coefficient_of_variation: cv,
                    class: thresholds.class_for(cv),
                },
                None => XyzOutcome::default(),
            };
            (*product_id, outcome)
        })
        .collect()
}
