//! Report assembly: one record per catalog item, both axes merged.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use stockwise_catalog::CatalogItem;
use stockwise_core::ProductId;

use crate::abc::{AbcClass, AbcOutcome};
use crate::revenue::{revenue_rank, RevenueTable};
use crate::xyz::{XyzClass, XyzOutcome};

/// Two-letter inventory policy code, e.g. `AX` or `CZ`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CombinedClass {
    pub abc: AbcClass,
    pub xyz: XyzClass,
}

impl CombinedClass {
    pub fn new(abc: AbcClass, xyz: XyzClass) -> Self {
        Self { abc, xyz }
    }

    /// All nine codes, grouped by variability (AX, BX, CX, AY, ...).
    pub fn all() -> impl Iterator<Item = CombinedClass> {
        XyzClass::ALL
            .into_iter()
            .flat_map(|xyz| AbcClass::ALL.into_iter().map(move |abc| CombinedClass::new(abc, xyz)))
    }
}

impl core::fmt::Display for CombinedClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.abc, self.xyz)
    }
}

impl Serialize for CombinedClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// ABC/XYZ classification of a single catalog item.
///
/// The combined code is derived on read from the two final classes, so it can
/// never disagree with them.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    pub item: CatalogItem,
    pub total_revenue: Decimal,
    pub revenue_share_percentage: f64,
    pub abc_class: AbcClass,
    pub coefficient_of_variation: f64,
    pub xyz_class: XyzClass,
}

impl ClassificationReport {
    /// Zero revenue, class C, cv 0, class Z.
    pub fn new(item: CatalogItem) -> Self {
        Self {
            item,
            total_revenue: Decimal::ZERO,
            revenue_share_percentage: 0.0,
            abc_class: AbcClass::default(),
            coefficient_of_variation: 0.0,
            xyz_class: XyzClass::default(),
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.item.id_typed()
    }

    pub fn combined_class(&self) -> CombinedClass {
        CombinedClass::new(self.abc_class, self.xyz_class)
    }
}

/// Merge revenue, ABC and XYZ results into one report per catalog item,
/// ordered by revenue descending (ties by ascending id).
pub fn assemble(
    items: &[CatalogItem],
    revenue: &RevenueTable,
    abc: &BTreeMap<ProductId, AbcOutcome>,
    xyz: &BTreeMap<ProductId, XyzOutcome>,
) -> Vec<ClassificationReport> {
    let mut reports: Vec<ClassificationReport> = items
        .iter()
        .map(|item| {
            let id = item.id_typed();
            let abc = abc.get(&id).copied().unwrap_or_default();
            let xyz = xyz.get(&id).copied().unwrap_or_default();
            ClassificationReport {
                total_revenue: revenue.revenue_of(&id),
                revenue_share_percentage: abc.revenue_share_percentage,
                abc_class: abc.class,
                coefficient_of_variation: xyz.coefficient_of_variation,
                xyz_class: xyz.class,
                ..ClassificationReport::new(item.clone())
            }
        })
        .collect();

    reports.sort_by(|a, b| {
        revenue_rank(
            (&a.item.id_typed(), a.total_revenue),
            (&b.item.id_typed(), b.total_revenue),
        )
    });
    reports
}
