//! Dashboard views over an assembled report list.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use stockwise_core::ProductId;

use crate::abc::AbcClass;
use crate::category::CategoryBreakdown;
use crate::report::{ClassificationReport, CombinedClass};
use crate::xyz::XyzClass;

/// Number of items listed in [`DashboardSummary::top_items`].
pub const TOP_ITEMS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCell {
    pub combined_class: CombinedClass,
    /// Item names in report order (revenue descending).
    pub items: Vec<String>,
}

/// 3×3 grid of combined classes plus per-axis item counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMatrix {
    /// Always nine cells: AX, BX, CX, AY, BY, CY, AZ, BZ, CZ.
    pub cells: Vec<MatrixCell>,
    pub abc_counts: BTreeMap<AbcClass, usize>,
    pub xyz_counts: BTreeMap<XyzClass, usize>,
    pub total_revenue: Decimal,
}

impl ClassMatrix {
    pub fn from_reports(reports: &[ClassificationReport]) -> Self {
        let mut by_code: BTreeMap<CombinedClass, Vec<String>> = BTreeMap::new();
        let mut abc_counts: BTreeMap<AbcClass, usize> = AbcClass::ALL.into_iter().map(|c| (c, 0)).collect();
        let mut xyz_counts: BTreeMap<XyzClass, usize> = XyzClass::ALL.into_iter().map(|c| (c, 0)).collect();
        let mut total_revenue = Decimal::ZERO;

        for report in reports {
            by_code
                .entry(report.combined_class())
                .or_default()
                .push(report.item.name().to_string());
            *abc_counts.entry(report.abc_class).or_default() += 1;
            *xyz_counts.entry(report.xyz_class).or_default() += 1;
            total_revenue += report.total_revenue;
        }

        let cells = CombinedClass::all()
            .map(|code| MatrixCell {
                combined_class: code,
                items: by_code.remove(&code).unwrap_or_default(),
            })
            .collect();

        Self {
            cells,
            abc_counts,
            xyz_counts,
            total_revenue,
        }
    }

    pub fn cell(&self, code: CombinedClass) -> &[String] {
        self.cells
            .iter()
            .find(|c| c.combined_class == code)
            .map(|c| c.items.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopItem {
    pub id: ProductId,
    pub name: String,
    pub total_revenue: Decimal,
    pub combined_class: CombinedClass,
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: Decimal,
    pub item_count: usize,
    /// Rounded to cents; zero for an empty catalog.
    pub average_revenue_per_item: Decimal,
    pub top_category: Option<String>,
    pub top_items: Vec<TopItem>,
    pub matrix: ClassMatrix,
}

impl DashboardSummary {
    /// `reports` must already be ranked (as returned by the analysis job).
    pub fn from_reports(reports: &[ClassificationReport]) -> Self {
        let matrix = ClassMatrix::from_reports(reports);
        let item_count = reports.len();
        let average_revenue_per_item = if item_count == 0 {
            Decimal::ZERO
        } else {
            (matrix.total_revenue / Decimal::from(item_count))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        };

        let top_items = reports
            .iter()
            .take(TOP_ITEMS)
            .map(|r| TopItem {
                id: r.product_id(),
                name: r.item.name().to_string(),
                total_revenue: r.total_revenue,
                combined_class: r.combined_class(),
            })
            .collect();

        Self {
            total_revenue: matrix.total_revenue,
            item_count,
            average_revenue_per_item,
            top_category: CategoryBreakdown::from_reports(reports).top_category,
            top_items,
            matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stockwise_catalog::CatalogItem;

    fn report(n: u128, category: &str, revenue: Decimal, abc: AbcClass, xyz: XyzClass) -> ClassificationReport {
        let item = CatalogItem::new(ProductId::from_u128(n), format!("p{n}"), dec!(1), category).unwrap();
        ClassificationReport {
            total_revenue: revenue,
            abc_class: abc,
            xyz_class: xyz,
            ..ClassificationReport::new(item)
        }
    }

    fn sample() -> Vec<ClassificationReport> {
        vec![
            report(1, "tools", dec!(500), AbcClass::A, XyzClass::X),
            report(2, "garden", dec!(300), AbcClass::A, XyzClass::Y),
            report(3, "tools", dec!(150), AbcClass::B, XyzClass::X),
            report(4, "garden", dec!(40), AbcClass::C, XyzClass::Z),
            report(5, "kitchen", dec!(10), AbcClass::C, XyzClass::Z),
            report(6, "kitchen", dec!(0), AbcClass::C, XyzClass::Z),
        ]
    }

    #[test]
    fn matrix_has_nine_cells_in_code_order() {
        let matrix = ClassMatrix::from_reports(&sample());
        let codes: Vec<String> = matrix.cells.iter().map(|c| c.combined_class.to_string()).collect();
        assert_eq!(codes, vec!["AX", "BX", "CX", "AY", "BY", "CY", "AZ", "BZ", "CZ"]);
        assert_eq!(matrix.cell(CombinedClass::new(AbcClass::C, XyzClass::Z)), ["p4", "p5", "p6"]);
        assert!(matrix.cell(CombinedClass::new(AbcClass::B, XyzClass::Y)).is_empty());
    }

    #[test]
    fn matrix_counts_each_axis() {
        let matrix = ClassMatrix::from_reports(&sample());
        assert_eq!(matrix.abc_counts[&AbcClass::A], 2);
        assert_eq!(matrix.abc_counts[&AbcClass::B], 1);
        assert_eq!(matrix.abc_counts[&AbcClass::C], 3);
        assert_eq!(matrix.xyz_counts[&XyzClass::X], 2);
        assert_eq!(matrix.xyz_counts[&XyzClass::Y], 1);
        assert_eq!(matrix.xyz_counts[&XyzClass::Z], 3);
        assert_eq!(matrix.total_revenue, dec!(1000));
    }

    #[test]
    fn dashboard_headlines() {
        let summary = DashboardSummary::from_reports(&sample());
        assert_eq!(summary.item_count, 6);
        assert_eq!(summary.total_revenue, dec!(1000));
        assert_eq!(summary.average_revenue_per_item, dec!(166.67));
        assert_eq!(summary.top_category.as_deref(), Some("tools"));
        assert_eq!(summary.top_items.len(), TOP_ITEMS);
        assert_eq!(summary.top_items[0].id, ProductId::from_u128(1));
        assert_eq!(summary.top_items[0].combined_class.to_string(), "AX");
    }

    #[test]
    fn empty_report_list() {
        let summary = DashboardSummary::from_reports(&[]);
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.average_revenue_per_item, Decimal::ZERO);
        assert!(summary.top_category.is_none());
        assert!(summary.top_items.is_empty());
        assert_eq!(summary.matrix.cells.len(), 9);
        assert_eq!(summary.matrix.abc_counts[&AbcClass::C], 0);
    }

    #[test]
    fn serializes_class_keys_as_codes() {
        let json = serde_json::to_value(DashboardSummary::from_reports(&sample())).unwrap();
        assert_eq!(json["matrix"]["abcCounts"]["A"], 2);
        assert_eq!(json["matrix"]["cells"][0]["combinedClass"], "AX");
        assert_eq!(json["topItems"][0]["name"], "p1");
        assert_eq!(json["averageRevenuePerItem"], 166.67);
    }
}
