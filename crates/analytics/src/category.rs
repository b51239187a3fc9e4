//! Revenue and product counts per catalog category.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::report::ClassificationReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: String,
    pub product_count: usize,
    pub total_revenue: Decimal,
}

/// Categories ordered by revenue descending, then by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub categories: Vec<CategoryStat>,
    /// Highest-revenue category; `None` when nothing sold.
    pub top_category: Option<String>,
}

impl CategoryBreakdown {
    pub fn from_reports(reports: &[ClassificationReport]) -> Self {
        let mut grouped: BTreeMap<&str, (usize, Decimal)> = BTreeMap::new();
        for report in reports {
            let entry = grouped.entry(report.item.category()).or_default();
            entry.0 += 1;
            entry.1 += report.total_revenue;
        }

        let mut categories: Vec<CategoryStat> = grouped
            .into_iter()
            .map(|(category, (product_count, total_revenue))| CategoryStat {
                category: category.to_string(),
                product_count,
                total_revenue,
            })
            .collect();
        categories.sort_by(|a, b| {
            b.total_revenue
                .cmp(&a.total_revenue)
                .then_with(|| a.category.cmp(&b.category))
        });

        let top_category = categories
            .first()
            .filter(|c| c.total_revenue > Decimal::ZERO)
            .map(|c| c.category.clone());

        Self {
            categories,
            top_category,
        }
    }

    pub fn get(&self, category: &str) -> Option<&CategoryStat> {
        self.categories.iter().find(|c| c.category == category)
    }
}
