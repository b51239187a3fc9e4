//! CSV rendering of a report list.

use rust_decimal::RoundingStrategy;

use crate::error::AnalyticsError;
use crate::report::ClassificationReport;

pub const CSV_HEADER: [&str; 9] = [
    "id",
    "name",
    "category",
    "total_revenue",
    "revenue_share_percentage",
    "abc_class",
    "coefficient_of_variation",
    "xyz_class",
    "combined_class",
];

/// File name offered to downloads of a `months`-long report.
pub fn file_name(months: i32) -> String {
    format!("report_{months}m.csv")
}

/// Render `reports` as RFC 4180 CSV, header first, one row per report.
pub fn to_csv(reports: &[ClassificationReport]) -> Result<Vec<u8>, AnalyticsError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| AnalyticsError::Export(e.to_string()))?;

    for report in reports {
        let revenue = report
            .total_revenue
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        writer
            .write_record([
                report.product_id().to_string(),
                report.item.name().to_string(),
                report.item.category().to_string(),
                format!("{revenue:.2}"),
                format!("{:.2}", report.revenue_share_percentage),
                report.abc_class.to_string(),
                format!("{:.3}", report.coefficient_of_variation),
                report.xyz_class.to_string(),
                report.combined_class().to_string(),
            ])
            .map_err(|e| AnalyticsError::Export(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| AnalyticsError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stockwise_catalog::CatalogItem;
    use stockwise_core::ProductId;

    use crate::abc::AbcClass;
    use crate::xyz::XyzClass;

    fn render(reports: &[ClassificationReport]) -> String {
        String::from_utf8(to_csv(reports).unwrap()).unwrap()
    }

    #[test]
    fn empty_list_is_header_only() {
        assert_eq!(
            render(&[]),
            "id,name,category,total_revenue,revenue_share_percentage,abc_class,coefficient_of_variation,xyz_class,combined_class\n"
        );
    }

    #[test]
    fn rows_are_formatted_and_quoted() {
        let item = CatalogItem::new(ProductId::from_u128(7), "Bolt, M8 \"zinc\"", dec!(0.2), "hardware").unwrap();
        let report = ClassificationReport {
            total_revenue: dec!(1234.5),
            revenue_share_percentage: 66.67,
            abc_class: AbcClass::A,
            coefficient_of_variation: 0.52345,
            xyz_class: XyzClass::Y,
            ..ClassificationReport::new(item)
        };

        let csv = render(&[report]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            format!(
                "{},\"Bolt, M8 \"\"zinc\"\"\",hardware,1234.50,66.67,A,0.523,Y,AY",
                ProductId::from_u128(7)
            )
        );
    }

    #[test]
    fn file_name_carries_window() {
        assert_eq!(file_name(12), "report_12m.csv");
    }
}
