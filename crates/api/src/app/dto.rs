use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockwise_analytics::{
    AbcClass, AnalysisOutput, CategoryBreakdown, ClassificationReport, CombinedClass, DashboardSummary, XyzClass,
};
use stockwise_catalog::CatalogItem;
use stockwise_core::ProductId;

// -------------------------
// Request DTOs
// -------------------------

/// Query string shared by every report route.
///
/// `months` stays raw so a malformed value gets our JSON error body instead
/// of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub months: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub category: String,
    pub image_url: Option<String>,
}

impl ItemDto {
    pub fn from_item(item: &CatalogItem, public_url: &str) -> Self {
        Self {
            id: item.id_typed(),
            name: item.name().to_string(),
            price: item.price(),
            description: item.description().map(str::to_string),
            category: item.category().to_string(),
            image_url: item.image().and_then(|img| img.resolve(public_url)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub item: ItemDto,
    pub total_revenue: Decimal,
    pub revenue_share_percentage: f64,
    pub abc_class: AbcClass,
    pub coefficient_of_variation: f64,
    pub xyz_class: XyzClass,
    pub combined_class: CombinedClass,
}

impl ReportDto {
    pub fn from_report(report: &ClassificationReport, public_url: &str) -> Self {
        Self {
            item: ItemDto::from_item(&report.item, public_url),
            total_revenue: report.total_revenue,
            revenue_share_percentage: report.revenue_share_percentage,
            abc_class: report.abc_class,
            coefficient_of_variation: report.coefficient_of_variation,
            xyz_class: report.xyz_class,
            combined_class: report.combined_class(),
        }
    }
}

pub fn reports_to_dto(output: &AnalysisOutput, public_url: &str) -> Vec<ReportDto> {
    output
        .reports
        .iter()
        .map(|r| ReportDto::from_report(r, public_url))
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowDto {
    pub months: i32,
    pub start: String,
    pub end: String,
}

impl WindowDto {
    pub fn new(months: i32, output: &AnalysisOutput) -> Self {
        Self {
            months,
            start: output.period.start().to_rfc3339(),
            end: output.period.end().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub window: WindowDto,
    #[serde(flatten)]
    pub summary: DashboardSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub window: WindowDto,
    #[serde(flatten)]
    pub breakdown: CategoryBreakdown,
}
