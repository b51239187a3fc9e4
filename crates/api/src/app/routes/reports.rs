use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockwise_analytics::{export, CategoryBreakdown, DashboardSummary};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/abc-xyz-analysis", get(abc_xyz_analysis))
        .route("/abc-xyz-analysis/summary", get(abc_xyz_summary))
        .route("/abc-xyz-analysis/export.csv", get(abc_xyz_export))
        .route("/categories", get(categories))
}

pub async fn abc_xyz_analysis(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ReportQuery>,
) -> axum::response::Response {
    let months = match errors::parse_months(query.months.as_deref(), services.default_months()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let output = match services.analyze(months).await {
        Ok(o) => o,
        Err(resp) => return resp,
    };

    Json(dto::reports_to_dto(&output, services.public_url())).into_response()
}

pub async fn abc_xyz_summary(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ReportQuery>,
) -> axum::response::Response {
    let months = match errors::parse_months(query.months.as_deref(), services.default_months()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let output = match services.analyze(months).await {
        Ok(o) => o,
        Err(resp) => return resp,
    };

    Json(dto::SummaryResponse {
        window: dto::WindowDto::new(months, &output),
        summary: DashboardSummary::from_reports(&output.reports),
    })
    .into_response()
}

pub async fn abc_xyz_export(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ReportQuery>,
) -> axum::response::Response {
    let months = match errors::parse_months(query.months.as_deref(), services.default_months()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let output = match services.analyze(months).await {
        Ok(o) => o,
        Err(resp) => return resp,
    };

    let body = match export::to_csv(&output.reports) {
        Ok(b) => b,
        Err(e) => return errors::analytics_error_to_response(e),
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export::file_name(months)),
            ),
        ],
        body,
    )
        .into_response()
}

pub async fn categories(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ReportQuery>,
) -> axum::response::Response {
    let months = match errors::parse_months(query.months.as_deref(), services.default_months()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let output = match services.analyze(months).await {
        Ok(o) => o,
        Err(resp) => return resp,
    };

    Json(dto::CategoriesResponse {
        window: dto::WindowDto::new(months, &output),
        breakdown: CategoryBreakdown::from_reports(&output.reports),
    })
    .into_response()
}
