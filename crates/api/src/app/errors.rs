use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockwise_analytics::AnalyticsError;
use stockwise_core::DomainError;

pub fn analytics_error_to_response(err: AnalyticsError) -> axum::response::Response {
    match err {
        AnalyticsError::InvalidInput(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_input", msg),
        AnalyticsError::Source(DomainError::Unavailable(msg)) => {
            tracing::warn!(error = %msg, "report source unavailable");
            json_error(StatusCode::SERVICE_UNAVAILABLE, "source_unavailable", msg)
        }
        AnalyticsError::Source(e) => {
            tracing::warn!(error = %e, "report source failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "source_error", e.to_string())
        }
        AnalyticsError::Export(msg) => {
            tracing::warn!(error = %msg, "report export failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "export_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// `months` query value → window length; absent means `default`.
pub fn parse_months(raw: Option<&str>, default: i32) -> Result<i32, axum::response::Response> {
    match raw {
        None => Ok(default),
        Some(s) => s.trim().parse::<i32>().map_err(|_| {
            json_error(
                StatusCode::BAD_REQUEST,
                "invalid_months",
                format!("months must be an integer (got {s:?})"),
            )
        }),
    }
}
