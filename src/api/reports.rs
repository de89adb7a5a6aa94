//! Report API endpoints

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReportQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Download the maintenance report as a PDF
#[utoipa::path(
    get,
    path = "/reports/pdf",
    tag = "reports",
    params(
        ("from" = Option<String>, Query, description = "Earliest maintenance date (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Latest maintenance date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "PDF report", content_type = "application/pdf")
    )
)]
pub async fn download_pdf(
    State(state): State<crate::AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<(HeaderMap, Vec<u8>)> {
    let bytes = state
        .services
        .reports
        .maintenance_report(query.from, query.to)
        .await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=maintenance-report.pdf"),
    );

    Ok((headers, bytes))
}
