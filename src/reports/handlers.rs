// HTTP handlers for sales reports

use axum::{
    extract::{Query, State},
    Json,
};

use crate::auth::RequireStaff;
use crate::error::ApiError;
use crate::reports::models::{DailyReportQuery, RangeReportQuery, SalesReport, TopSellingItem};
use crate::AppState;

/// Handler for GET /sales/reports/daily/
#[utoipa::path(
    get,
    path = "/sales/reports/daily/",
    params(DailyReportQuery),
    responses(
        (status = 200, description = "Totals for one day", body = SalesReport),
        (status = 400, description = "Missing or malformed report_date")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn daily_report(
    State(state): State<AppState>,
    _staff: RequireStaff,
    Query(query): Query<DailyReportQuery>,
) -> Result<Json<SalesReport>, ApiError> {
    let report = state.report_service.daily_report(query.report_date).await?;
    Ok(Json(report))
}

/// Handler for GET /sales/reports/weekly/
#[utoipa::path(
    get,
    path = "/sales/reports/weekly/",
    responses((status = 200, description = "Totals for the last seven days", body = SalesReport)),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn weekly_report(
    State(state): State<AppState>,
    _staff: RequireStaff,
) -> Result<Json<SalesReport>, ApiError> {
    let report = state.report_service.weekly_report().await?;
    Ok(Json(report))
}

/// Handler for GET /sales/reports/top-selling/
#[utoipa::path(
    get,
    path = "/sales/reports/top-selling/",
    responses((status = 200, description = "Coffees ranked by units sold", body = Vec<TopSellingItem>)),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn top_selling(
    State(state): State<AppState>,
    _staff: RequireStaff,
) -> Result<Json<Vec<TopSellingItem>>, ApiError> {
    let items = state.report_service.top_selling().await?;
    Ok(Json(items))
}

/// Handler for GET /sales/reports/range/
#[utoipa::path(
    get,
    path = "/sales/reports/range/",
    params(RangeReportQuery),
    responses(
        (status = 200, description = "Totals for an inclusive date range", body = SalesReport),
        (status = 400, description = "Malformed dates or start_date after end_date")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn range_report(
    State(state): State<AppState>,
    _staff: RequireStaff,
    Query(query): Query<RangeReportQuery>,
) -> Result<Json<SalesReport>, ApiError> {
    let report = state
        .report_service
        .range_report(query.start_date, query.end_date)
        .await?;
    Ok(Json(report))
}
