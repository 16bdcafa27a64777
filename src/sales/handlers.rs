// HTTP handlers for the sales ledger

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::auth::RequireStaff;
use crate::error::ApiError;
use crate::sales::models::{Sale, SaleRequest};
use crate::AppState;

/// Handler for POST /sales/
///
/// Debits coffee and milk stock and records the sale atomically.
#[utoipa::path(
    post,
    path = "/sales/",
    request_body = SaleRequest,
    responses(
        (status = 201, description = "Sale recorded", body = Sale),
        (status = 400, description = "Invalid quantity or insufficient stock"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Coffee or recipe not found")
    ),
    security(("bearer_auth" = [])),
    tag = "sales"
)]
pub async fn record_sale(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Json(payload): Json<SaleRequest>,
) -> Result<(StatusCode, Json<Sale>), ApiError> {
    tracing::debug!(
        "{} selling {} of coffee {}",
        user.username,
        payload.quantity,
        payload.coffee_id
    );
    payload.validate()?;

    let sale = state
        .sale_service
        .record_sale(payload.coffee_id, payload.quantity)
        .await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

/// Handler for GET /sales/
#[utoipa::path(
    get,
    path = "/sales/",
    responses(
        (status = 200, description = "All recorded sales", body = Vec<Sale>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "sales"
)]
pub async fn list_sales(
    State(state): State<AppState>,
    _staff: RequireStaff,
) -> Result<Json<Vec<Sale>>, ApiError> {
    let sales = state.sale_service.list_sales().await?;
    Ok(Json(sales))
}
