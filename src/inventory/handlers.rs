// HTTP handlers for stock levels

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::auth::{RequireManager, RequireStaff};
use crate::catalog::Coffee;
use crate::error::ApiError;
use crate::inventory::models::{MilkStock, StockUpdate};
use crate::AppState;

/// Handler for PUT /coffees/{id}/stock
#[utoipa::path(
    put,
    path = "/coffees/{id}/stock",
    params(("id" = i32, Path, description = "Coffee ID")),
    request_body = StockUpdate,
    responses(
        (status = 200, description = "Stock replaced", body = Coffee),
        (status = 404, description = "Coffee not found")
    ),
    security(("bearer_auth" = [])),
    tag = "inventory"
)]
pub async fn update_coffee_stock(
    State(state): State<AppState>,
    _manager: RequireManager,
    Path(id): Path<i32>,
    Json(payload): Json<StockUpdate>,
) -> Result<Json<Coffee>, ApiError> {
    payload.validate()?;
    let coffee = state
        .inventory_service
        .set_coffee_stock(id, payload.new_stock)
        .await?;
    Ok(Json(coffee))
}

/// Handler for GET /sales/milk/stock
#[utoipa::path(
    get,
    path = "/sales/milk/stock",
    responses((status = 200, description = "Current milk stock", body = MilkStock)),
    security(("bearer_auth" = [])),
    tag = "inventory"
)]
pub async fn get_milk_stock(
    State(state): State<AppState>,
    _staff: RequireStaff,
) -> Result<Json<MilkStock>, ApiError> {
    let milk = state.inventory_service.milk_stock().await?;
    Ok(Json(milk))
}

/// Handler for PUT /sales/milk/stock
#[utoipa::path(
    put,
    path = "/sales/milk/stock",
    request_body = StockUpdate,
    responses(
        (status = 200, description = "Milk stock replaced", body = MilkStock),
        (status = 404, description = "Milk stock row missing")
    ),
    security(("bearer_auth" = [])),
    tag = "inventory"
)]
pub async fn update_milk_stock(
    State(state): State<AppState>,
    _manager: RequireManager,
    Json(payload): Json<StockUpdate>,
) -> Result<Json<MilkStock>, ApiError> {
    payload.validate()?;
    let milk = state.inventory_service.set_milk_stock(payload.new_stock).await?;
    Ok(Json(milk))
}
