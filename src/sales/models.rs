use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A completed sale in the append-only ledger
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sale {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub coffee_id: i32,
    #[schema(example = 5)]
    pub quantity: i32,
    #[schema(example = 250)]
    pub total_price: Decimal,
    pub sale_date: NaiveDate,
}

/// Payload for POST /sales/
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaleRequest {
    #[schema(example = 1)]
    pub coffee_id: i32,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 5, minimum = 1)]
    pub quantity: i32,
}
