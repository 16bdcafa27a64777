use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_stock;

/// The shared milk pool
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MilkStock {
    #[schema(example = 1)]
    pub id: i32,
    /// Remaining milk in milliliters
    #[schema(example = 10000)]
    pub stock_ml: Decimal,
}

/// Payload for the stock overwrite endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StockUpdate {
    #[validate(custom = "validate_stock")]
    #[schema(example = 2500)]
    pub new_stock: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_stock_update_validation() {
        let ok: StockUpdate = serde_json::from_str(r#"{"new_stock": 0}"#).unwrap();
        assert!(ok.validate().is_ok());

        let negative = StockUpdate { new_stock: dec!(-10) };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_stock_update_rejects_values_the_column_cannot_hold() {
        let too_large: StockUpdate =
            serde_json::from_str(r#"{"new_stock": 100000000000}"#).unwrap();
        assert!(too_large.validate().is_err());

        let too_precise = StockUpdate { new_stock: dec!(10.125) };
        assert!(too_precise.validate().is_err());

        let largest = StockUpdate { new_stock: dec!(9999999999.99) };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_stock_update_requires_field() {
        assert!(serde_json::from_str::<StockUpdate>("{}").is_err());
    }
}
