use rust_decimal::Decimal;

use crate::catalog::Recipe;
use crate::error::{ApiError, StockResource};
use crate::validation::max_total_amount;

/// Ingredients a sale will consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockRequirement {
    pub coffee_grams: Decimal,
    pub milk_ml: Decimal,
}

impl StockRequirement {
    /// Scale a recipe's per-unit rates by the quantity sold
    pub fn for_sale(recipe: &Recipe, quantity: i32) -> Result<Self, ApiError> {
        let units = positive_units(quantity)?;

        let coffee_grams = recipe
            .coffee_grams
            .checked_mul(units)
            .ok_or_else(quantity_too_large)?;
        let milk_ml = recipe
            .milk_ml
            .checked_mul(units)
            .ok_or_else(quantity_too_large)?;

        Ok(Self {
            coffee_grams,
            milk_ml,
        })
    }

    /// Fail with `InsufficientStock(coffee)` unless `available_grams` covers the sale
    pub fn check_coffee(&self, available_grams: Decimal) -> Result<(), ApiError> {
        ensure_available(StockResource::Coffee, available_grams, self.coffee_grams)
    }

    /// Fail with `InsufficientStock(milk)` unless `available_ml` covers the sale
    pub fn check_milk(&self, available_ml: Decimal) -> Result<(), ApiError> {
        ensure_available(StockResource::Milk, available_ml, self.milk_ml)
    }
}

/// Service for calculating sale prices
pub struct PriceCalculator;

impl PriceCalculator {
    /// Total charged for `quantity` units at `unit_price`
    ///
    /// Fails when the total does not fit the sales ledger's price column.
    pub fn calculate_total(unit_price: Decimal, quantity: i32) -> Result<Decimal, ApiError> {
        let units = positive_units(quantity)?;
        let total = unit_price
            .checked_mul(units)
            .ok_or_else(quantity_too_large)?;

        if total > max_total_amount() {
            return Err(ApiError::BadRequest(format!(
                "Total price {} exceeds the largest recordable sale of {}",
                total,
                max_total_amount()
            )));
        }
        Ok(total)
    }
}

fn ensure_available(
    resource: StockResource,
    available: Decimal,
    required: Decimal,
) -> Result<(), ApiError> {
    if available < required {
        Err(ApiError::InsufficientStock { resource })
    } else {
        Ok(())
    }
}

fn positive_units(quantity: i32) -> Result<Decimal, ApiError> {
    if quantity <= 0 {
        return Err(ApiError::BadRequest(format!(
            "Quantity must be positive, got {}",
            quantity
        )));
    }
    Ok(Decimal::from(quantity))
}

fn quantity_too_large() -> ApiError {
    ApiError::BadRequest("Quantity is too large".to_string())
}
