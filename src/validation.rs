// Validation utilities module
// Custom validators for domain-specific rules used by the request DTOs

use rust_decimal::Decimal;
use validator::ValidationError;

/// Decimal places stored for every price and stock amount
pub const AMOUNT_SCALE: u32 = 2;

/// Largest value a `NUMERIC(precision, 2)` column accepts
pub fn numeric_max(precision: u32) -> Decimal {
    Decimal::from(10i64.pow(precision - AMOUNT_SCALE)) - Decimal::new(1, AMOUNT_SCALE)
}

/// Upper bound of `coffees.price` and the recipe rates, `NUMERIC(10, 2)`
pub fn max_unit_amount() -> Decimal {
    numeric_max(10)
}

/// Upper bound of the stock counters and `sales.total_price`, `NUMERIC(12, 2)`
pub fn max_total_amount() -> Decimal {
    numeric_max(12)
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Non-negative, at most two decimal places, and no larger than `max`
fn check_amount(amount: &Decimal, max: Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(validation_error(
            "must_not_be_negative",
            "Value must be zero or greater",
        ));
    }
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(validation_error(
            "too_many_decimal_places",
            "Value must have at most two decimal places",
        ));
    }
    if *amount > max {
        return Err(validation_error("too_large", "Value is too large"));
    }
    Ok(())
}

/// Validates a coffee price
pub fn validate_price(amount: &Decimal) -> Result<(), ValidationError> {
    check_amount(amount, max_unit_amount())
}

/// Validates a per-unit recipe rate (grams or milliliters)
pub fn validate_recipe_amount(amount: &Decimal) -> Result<(), ValidationError> {
    check_amount(amount, max_unit_amount())
}

/// Validates a bean or milk stock level
pub fn validate_stock(amount: &Decimal) -> Result<(), ValidationError> {
    check_amount(amount, max_total_amount())
}

/// Validates that a display name contains something other than whitespace
pub fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(validation_error("must_not_be_blank", "Name must not be blank"))
    } else {
        Ok(())
    }
}
