use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{validate_not_blank, validate_price, validate_recipe_amount, validate_stock};

/// A coffee product and its remaining bean stock
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Coffee {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Latte")]
    pub name: String,
    /// Unit price
    #[schema(example = 50)]
    pub price: Decimal,
    /// Remaining coffee beans in grams
    #[schema(example = 1000)]
    pub stock_grams: Decimal,
}

/// Payload for POST /coffees/
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCoffee {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "Latte")]
    pub name: String,
    #[validate(custom = "validate_price")]
    #[schema(example = 50)]
    pub price: Decimal,
    #[validate(custom = "validate_stock")]
    #[schema(example = 1000)]
    pub stock_grams: Decimal,
}

/// Payload for PUT /coffees/{id}; omitted fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCoffee {
    #[validate(custom = "validate_not_blank")]
    pub name: Option<String>,
    #[validate(custom = "validate_price")]
    pub price: Option<Decimal>,
    #[validate(custom = "validate_stock")]
    pub stock_grams: Option<Decimal>,
}

/// Per-unit ingredient consumption of one coffee
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Recipe {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub coffee_id: i32,
    /// Milk used per unit sold, in milliliters
    #[schema(example = 150)]
    pub milk_ml: Decimal,
    /// Coffee used per unit sold, in grams
    #[schema(example = 18)]
    pub coffee_grams: Decimal,
}

/// Payload for POST /coffees/recipes/
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipe {
    pub coffee_id: i32,
    #[validate(custom = "validate_recipe_amount")]
    pub milk_ml: Decimal,
    #[validate(custom = "validate_recipe_amount")]
    pub coffee_grams: Decimal,
}

/// Payload for PUT /coffees/recipes/{id}; omitted fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipe {
    pub coffee_id: Option<i32>,
    #[validate(custom = "validate_recipe_amount")]
    pub milk_ml: Option<Decimal>,
    #[validate(custom = "validate_recipe_amount")]
    pub coffee_grams: Option<Decimal>,
}

/// A coffee together with its recipe
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CoffeeDetails {
    pub coffee: Coffee,
    pub recipe: Recipe,
}
