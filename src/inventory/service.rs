use rust_decimal::Decimal;
use tracing::info;

use crate::catalog::{Coffee, CoffeeRepository};
use crate::error::ApiError;
use crate::inventory::{models::MilkStock, repository::MilkRepository};

/// Direct stock overwrites performed by managers
#[derive(Clone)]
pub struct InventoryService {
    coffees: CoffeeRepository,
    milk: MilkRepository,
}

impl InventoryService {
    pub fn new(coffees: CoffeeRepository, milk: MilkRepository) -> Self {
        Self { coffees, milk }
    }

    /// Replace the bean stock of one coffee
    pub async fn set_coffee_stock(&self, coffee_id: i32, stock_grams: Decimal) -> Result<Coffee, ApiError> {
        let coffee = self
            .coffees
            .set_stock(coffee_id, stock_grams)
            .await?
            .ok_or_else(|| ApiError::not_found("Coffee", coffee_id))?;

        info!("Coffee {} stock set to {} g", coffee_id, stock_grams);
        Ok(coffee)
    }

    pub async fn milk_stock(&self) -> Result<MilkStock, ApiError> {
        self.milk.get().await?.ok_or_else(milk_not_found)
    }

    /// Replace the shared milk stock
    pub async fn set_milk_stock(&self, stock_ml: Decimal) -> Result<MilkStock, ApiError> {
        let milk = self.milk.set(stock_ml).await?.ok_or_else(milk_not_found)?;
        info!("Milk stock set to {} ml", stock_ml);
        Ok(milk)
    }
}

pub(crate) fn milk_not_found() -> ApiError {
    ApiError::not_found("Milk stock", crate::db::MILK_STOCK_ID)
}
