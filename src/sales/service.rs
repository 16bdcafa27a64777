use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::catalog::{CoffeeRepository, RecipeRepository};
use crate::error::ApiError;
use crate::inventory::{service::milk_not_found, MilkRepository};
use crate::sales::{
    consumption::{PriceCalculator, StockRequirement},
    models::Sale,
    repository::SalesRepository,
};

/// Service for recording sales against inventory
#[derive(Clone)]
pub struct SaleService {
    pool: PgPool,
    sales_repo: SalesRepository,
}

impl SaleService {
    pub fn new(pool: PgPool, sales_repo: SalesRepository) -> Self {
        Self { pool, sales_repo }
    }

    /// Record a sale dated today
    pub async fn record_sale(&self, coffee_id: i32, quantity: i32) -> Result<Sale, ApiError> {
        self.record_sale_on(coffee_id, quantity, Utc::now().date_naive())
            .await
    }

    /// Record a sale with an explicit sale date
    ///
    /// # Transaction Behavior
    /// - Locks the coffee row, then the milk row (`FOR UPDATE`, always in that order)
    /// - Any early return drops `tx` and rolls back, leaving stock untouched
    pub async fn record_sale_on(
        &self,
        coffee_id: i32,
        quantity: i32,
        sale_date: NaiveDate,
    ) -> Result<Sale, ApiError> {
        debug!("Recording sale: coffee_id={}, quantity={}", coffee_id, quantity);

        let mut tx = self.pool.begin().await?;

        let coffee = CoffeeRepository::find_for_update(&mut *tx, coffee_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Coffee", coffee_id))?;

        let recipe = RecipeRepository::find_by_coffee_id_in(&mut *tx, coffee_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Recipe for coffee", coffee_id))?;

        let requirement = StockRequirement::for_sale(&recipe, quantity)?;
        requirement.check_coffee(coffee.stock_grams)?;

        let milk = MilkRepository::find_for_update(&mut *tx)
            .await?
            .ok_or_else(milk_not_found)?;
        requirement.check_milk(milk.stock_ml)?;

        let total_price = PriceCalculator::calculate_total(coffee.price, quantity)?;

        let remaining_grams =
            CoffeeRepository::debit_stock(&mut *tx, coffee_id, requirement.coffee_grams).await?;
        let remaining_ml = MilkRepository::debit(&mut *tx, requirement.milk_ml).await?;
        let sale =
            SalesRepository::insert(&mut *tx, coffee_id, quantity, total_price, sale_date).await?;

        tx.commit().await?;

        info!(
            "Recorded sale {}: {} x '{}' for {} (coffee left {} g, milk left {} ml)",
            sale.id, quantity, coffee.name, total_price, remaining_grams, remaining_ml
        );
        Ok(sale)
    }

    /// Every recorded sale
    pub async fn list_sales(&self) -> Result<Vec<Sale>, ApiError> {
        self.sales_repo.find_all().await
    }
}
