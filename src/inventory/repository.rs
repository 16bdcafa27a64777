use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::db::MILK_STOCK_ID;
use crate::error::ApiError;
use crate::inventory::models::MilkStock;

/// Repository for the singleton milk pool
#[derive(Clone)]
pub struct MilkRepository {
    pool: PgPool,
}

impl MilkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Current milk stock
    pub async fn get(&self) -> Result<Option<MilkStock>, ApiError> {
        let milk = sqlx::query_as::<_, MilkStock>("SELECT id, stock_ml FROM milk_stock WHERE id = $1")
            .bind(MILK_STOCK_ID)
            .fetch_optional(&self.pool)
            .await?;

        Ok(milk)
    }

    /// Overwrite the milk stock
    pub async fn set(&self, stock_ml: Decimal) -> Result<Option<MilkStock>, ApiError> {
        let milk = sqlx::query_as::<_, MilkStock>(
            "UPDATE milk_stock SET stock_ml = $1 WHERE id = $2 RETURNING id, stock_ml",
        )
        .bind(stock_ml)
        .bind(MILK_STOCK_ID)
        .fetch_optional(&self.pool)
        .await?;

        Ok(milk)
    }

    /// Load the milk pool inside a transaction and hold its row lock until commit
    pub async fn find_for_update(conn: &mut PgConnection) -> Result<Option<MilkStock>, sqlx::Error> {
        sqlx::query_as::<_, MilkStock>(
            "SELECT id, stock_ml FROM milk_stock WHERE id = $1 FOR UPDATE",
        )
        .bind(MILK_STOCK_ID)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Subtract used milk inside the sale transaction
    pub async fn debit(conn: &mut PgConnection, milk_ml: Decimal) -> Result<Decimal, sqlx::Error> {
        sqlx::query_scalar::<_, Decimal>(
            "UPDATE milk_stock SET stock_ml = stock_ml - $1 WHERE id = $2 RETURNING stock_ml",
        )
        .bind(milk_ml)
        .bind(MILK_STOCK_ID)
        .fetch_one(&mut *conn)
        .await
    }
}
