use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::error::ApiError;
use crate::sales::models::Sale;

/// Repository for the sales ledger
#[derive(Clone)]
pub struct SalesRepository {
    pool: PgPool,
}

impl SalesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a sale inside the sale transaction
    pub async fn insert(
        conn: &mut PgConnection,
        coffee_id: i32,
        quantity: i32,
        total_price: Decimal,
        sale_date: NaiveDate,
    ) -> Result<Sale, sqlx::Error> {
        sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (coffee_id, quantity, total_price, sale_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, coffee_id, quantity, total_price, sale_date
            "#,
        )
        .bind(coffee_id)
        .bind(quantity)
        .bind(total_price)
        .bind(sale_date)
        .fetch_one(&mut *conn)
        .await
    }

    /// The whole ledger in insertion order
    pub async fn find_all(&self) -> Result<Vec<Sale>, ApiError> {
        let sales = sqlx::query_as::<_, Sale>(
            "SELECT id, coffee_id, quantity, total_price, sale_date FROM sales ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }
}
