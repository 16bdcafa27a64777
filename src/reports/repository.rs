use sqlx::PgPool;

use crate::error::ApiError;
use crate::reports::{
    models::{SalesReport, TopSellingItem},
    window::DateRange,
};

/// Read-only aggregations over the sales ledger
#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Totals for sales dated within `range`; no matching sales yields zeroes
    pub async fn totals(&self, range: DateRange) -> Result<SalesReport, ApiError> {
        let report = sqlx::query_as::<_, SalesReport>(
            r#"
            SELECT COALESCE(SUM(total_price), 0) AS total_sales,
                   COALESCE(SUM(quantity), 0)::BIGINT AS total_quantity
            FROM sales
            WHERE sale_date BETWEEN $1 AND $2
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_one(&self.pool)
        .await?;

        Ok(report)
    }

    /// Units sold per coffee across all time, best sellers first
    pub async fn top_selling(&self) -> Result<Vec<TopSellingItem>, ApiError> {
        let items = sqlx::query_as::<_, TopSellingItem>(
            r#"
            SELECT c.name AS coffee_name,
                   SUM(s.quantity)::BIGINT AS total_quantity
            FROM sales s
            JOIN coffees c ON c.id = s.coffee_id
            GROUP BY c.id, c.name
            ORDER BY total_quantity DESC, c.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
