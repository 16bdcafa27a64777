use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Revenue and units sold over a set of days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SalesReport {
    #[schema(example = 250)]
    pub total_sales: Decimal,
    #[schema(example = 5)]
    pub total_quantity: i64,
}

impl SalesReport {
    pub fn empty() -> Self {
        Self {
            total_sales: Decimal::ZERO,
            total_quantity: 0,
        }
    }
}

/// One row of the top-selling ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TopSellingItem {
    #[schema(example = "Latte")]
    pub coffee_name: String,
    #[schema(example = 42)]
    pub total_quantity: i64,
}

/// Query parameters for the daily report
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DailyReportQuery {
    /// Day to report on (YYYY-MM-DD)
    pub report_date: NaiveDate,
}

/// Query parameters for the range report
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangeReportQuery {
    /// First day included (YYYY-MM-DD)
    pub start_date: NaiveDate,
    /// Last day included (YYYY-MM-DD)
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_serializes_zeroes() {
        let json = serde_json::to_value(SalesReport::empty()).unwrap();
        assert_eq!(json["total_sales"].as_f64(), Some(0.0));
        assert_eq!(json["total_quantity"], 0);
    }

    #[test]
    fn test_range_query_parses_iso_dates() {
        let query: RangeReportQuery =
            serde_json::from_str(r#"{"start_date": "2024-06-01", "end_date": "2024-06-07"}"#)
                .unwrap();
        assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(query.end_date, NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
    }
}
