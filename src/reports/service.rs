use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::error::ApiError;
use crate::reports::{
    models::{SalesReport, TopSellingItem},
    repository::ReportRepository,
    window::DateRange,
};

/// Service for sales reporting
#[derive(Clone)]
pub struct ReportService {
    repo: ReportRepository,
}

impl ReportService {
    pub fn new(repo: ReportRepository) -> Self {
        Self { repo }
    }

    pub async fn daily_report(&self, day: NaiveDate) -> Result<SalesReport, ApiError> {
        self.repo.totals(DateRange::single(day)).await
    }

    /// Last seven days including today, evaluated on every call
    pub async fn weekly_report(&self) -> Result<SalesReport, ApiError> {
        self.weekly_report_at(Utc::now().date_naive()).await
    }

    pub async fn weekly_report_at(&self, today: NaiveDate) -> Result<SalesReport, ApiError> {
        let window = DateRange::weekly_window(today);
        debug!("Weekly report from {} to {}", window.start, window.end);
        self.repo.totals(window).await
    }

    pub async fn range_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<SalesReport, ApiError> {
        let range = DateRange::new(start, end)?;
        self.repo.totals(range).await
    }

    pub async fn top_selling(&self) -> Result<Vec<TopSellingItem>, ApiError> {
        self.repo.top_selling().await
    }
}
