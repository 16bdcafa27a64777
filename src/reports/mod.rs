// Reporting over the sales ledger

pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod window;

pub use models::{SalesReport, TopSellingItem};
pub use repository::ReportRepository;
pub use service::ReportService;
pub use window::DateRange;
