// Sales: atomic stock consumption and the sales ledger

pub mod consumption;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use consumption::{PriceCalculator, StockRequirement};
pub use models::{Sale, SaleRequest};
pub use repository::SalesRepository;
pub use service::SaleService;
