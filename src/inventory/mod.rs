// Stock levels: per-coffee bean stock and the shared milk pool

pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use models::{MilkStock, StockUpdate};
pub use repository::MilkRepository;
pub use service::InventoryService;
