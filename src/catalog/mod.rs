// Coffee products and their recipes

pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use models::{Coffee, CoffeeDetails, CreateCoffee, CreateRecipe, Recipe, UpdateCoffee, UpdateRecipe};
pub use repository::{CoffeeRepository, RecipeRepository};
pub use service::CatalogService;
