use tracing::info;

use crate::catalog::{
    models::{Coffee, CoffeeDetails, CreateCoffee, CreateRecipe, Recipe, UpdateCoffee, UpdateRecipe},
    repository::{CoffeeRepository, RecipeRepository},
};
use crate::error::ApiError;

/// Service for coffee and recipe management
#[derive(Clone)]
pub struct CatalogService {
    coffees: CoffeeRepository,
    recipes: RecipeRepository,
}

impl CatalogService {
    pub fn new(coffees: CoffeeRepository, recipes: RecipeRepository) -> Self {
        Self { coffees, recipes }
    }

    pub async fn create_coffee(&self, payload: CreateCoffee) -> Result<Coffee, ApiError> {
        let coffee = self.coffees.create(&payload).await?;
        info!("Created coffee '{}' with id {}", coffee.name, coffee.id);
        Ok(coffee)
    }

    pub async fn list_coffees(&self) -> Result<Vec<Coffee>, ApiError> {
        self.coffees.find_all().await
    }

    pub async fn update_coffee(&self, id: i32, payload: UpdateCoffee) -> Result<Coffee, ApiError> {
        let coffee = self
            .coffees
            .update(id, &payload)
            .await?
            .ok_or_else(|| ApiError::not_found("Coffee", id))?;

        info!("Updated coffee with id {}", id);
        Ok(coffee)
    }

    pub async fn delete_coffee(&self, id: i32) -> Result<(), ApiError> {
        if !self.coffees.delete(id).await? {
            return Err(ApiError::not_found("Coffee", id));
        }
        info!("Deleted coffee with id {}", id);
        Ok(())
    }

    /// Create a recipe for an existing coffee
    pub async fn create_recipe(&self, payload: CreateRecipe) -> Result<Recipe, ApiError> {
        self.ensure_coffee_exists(payload.coffee_id).await?;

        let recipe = self.recipes.create(&payload).await?;
        info!("Created recipe {} for coffee {}", recipe.id, recipe.coffee_id);
        Ok(recipe)
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.recipes.find_all().await
    }

    /// A coffee and its recipe; either missing is a 404
    pub async fn coffee_details(&self, coffee_id: i32) -> Result<CoffeeDetails, ApiError> {
        let coffee = self
            .coffees
            .find_by_id(coffee_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Coffee", coffee_id))?;

        let recipe = self
            .recipes
            .find_by_coffee_id(coffee_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Recipe for coffee", coffee_id))?;

        Ok(CoffeeDetails { coffee, recipe })
    }

    pub async fn update_recipe(&self, id: i32, payload: UpdateRecipe) -> Result<Recipe, ApiError> {
        if let Some(coffee_id) = payload.coffee_id {
            self.ensure_coffee_exists(coffee_id).await?;
        }

        let recipe = self
            .recipes
            .update(id, &payload)
            .await?
            .ok_or_else(|| ApiError::not_found("Recipe", id))?;

        info!("Updated recipe with id {}", id);
        Ok(recipe)
    }

    pub async fn delete_recipe(&self, id: i32) -> Result<(), ApiError> {
        if !self.recipes.delete(id).await? {
            return Err(ApiError::not_found("Recipe", id));
        }
        info!("Deleted recipe with id {}", id);
        Ok(())
    }

    async fn ensure_coffee_exists(&self, coffee_id: i32) -> Result<(), ApiError> {
        match self.coffees.find_by_id(coffee_id).await? {
            Some(_) => Ok(()),
            None => Err(ApiError::not_found("Coffee", coffee_id)),
        }
    }
}
