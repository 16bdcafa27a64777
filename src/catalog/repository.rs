use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::catalog::models::{Coffee, CreateCoffee, CreateRecipe, Recipe, UpdateCoffee, UpdateRecipe};
use crate::error::ApiError;

/// Repository for coffee products
#[derive(Clone)]
pub struct CoffeeRepository {
    pool: PgPool,
}

impl CoffeeRepository {
    /// Create a new CoffeeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a coffee product
    pub async fn create(&self, payload: &CreateCoffee) -> Result<Coffee, ApiError> {
        let coffee = sqlx::query_as::<_, Coffee>(
            r#"
            INSERT INTO coffees (name, price, stock_grams)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, stock_grams
            "#,
        )
        .bind(payload.name.trim())
        .bind(payload.price)
        .bind(payload.stock_grams)
        .fetch_one(&self.pool)
        .await?;

        Ok(coffee)
    }

    /// All coffee products ordered by id
    pub async fn find_all(&self) -> Result<Vec<Coffee>, ApiError> {
        let coffees = sqlx::query_as::<_, Coffee>(
            "SELECT id, name, price, stock_grams FROM coffees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(coffees)
    }

    /// Find a coffee product by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Coffee>, ApiError> {
        let coffee = sqlx::query_as::<_, Coffee>(
            "SELECT id, name, price, stock_grams FROM coffees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(coffee)
    }

    /// Load a coffee inside a transaction and hold its row lock until commit
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: i32,
    ) -> Result<Option<Coffee>, sqlx::Error> {
        sqlx::query_as::<_, Coffee>(
            "SELECT id, name, price, stock_grams FROM coffees WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Apply the provided fields, keeping existing values for omitted ones
    pub async fn update(&self, id: i32, payload: &UpdateCoffee) -> Result<Option<Coffee>, ApiError> {
        let coffee = sqlx::query_as::<_, Coffee>(
            r#"
            UPDATE coffees
            SET name = COALESCE($1, name),
                price = COALESCE($2, price),
                stock_grams = COALESCE($3, stock_grams)
            WHERE id = $4
            RETURNING id, name, price, stock_grams
            "#,
        )
        .bind(payload.name.as_deref().map(str::trim))
        .bind(payload.price)
        .bind(payload.stock_grams)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(coffee)
    }

    /// Overwrite the bean stock of a coffee
    pub async fn set_stock(&self, id: i32, stock_grams: Decimal) -> Result<Option<Coffee>, ApiError> {
        let coffee = sqlx::query_as::<_, Coffee>(
            r#"
            UPDATE coffees
            SET stock_grams = $1
            WHERE id = $2
            RETURNING id, name, price, stock_grams
            "#,
        )
        .bind(stock_grams)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(coffee)
    }

    /// Subtract sold grams inside the sale transaction
    pub async fn debit_stock(
        conn: &mut PgConnection,
        id: i32,
        grams: Decimal,
    ) -> Result<Decimal, sqlx::Error> {
        sqlx::query_scalar::<_, Decimal>(
            "UPDATE coffees SET stock_grams = stock_grams - $1 WHERE id = $2 RETURNING stock_grams",
        )
        .bind(grams)
        .bind(id)
        .fetch_one(&mut *conn)
        .await
    }

    /// Delete a coffee; its recipe goes with it, recorded sales block the delete
    ///
    /// Returns false when no coffee had this id.
    pub async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM coffees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                ApiError::from_constraint(
                    e,
                    format!("Coffee with id {} has recorded sales and cannot be deleted", id),
                )
            })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Repository for recipes
#[derive(Clone)]
pub struct RecipeRepository {
    pool: PgPool,
}

impl RecipeRepository {
    /// Create a new RecipeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a recipe; a second recipe for the same coffee is a conflict
    pub async fn create(&self, payload: &CreateRecipe) -> Result<Recipe, ApiError> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recipes (coffee_id, milk_ml, coffee_grams)
            VALUES ($1, $2, $3)
            RETURNING id, coffee_id, milk_ml, coffee_grams
            "#,
        )
        .bind(payload.coffee_id)
        .bind(payload.milk_ml)
        .bind(payload.coffee_grams)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            ApiError::from_constraint(
                e,
                format!("Coffee with id {} already has a recipe", payload.coffee_id),
            )
        })?;

        Ok(recipe)
    }

    /// All recipes ordered by id
    pub async fn find_all(&self) -> Result<Vec<Recipe>, ApiError> {
        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT id, coffee_id, milk_ml, coffee_grams FROM recipes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(recipes)
    }

    /// Find the recipe of a coffee
    pub async fn find_by_coffee_id(&self, coffee_id: i32) -> Result<Option<Recipe>, ApiError> {
        let mut conn = self.pool.acquire().await?;
        Ok(Self::find_by_coffee_id_in(&mut conn, coffee_id).await?)
    }

    /// Find the recipe of a coffee on an existing connection or transaction
    pub async fn find_by_coffee_id_in(
        conn: &mut PgConnection,
        coffee_id: i32,
    ) -> Result<Option<Recipe>, sqlx::Error> {
        sqlx::query_as::<_, Recipe>(
            "SELECT id, coffee_id, milk_ml, coffee_grams FROM recipes WHERE coffee_id = $1",
        )
        .bind(coffee_id)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Apply the provided fields, keeping existing values for omitted ones
    pub async fn update(&self, id: i32, payload: &UpdateRecipe) -> Result<Option<Recipe>, ApiError> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            UPDATE recipes
            SET coffee_id = COALESCE($1, coffee_id),
                milk_ml = COALESCE($2, milk_ml),
                coffee_grams = COALESCE($3, coffee_grams)
            WHERE id = $4
            RETURNING id, coffee_id, milk_ml, coffee_grams
            "#,
        )
        .bind(payload.coffee_id)
        .bind(payload.milk_ml)
        .bind(payload.coffee_grams)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            ApiError::from_constraint(e, "Target coffee is missing or already has a recipe")
        })?;

        Ok(recipe)
    }

    /// Delete a recipe; returns false when no recipe had this id
    pub async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
