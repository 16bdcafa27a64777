// HTTP handlers for coffee and recipe endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::{RequireManager, RequireStaff};
use crate::catalog::models::{
    Coffee, CoffeeDetails, CreateCoffee, CreateRecipe, Recipe, UpdateCoffee, UpdateRecipe,
};
use crate::error::ApiError;
use crate::AppState;

/// Handler for POST /coffees/
#[utoipa::path(
    post,
    path = "/coffees/",
    request_body = CreateCoffee,
    responses(
        (status = 201, description = "Coffee created", body = Coffee),
        (status = 400, description = "Invalid input data"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Manager role required")
    ),
    security(("bearer_auth" = [])),
    tag = "coffees"
)]
pub async fn create_coffee(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(payload): Json<CreateCoffee>,
) -> Result<(StatusCode, Json<Coffee>), ApiError> {
    tracing::debug!("{} creating coffee: {}", user.username, payload.name);
    payload.validate()?;

    let coffee = state.catalog_service.create_coffee(payload).await?;
    Ok((StatusCode::CREATED, Json(coffee)))
}

/// Handler for GET /coffees/
#[utoipa::path(
    get,
    path = "/coffees/",
    responses(
        (status = 200, description = "All coffees", body = Vec<Coffee>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "coffees"
)]
pub async fn list_coffees(
    State(state): State<AppState>,
    _staff: RequireStaff,
) -> Result<Json<Vec<Coffee>>, ApiError> {
    let coffees = state.catalog_service.list_coffees().await?;
    tracing::debug!("Retrieved {} coffees", coffees.len());
    Ok(Json(coffees))
}

/// Handler for GET /coffees/{id}/details
#[utoipa::path(
    get,
    path = "/coffees/{id}/details",
    params(("id" = i32, Path, description = "Coffee ID")),
    responses(
        (status = 200, description = "Coffee with its recipe", body = CoffeeDetails),
        (status = 404, description = "Coffee or recipe not found")
    ),
    security(("bearer_auth" = [])),
    tag = "coffees"
)]
pub async fn get_coffee_details(
    State(state): State<AppState>,
    _staff: RequireStaff,
    Path(id): Path<i32>,
) -> Result<Json<CoffeeDetails>, ApiError> {
    let details = state.catalog_service.coffee_details(id).await?;
    Ok(Json(details))
}

/// Handler for PUT /coffees/{id}
#[utoipa::path(
    put,
    path = "/coffees/{id}",
    params(("id" = i32, Path, description = "Coffee ID")),
    request_body = UpdateCoffee,
    responses(
        (status = 200, description = "Coffee updated", body = Coffee),
        (status = 404, description = "Coffee not found")
    ),
    security(("bearer_auth" = [])),
    tag = "coffees"
)]
pub async fn update_coffee(
    State(state): State<AppState>,
    _manager: RequireManager,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCoffee>,
) -> Result<Json<Coffee>, ApiError> {
    payload.validate()?;
    let coffee = state.catalog_service.update_coffee(id, payload).await?;
    Ok(Json(coffee))
}

/// Handler for DELETE /coffees/{id}
#[utoipa::path(
    delete,
    path = "/coffees/{id}",
    params(("id" = i32, Path, description = "Coffee ID")),
    responses(
        (status = 204, description = "Coffee deleted"),
        (status = 404, description = "Coffee not found"),
        (status = 409, description = "Coffee has recorded sales")
    ),
    security(("bearer_auth" = [])),
    tag = "coffees"
)]
pub async fn delete_coffee(
    State(state): State<AppState>,
    _manager: RequireManager,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.catalog_service.delete_coffee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /coffees/recipes/
#[utoipa::path(
    post,
    path = "/coffees/recipes/",
    request_body = CreateRecipe,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 404, description = "Coffee not found"),
        (status = 409, description = "Coffee already has a recipe")
    ),
    security(("bearer_auth" = [])),
    tag = "recipes"
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    _manager: RequireManager,
    Json(payload): Json<CreateRecipe>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    payload.validate()?;
    let recipe = state.catalog_service.create_recipe(payload).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Handler for GET /coffees/recipes/
#[utoipa::path(
    get,
    path = "/coffees/recipes/",
    responses((status = 200, description = "All recipes", body = Vec<Recipe>)),
    security(("bearer_auth" = [])),
    tag = "recipes"
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    _staff: RequireStaff,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = state.catalog_service.list_recipes().await?;
    Ok(Json(recipes))
}

/// Handler for PUT /coffees/recipes/{id}
#[utoipa::path(
    put,
    path = "/coffees/recipes/{id}",
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = UpdateRecipe,
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 404, description = "Recipe or coffee not found")
    ),
    security(("bearer_auth" = [])),
    tag = "recipes"
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    _manager: RequireManager,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRecipe>,
) -> Result<Json<Recipe>, ApiError> {
    payload.validate()?;
    let recipe = state.catalog_service.update_recipe(id, payload).await?;
    Ok(Json(recipe))
}

/// Handler for DELETE /coffees/recipes/{id}
#[utoipa::path(
    delete,
    path = "/coffees/recipes/{id}",
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer_auth" = [])),
    tag = "recipes"
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    _manager: RequireManager,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.catalog_service.delete_recipe(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
