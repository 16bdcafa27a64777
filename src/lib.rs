// Coffee Shop API
// Catalog, inventory, sales and reporting for a single coffee shop

pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod inventory;
pub mod reports;
pub mod sales;
pub mod validation;

use std::sync::Arc;

use axum::{
    extract::FromRef,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use auth::{repository::UserRepository, AuthService, TokenService};
use catalog::{CatalogService, CoffeeRepository, RecipeRepository};
use config::AppConfig;
use inventory::{InventoryService, MilkRepository};
use reports::{ReportRepository, ReportService};
use sales::{SaleService, SalesRepository};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::login_handler,
        catalog::handlers::create_coffee,
        catalog::handlers::list_coffees,
        catalog::handlers::get_coffee_details,
        catalog::handlers::update_coffee,
        catalog::handlers::delete_coffee,
        catalog::handlers::create_recipe,
        catalog::handlers::list_recipes,
        catalog::handlers::update_recipe,
        catalog::handlers::delete_recipe,
        inventory::handlers::update_coffee_stock,
        inventory::handlers::get_milk_stock,
        inventory::handlers::update_milk_stock,
        sales::handlers::record_sale,
        sales::handlers::list_sales,
        reports::handlers::daily_report,
        reports::handlers::weekly_report,
        reports::handlers::top_selling,
        reports::handlers::range_report,
    ),
    components(
        schemas(
            auth::LoginForm,
            auth::TokenResponse,
            auth::Role,
            catalog::Coffee,
            catalog::CreateCoffee,
            catalog::UpdateCoffee,
            catalog::Recipe,
            catalog::CreateRecipe,
            catalog::UpdateRecipe,
            catalog::CoffeeDetails,
            inventory::MilkStock,
            inventory::StockUpdate,
            sales::Sale,
            sales::SaleRequest,
            reports::SalesReport,
            reports::TopSellingItem,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login and token issuance"),
        (name = "coffees", description = "Coffee product management"),
        (name = "recipes", description = "Per-coffee ingredient recipes"),
        (name = "inventory", description = "Coffee bean and milk stock"),
        (name = "sales", description = "Recording and listing sales"),
        (name = "reports", description = "Sales reporting")
    ),
    info(
        title = "Coffee Shop API",
        version = "1.0.0",
        description = "Back-office API for a coffee shop: catalog, inventory, sales and reports"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub catalog_service: CatalogService,
    pub inventory_service: InventoryService,
    pub sale_service: SaleService,
    pub report_service: ReportService,
}

impl AppState {
    /// Wire repositories and services over one connection pool
    pub fn new(db: PgPool, config: &AppConfig) -> Self {
        let token_service = TokenService::new(&config.jwt_secret, config.access_token_minutes);
        let auth_service = Arc::new(AuthService::new(
            UserRepository::new(db.clone()),
            token_service,
        ));

        let coffees = CoffeeRepository::new(db.clone());
        let catalog_service =
            CatalogService::new(coffees.clone(), RecipeRepository::new(db.clone()));
        let inventory_service = InventoryService::new(coffees, MilkRepository::new(db.clone()));
        let sale_service = SaleService::new(db.clone(), SalesRepository::new(db.clone()));
        let report_service = ReportService::new(ReportRepository::new(db));

        Self {
            auth_service,
            catalog_service,
            inventory_service,
            sale_service,
            report_service,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth_service.clone()
    }
}

/// Handler for GET /
async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Coffee Shop API" }))
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS and request tracing
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root))
        .route("/login", post(auth::login_handler))
        // Catalog
        .route(
            "/coffees/",
            post(catalog::handlers::create_coffee).get(catalog::handlers::list_coffees),
        )
        .route(
            "/coffees/recipes/",
            post(catalog::handlers::create_recipe).get(catalog::handlers::list_recipes),
        )
        .route(
            "/coffees/recipes/:id",
            put(catalog::handlers::update_recipe).delete(catalog::handlers::delete_recipe),
        )
        .route("/coffees/:id/details", get(catalog::handlers::get_coffee_details))
        .route(
            "/coffees/:id",
            put(catalog::handlers::update_coffee).delete(catalog::handlers::delete_coffee),
        )
        // Inventory
        .route("/coffees/:id/stock", put(inventory::handlers::update_coffee_stock))
        .route(
            "/sales/milk/stock",
            get(inventory::handlers::get_milk_stock).put(inventory::handlers::update_milk_stock),
        )
        // Sales and reports
        .route(
            "/sales/",
            post(sales::handlers::record_sale).get(sales::handlers::list_sales),
        )
        .route("/sales/reports/daily/", get(reports::handlers::daily_report))
        .route("/sales/reports/weekly/", get(reports::handlers::weekly_report))
        .route("/sales/reports/top-selling/", get(reports::handlers::top_selling))
        .route("/sales/reports/range/", get(reports::handlers::range_report))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
