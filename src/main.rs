use coffee_shop_api::{config::AppConfig, create_router, db, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // RUST_LOG wins when set, otherwise log at info
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Coffee Shop API - Starting...");

    if let Err(e) = run().await {
        tracing::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url, config.max_connections).await?;

    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await?;
    tracing::info!("Migrations completed successfully");

    db::ensure_milk_stock(&pool, config.initial_milk_ml).await?;

    let app = create_router(AppState::new(pool, &config));

    let addr = config.bind_address();
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Coffee Shop API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
