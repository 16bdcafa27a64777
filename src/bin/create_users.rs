// Seeds the default manager and employee accounts

use coffee_shop_api::{
    auth::{repository::UserRepository, AuthService, Role, TokenService},
    config::AppConfig,
    db,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_SEED_PASSWORD: &str = "devpassword123";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        tracing::error!("Failed to seed users: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let password = std::env::var("SEED_USER_PASSWORD")
        .unwrap_or_else(|_| DEFAULT_SEED_PASSWORD.to_string());

    let pool = db::create_pool(&config.database_url, 1).await?;
    db::run_migrations(&pool).await?;

    let service = AuthService::new(
        UserRepository::new(pool),
        TokenService::new(&config.jwt_secret, config.access_token_minutes),
    );

    for (username, role) in [("manager", Role::Manager), ("employee", Role::Employee)] {
        if service.register_if_absent(username, &password, role).await? {
            tracing::info!("Created {} user '{}'", role, username);
        } else {
            tracing::info!("User '{}' already exists, skipping", username);
        }
    }
    Ok(())
}
