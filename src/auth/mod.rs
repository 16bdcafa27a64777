// Authentication module
// Password login, JWT access tokens and role-gated extractors

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::login_handler;
pub use middleware::{AuthenticatedUser, RequireManager, RequireStaff};
pub use models::{AccessLevel, LoginForm, Role, TokenResponse, User};
pub use service::{require_level, require_manager, require_staff, AuthService};
pub use token::TokenService;
