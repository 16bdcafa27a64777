// Authentication service - business logic layer

use tracing::{debug, info};

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{AccessLevel, Role, TokenResponse},
    password::PasswordService,
    repository::UserRepository,
    token::TokenService,
};

/// Authentication service: credential checks, token issuance and resolution
pub struct AuthService {
    user_repo: UserRepository,
    token_service: TokenService,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, token_service: TokenService) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// Exchange username and password for an access token
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, AuthError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_service.generate_access_token(&user.username)?;
        info!("User '{}' logged in", user.username);
        Ok(TokenResponse::bearer(token))
    }

    /// Resolve a bearer token to a still-registered user
    pub async fn authorize(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.token_service.validate_access_token(token)?;

        let user = self
            .user_repo
            .find_by_username(&claims.sub)
            .await?
            .ok_or_else(|| AuthError::UnknownUser(claims.sub.clone()))?;

        debug!("Resolved token to user_id={} role={}", user.id, user.role);
        Ok(AuthenticatedUser {
            user_id: user.id,
            username: user.username,
            role: user.role,
        })
    }

    /// Create a user with a freshly hashed password unless it already exists
    pub async fn register_if_absent(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<bool, AuthError> {
        let password_hash = PasswordService::hash_password(password)?;
        self.user_repo
            .create_if_absent(username, &password_hash, role)
            .await
    }
}

/// Fail with `InsufficientPermissions` unless `user` meets `level`
pub fn require_level(user: &AuthenticatedUser, level: AccessLevel) -> Result<(), AuthError> {
    if user.role.satisfies(level) {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermissions {
            required: level,
            actual: user.role,
        })
    }
}

/// Manager-only operations
pub fn require_manager(user: &AuthenticatedUser) -> Result<(), AuthError> {
    require_level(user, AccessLevel::Manager)
}

/// Operations open to any registered shop user
pub fn require_staff(user: &AuthenticatedUser) -> Result<(), AuthError> {
    require_level(user, AccessLevel::Staff)
}
