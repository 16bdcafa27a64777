// HTTP handlers for authentication endpoints

use axum::{extract::State, Form, Json};
use std::sync::Arc;

use crate::auth::{
    error::AuthError,
    models::{LoginForm, TokenResponse},
    service::AuthService,
};

/// Exchange username and password for a bearer token
/// POST /login
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = TokenResponse),
        (status = 401, description = "Incorrect username or password")
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(service): State<Arc<AuthService>>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, AuthError> {
    tracing::debug!("Login attempt for '{}'", form.username);
    let token = service.authenticate(&form.username, &form.password).await?;
    Ok(Json(token))
}
