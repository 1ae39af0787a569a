//! Auth Endpoints
//!
//! Register, login and current-user lookup. Session bookkeeping (storing
//! the returned token) lives in `state::session`, not here.

use super::types::{AuthResponse, RegisterForm, User};
use super::ApiError;

/// Register a new account
pub async fn register(form: &RegisterForm) -> Result<AuthResponse, ApiError> {
    let response = super::post("/auth/register")
        .json(form)
        .map_err(super::build_error)?
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}

/// Log in with credentials
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let response = super::post("/auth/login")
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(super::build_error)?
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}

/// Fetch the user behind the stored token
pub async fn current_user() -> Result<User, ApiError> {
    let response = super::get("/auth/me")
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}
