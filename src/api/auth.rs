use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::require_field;
use super::{ApiError, ApiResponse, AppState, MessageResponse};
use crate::services::CredentialError;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePasswordRequest {
    pub username: Option<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /create-account
/// Register a new user
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponse>>), ApiError> {
    let Json(payload) = payload?;
    let username = require_field(payload.username.as_deref(), "Username")?;
    let password = require_field(payload.password.as_deref(), "Password")?;

    state
        .credentials()
        .create_user(username, password)
        .await?;

    tracing::info!("Account created for user: {username}");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MessageResponse::new(format!(
            "Account created successfully for {username}"
        )))),
    ))
}

/// POST /login
/// Check a username/password pair
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let Json(payload) = payload?;
    let username = require_field(payload.username.as_deref(), "Username")?;
    let password = require_field(payload.password.as_deref(), "Password")?;

    let is_valid = match state.credentials().check_password(username, password).await {
        Ok(valid) => valid,
        // Unknown users get the same answer as a wrong password
        Err(CredentialError::UserNotFound(_)) => false,
        Err(e) => return Err(e.into()),
    };

    if !is_valid {
        return Err(ApiError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    tracing::info!("User logged in: {username}");

    Ok(Json(ApiResponse::success(MessageResponse::new(format!(
        "User {username} logged in successfully"
    )))))
}

/// POST /update-password
/// Replace a user's password, keeping their salt
pub async fn update_password(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdatePasswordRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let Json(payload) = payload?;
    let username = require_field(payload.username.as_deref(), "Username")?;
    let new_password = require_field(payload.new_password.as_deref(), "New password")?;

    state
        .credentials()
        .update_password(username, new_password)
        .await?;

    tracing::info!("Password changed for user: {username}");

    Ok(Json(ApiResponse::success(MessageResponse::new(
        "Password updated successfully",
    ))))
}
