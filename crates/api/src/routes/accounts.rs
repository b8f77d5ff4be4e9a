//! Signup and login handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use marketstall_core::{Account, BusinessDetails, Profile, lenient};

use crate::error::{AppError, Operation, Result};
use crate::extract::ApiJson;
use crate::services::AccountService;
use crate::state::AppState;

/// Signup payload: account fields, optional business fields, and the
/// `userType` discriminator.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Kept untyped so a non-string discriminator is an invalid user type
    /// rather than a malformed body.
    #[serde(rename = "userType", default)]
    pub user_type: Option<Value>,
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(flatten)]
    pub business: BusinessDetails,
}

/// Login payload.
///
/// An absent or `null` credential is matched as the empty string.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub password: Option<String>,
    #[serde(rename = "userType", default)]
    pub user_type: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: Account,
}

/// Handle signup.
#[instrument(skip(state, request))]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let service = AccountService::new(state.store());

    let id = service
        .register(
            request.user_type.as_ref().and_then(Value::as_str),
            request.profile,
            request.business,
        )
        .await
        .map_err(|e| AppError::from_service(Operation::Signup, e))?;

    tracing::info!(account_id = %id, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully!",
        }),
    ))
}

/// Handle login.
#[instrument(skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let service = AccountService::new(state.store());

    let user = service
        .authenticate(
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
            request.user_type.as_ref().and_then(Value::as_str),
        )
        .await
        .map_err(|e| AppError::from_service(Operation::Login, e))?;

    tracing::info!(account_id = %user.id, user_type = %user.user_type(), "Login succeeded");

    Ok(Json(LoginResponse {
        message: "Login successful!",
        user,
    }))
}
