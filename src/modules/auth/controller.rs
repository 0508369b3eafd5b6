use axum::Json;
use axum::extract::State;
use tracing::instrument;
use utoipa::ToSchema;

use lectern_core::AppError;

use crate::state::AppState;
use crate::validation::ValidatedJson;

use super::model::{LoginRequest, RefreshRequest, TokenPairResponse};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Login with email and password, receiving an access/refresh token pair
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenPairResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenPairResponse>, AppError> {
    let pair = AuthService::login(state.directory.as_ref(), dto, &state.issuer).await?;
    Ok(Json(pair.into()))
}

/// Exchange a refresh token for a new token pair
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "Refresh successful", body = TokenPairResponse),
        (status = 401, description = "Expired, malformed, or wrong-kind token", body = ErrorResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshRequest>,
) -> Result<Json<TokenPairResponse>, AppError> {
    let pair = AuthService::refresh(&state.refresher, dto)?;
    Ok(Json(pair.into()))
}
