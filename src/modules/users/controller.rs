use axum::Json;
use tracing::instrument;

use lectern_core::AppError;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;

use super::model::ProfileResponse;

/// Get the authenticated caller's identity and authorities
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Authenticated caller's profile", body = ProfileResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_profile(
    CurrentUser(principal): CurrentUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let mut authorities: Vec<String> = principal.authorities.into_iter().collect();
    authorities.sort();

    Ok(Json(ProfileResponse {
        identity: principal.identity,
        authorities,
    }))
}
