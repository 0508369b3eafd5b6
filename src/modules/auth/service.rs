use tracing::{error, instrument};

use lectern_auth::{RefreshCoordinator, TokenIssuer, TokenPair};
use lectern_core::AppError;
use lectern_core::password::verify_password;

use crate::modules::users::directory::UserDirectory;

use super::model::{LoginRequest, RefreshRequest};

pub struct AuthService;

impl AuthService {
    /// Verifies credentials against the identity directory and issues a
    /// fresh token pair.
    ///
    /// Unknown email, wrong password, and disabled account all produce the
    /// same 401 so the response does not reveal which accounts exist.
    #[instrument(skip_all)]
    pub async fn login(
        directory: &dyn UserDirectory,
        dto: LoginRequest,
        issuer: &TokenIssuer,
    ) -> Result<TokenPair, AppError> {
        let account = directory
            .find_by_email(&dto.email)
            .await
            .map_err(|e| {
                error!(error = %e, "identity lookup failed during login");
                AppError::unauthorized(anyhow::anyhow!("Authentication failed"))
            })?
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid email or password")))?;

        let is_valid = verify_password(&dto.password, &account.password_hash)?;

        if !is_valid || !account.enabled {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid email or password"
            )));
        }

        issuer
            .issue_pair(&account.id.to_string())
            .map_err(AppError::unauthorized)
    }

    /// Exchanges a refresh token for a new pair.
    #[instrument(skip_all)]
    pub fn refresh(
        refresher: &RefreshCoordinator,
        dto: RefreshRequest,
    ) -> Result<TokenPair, AppError> {
        refresher
            .refresh(&dto.refresh_token)
            .map_err(AppError::unauthorized)
    }
}
