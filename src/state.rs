use std::sync::Arc;

use lectern_auth::{RefreshCoordinator, TokenIssuer, TokenValidator};
use lectern_config::{CorsConfig, JwtConfig};
use lectern_db::init_db_pool;

use crate::modules::users::directory::{PgUserDirectory, UserDirectory};

/// Shared application state.
///
/// Everything in here is read-only after startup: the signing secret and
/// TTLs live inside the issuer/validator, loaded once and immutable for
/// the process lifetime. Rotating the secret means restarting the process
/// and invalidating all outstanding tokens.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn UserDirectory>,
    pub issuer: TokenIssuer,
    pub validator: TokenValidator,
    pub refresher: RefreshCoordinator,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        let issuer = TokenIssuer::new(jwt_config.clone());
        let validator = TokenValidator::new(jwt_config);
        let refresher = RefreshCoordinator::new(validator.clone(), issuer.clone());

        Self {
            directory,
            issuer,
            validator,
            refresher,
            cors_config,
        }
    }
}

pub async fn init_app_state() -> AppState {
    let pool = init_db_pool().await;

    AppState::new(
        Arc::new(PgUserDirectory::new(pool)),
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    )
}
