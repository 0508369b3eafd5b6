use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use lectern::modules::users::directory::UserDirectory;
use lectern::modules::users::model::Account;
use lectern::router::init_router;
use lectern::state::AppState;
use lectern_config::{CorsConfig, JwtConfig};
use lectern_core::password::hash_password;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
        clock_skew_tolerance: 60,
    }
}

/// In-memory stand-in for the identity directory, so the HTTP surface can
/// be exercised without a database.
#[derive(Default)]
pub struct StaticDirectory {
    accounts: HashMap<Uuid, Account>,
}

impl StaticDirectory {
    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.insert(account.id, account);
        self
    }
}

#[async_trait]
impl UserDirectory for StaticDirectory {
    async fn find_by_identity(&self, identity: &str) -> anyhow::Result<Option<Account>> {
        let Ok(id) = Uuid::parse_str(identity) else {
            return Ok(None);
        };
        Ok(self.accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>> {
        Ok(self
            .accounts
            .values()
            .find(|account| account.email == email)
            .cloned())
    }
}

pub fn create_test_account(
    email: &str,
    password: &str,
    enabled: bool,
    authorities: &[&str],
) -> Account {
    Account {
        id: Uuid::new_v4(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        password_hash: hash_password(password).unwrap(),
        enabled,
        authorities: authorities.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn setup_test_app(directory: StaticDirectory) -> (axum::Router, AppState) {
    let state = AppState::new(
        Arc::new(directory),
        test_jwt_config(),
        CorsConfig::from_env(),
    );
    (init_router(state.clone()), state)
}
