//! Identity lookup boundary.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::model::Account;

/// Lookup of accounts by stable identifier or email.
///
/// This is the authentication pipeline's only view of user storage. The
/// gate calls [`find_by_identity`](UserDirectory::find_by_identity) at
/// most once per request and does not cache the result; the login flow
/// uses [`find_by_email`](UserDirectory::find_by_email).
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_identity(&self, identity: &str) -> anyhow::Result<Option<Account>>;

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>>;
}

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    enabled: bool,
}

/// PostgreSQL-backed directory.
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_account(&self, row: AccountRow) -> anyhow::Result<Account> {
        let authorities: Vec<String> = sqlx::query_scalar(
            "SELECT authority FROM user_authorities WHERE user_id = $1 ORDER BY authority",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Account {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            password_hash: row.password,
            enabled: row.enabled,
            authorities,
        })
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_identity(&self, identity: &str) -> anyhow::Result<Option<Account>> {
        // Subjects are opaque strings to the token layer; anything that is
        // not one of our identifiers simply resolves to no account.
        let Ok(id) = Uuid::parse_str(identity) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, first_name, last_name, email, password, enabled FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.load_account(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, first_name, last_name, email, password, enabled FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.load_account(row).await?)),
            None => Ok(None),
        }
    }
}
