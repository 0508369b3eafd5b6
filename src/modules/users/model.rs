//! User account models and DTOs.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// An account as seen by the authentication pipeline.
///
/// Carries exactly what the gate and the login flow need: the stable
/// identifier tokens are bound to, the credential hash, the enabled flag,
/// and the current authority set. Deliberately not serializable, so the
/// password hash cannot travel past this boundary.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub enabled: bool,
    /// Permission names granted to the account (e.g. "courses:read")
    pub authorities: Vec<String>,
}

/// Profile of the authenticated caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub identity: String,
    pub authorities: Vec<String>,
}
