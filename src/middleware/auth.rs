use std::collections::HashSet;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use lectern_auth::{AuthError, TokenKind};
use lectern_core::AppError;

use crate::state::AppState;

/// The resolved, request-scoped representation of "who is making this call".
///
/// Built fresh for every request from a validated token's subject plus the
/// directory's current authority set; never persisted or shared across
/// requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub identity: String,
    pub authorities: HashSet<String>,
}

impl AuthenticatedPrincipal {
    /// Check if the principal holds a specific authority
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }

    /// Check if the principal holds any of the specified authorities
    pub fn has_any_authority(&self, authorities: &[&str]) -> bool {
        authorities.iter().any(|a| self.has_authority(a))
    }

    /// Check if the principal holds all of the specified authorities
    pub fn has_all_authorities(&self, authorities: &[&str]) -> bool {
        authorities.iter().all(|a| self.has_authority(a))
    }
}

/// Outcome of running the gate over one request's credentials.
#[derive(Debug)]
pub enum AuthOutcome {
    /// A valid access token resolved to an enabled account.
    Authenticated(AuthenticatedPrincipal),
    /// No usable credentials were presented; not an error.
    Unauthenticated,
    /// Credentials were presented and failed; the request must not proceed.
    Rejected(AuthError),
}

/// Per-request authentication gate.
///
/// Layered over the protected subtree. Attaches the principal to the
/// request extensions on success, forwards unauthenticated requests
/// untouched (public endpoints share the subtree), and turns every
/// rejection into a 401 whose body carries the reason and nothing else.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    match resolve_principal(&state, req.headers()).await {
        AuthOutcome::Authenticated(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        AuthOutcome::Unauthenticated => next.run(req).await,
        AuthOutcome::Rejected(reason) => AppError::unauthorized(reason).into_response(),
    }
}

/// Turns the `Authorization` header into an [`AuthOutcome`].
///
/// Absent credentials are not an error: many endpoints are public, so a
/// missing header or a non-Bearer scheme lets the request continue
/// unauthenticated. A bearer token, once presented, must survive full
/// validation or the request is rejected outright.
async fn resolve_principal(state: &AppState, headers: &HeaderMap) -> AuthOutcome {
    let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    else {
        return AuthOutcome::Unauthenticated;
    };

    let Some(token) = value.strip_prefix("Bearer ") else {
        return AuthOutcome::Unauthenticated;
    };

    let claims = match state.validator.validate(token, None) {
        Ok(claims) => claims,
        Err(reason) => {
            warn!(%reason, "rejected bearer token");
            return AuthOutcome::Rejected(reason);
        }
    };

    // Refresh tokens belong to the refresh endpoint only.
    if claims.kind != TokenKind::Access {
        warn!(subject = %claims.sub, "refresh token presented as bearer credential");
        return AuthOutcome::Rejected(AuthError::WrongKind);
    }

    let account = match state.directory.find_by_identity(&claims.sub).await {
        Ok(account) => account,
        Err(e) => {
            error!(subject = %claims.sub, error = %e, "identity lookup failed");
            return AuthOutcome::Rejected(AuthError::Internal(e.to_string()));
        }
    };

    match account {
        Some(account) if account.enabled => AuthOutcome::Authenticated(AuthenticatedPrincipal {
            identity: account.id.to_string(),
            authorities: account.authorities.into_iter().collect(),
        }),
        _ => AuthOutcome::Rejected(AuthError::PrincipalUnavailable),
    }
}

/// Extractor for handlers that require an authenticated principal.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedPrincipal);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedPrincipal>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Authentication failed")))
    }
}
