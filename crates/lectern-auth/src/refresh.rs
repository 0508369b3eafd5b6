//! Exchange of a valid refresh token for a new token pair.

use crate::claims::{TokenKind, TokenPair};
use crate::error::AuthError;
use crate::issuer::TokenIssuer;
use crate::validator::TokenValidator;

/// Rotates a refresh token into a brand-new access+refresh pair.
///
/// Fully stateless: the old refresh token is not invalidated and remains
/// usable until its own natural expiry. An expired refresh token is
/// terminal; the caller must re-authenticate with credentials.
#[derive(Clone)]
pub struct RefreshCoordinator {
    validator: TokenValidator,
    issuer: TokenIssuer,
}

impl RefreshCoordinator {
    pub fn new(validator: TokenValidator, issuer: TokenIssuer) -> Self {
        Self { validator, issuer }
    }

    /// Validates the presented refresh token in full (signature and
    /// expiry, with no subject pre-check since the caller presents none)
    /// and issues a new pair for its subject.
    ///
    /// Fails with [`AuthError::WrongKind`] when handed an access token.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.validator.validate(refresh_token, None)?;

        if claims.kind != TokenKind::Refresh {
            return Err(AuthError::WrongKind);
        }

        self.issuer.issue_pair(&claims.sub)
    }
}
