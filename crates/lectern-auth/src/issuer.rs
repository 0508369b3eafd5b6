//! Access and refresh token issuance.

use chrono::Utc;
use lectern_config::JwtConfig;

use crate::claims::{Claims, TokenKind, TokenPair};
use crate::codec;
use crate::error::AuthError;

/// Issues signed access and refresh tokens for a given identity.
///
/// Constructed from an explicit, immutable [`JwtConfig`]; the issuer holds
/// no other state and persists nothing. Validity of an issued token is
/// decided solely by signature and expiry at verification time; there is
/// no server-side record of outstanding tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    config: JwtConfig,
}

impl TokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Issues a short-lived access token authorizing API calls.
    pub fn issue_access_token(&self, identity: &str) -> Result<String, AuthError> {
        self.issue(
            identity,
            TokenKind::Access,
            self.config.access_token_expiry,
            Utc::now().timestamp(),
        )
    }

    /// Issues a longer-lived refresh token, usable only to obtain a new
    /// token pair.
    pub fn issue_refresh_token(&self, identity: &str) -> Result<String, AuthError> {
        self.issue(
            identity,
            TokenKind::Refresh,
            self.config.refresh_token_expiry,
            Utc::now().timestamp(),
        )
    }

    /// Issues an access and a refresh token together.
    ///
    /// Both tokens share `iat` but are otherwise independent: different
    /// kind tag, different TTL.
    pub fn issue_pair(&self, identity: &str) -> Result<TokenPair, AuthError> {
        let now = Utc::now().timestamp();
        Ok(TokenPair {
            access_token: self.issue(
                identity,
                TokenKind::Access,
                self.config.access_token_expiry,
                now,
            )?,
            refresh_token: self.issue(
                identity,
                TokenKind::Refresh,
                self.config.refresh_token_expiry,
                now,
            )?,
        })
    }

    fn issue(
        &self,
        identity: &str,
        kind: TokenKind,
        ttl: i64,
        now: i64,
    ) -> Result<String, AuthError> {
        let claims = Claims {
            sub: identity.to_string(),
            iat: now,
            exp: now + ttl,
            kind,
        };

        codec::encode(&claims, &self.config.secret)
    }
}
