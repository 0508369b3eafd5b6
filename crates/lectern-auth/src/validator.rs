//! Signature, expiry, and subject validation.

use chrono::Utc;
use lectern_config::JwtConfig;

use crate::claims::Claims;
use crate::codec;
use crate::error::AuthError;

/// Verifies token strings against the signing secret and the clock.
///
/// Checks run cheapest-first and the first failure wins, so a caller sees
/// exactly one of: [`AuthError::Malformed`], [`AuthError::SignatureInvalid`],
/// [`AuthError::Expired`], [`AuthError::SubjectMismatch`].
///
/// A token whose expiry is past by no more than the configured clock-skew
/// tolerance is still treated as valid; this absorbs drift between issuing
/// and validating nodes.
#[derive(Clone)]
pub struct TokenValidator {
    config: JwtConfig,
}

impl TokenValidator {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Validates structure, signature, and expiry, then the subject
    /// binding when an expected subject is supplied.
    pub fn validate(
        &self,
        token: &str,
        expected_subject: Option<&str>,
    ) -> Result<Claims, AuthError> {
        self.validate_at(token, expected_subject, Utc::now().timestamp())
    }

    /// Extracts the subject of a valid token.
    ///
    /// For callers that do not yet know who the token should belong to,
    /// e.g. the authentication gate, which must learn the subject before it
    /// can look up authorities.
    pub fn extract_subject(&self, token: &str) -> Result<String, AuthError> {
        self.validate(token, None).map(|claims| claims.sub)
    }

    /// Validates against a caller-supplied clock instead of the system
    /// clock. Useful for deterministic expiry checks.
    pub fn validate_at(
        &self,
        token: &str,
        expected_subject: Option<&str>,
        now: i64,
    ) -> Result<Claims, AuthError> {
        let claims = codec::decode(token, &self.config.secret)?;

        if now > claims.exp + self.config.clock_skew_tolerance {
            return Err(AuthError::Expired);
        }

        if let Some(expected) = expected_subject {
            if claims.sub != expected {
                return Err(AuthError::SubjectMismatch);
            }
        }

        Ok(claims)
    }
}
