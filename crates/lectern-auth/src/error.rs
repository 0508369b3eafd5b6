//! Authentication failure kinds.
//!
//! Every failure in the token pipeline is terminal to the current request
//! and maps to HTTP 401 at the boundary. The display strings are the exact
//! response bodies clients see: expiry is distinguished so clients know to
//! refresh, while the remaining kinds stay generic enough not to aid
//! forgery.

/// The closed set of authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Token structurally invalid (wrong segment count, bad base64, bad
    /// JSON, missing claims).
    #[error("Invalid JWT Token")]
    Malformed,

    /// Signature does not verify against the current signing secret.
    #[error("Invalid JWT signature")]
    SignatureInvalid,

    /// Expiry is in the past beyond the clock-skew tolerance.
    #[error("Token has expired")]
    Expired,

    /// Decoded subject does not match the expected identity context.
    #[error("Authentication failed")]
    SubjectMismatch,

    /// A refresh token was presented where an access token was required,
    /// or vice versa.
    #[error("Authentication failed")]
    WrongKind,

    /// Subject is valid but the identity is no longer resolvable or is
    /// disabled.
    #[error("Authentication failed")]
    PrincipalUnavailable,

    /// Unexpected internal failure on an auth path. Detail is logged
    /// server-side; the client sees only the generic message.
    #[error("Authentication failed")]
    Internal(String),
}
