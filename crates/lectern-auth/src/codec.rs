//! Encoding and decoding of signed compact tokens.
//!
//! The codec is a pure function over its inputs: it signs claims into the
//! compact `header.payload.signature` form and verifies structure and
//! signature on the way back. Expiry is deliberately NOT checked here;
//! expiry policy, including clock-skew tolerance, is centralized in
//! [`crate::validator`].

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind,
};

use crate::claims::Claims;
use crate::error::AuthError;

/// Signs claims into a compact token string (HS256).
///
/// Deterministic for a given claim set and secret; the secret never
/// appears in the output.
pub fn encode(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    jsonwebtoken::encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("Failed to encode token: {}", e)))
}

/// Verifies structure and signature, returning the embedded claims.
///
/// Fails with [`AuthError::Malformed`] for structural problems and
/// [`AuthError::SignatureInvalid`] when the signature does not verify,
/// including a signature segment that is not valid base64url, so that
/// tampering with any character of the signature is always reported as a
/// signature failure rather than a malformed token.
pub fn decode(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let mut segments = token.split('.');
    let (Some(header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(AuthError::Malformed);
    };

    // Header and payload are vetted up front so that any base64 failure
    // surfacing from signature verification below is attributable to the
    // signature segment alone.
    if URL_SAFE_NO_PAD.decode(header).is_err() || URL_SAFE_NO_PAD.decode(payload).is_err() {
        return Err(AuthError::Malformed);
    }

    // Expiry is the validator's concern; skew tolerance lives there.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;

    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::Base64(_) => AuthError::SignatureInvalid,
        ErrorKind::ExpiredSignature => AuthError::Expired,
        _ => AuthError::Malformed,
    })
}
