//! Claim structures for authentication tokens.

use serde::{Deserialize, Serialize};

/// The kind tag embedded in every token.
///
/// Access and refresh tokens share the same claim shape; the tag is what
/// keeps a refresh token from being accepted where an access token is
/// required, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims embedded in a signed token.
///
/// Immutable once issued; a token is never mutated, only reissued. The
/// subject is an opaque stable identifier owned by the user store; the
/// token holds a copy, never a live reference.
///
/// Invariant: `exp > iat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: stable identifier of the principal
    pub sub: String,
    /// Issued-at timestamp (Unix seconds)
    pub iat: i64,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
    /// Kind tag distinguishing access from refresh tokens
    pub kind: TokenKind,
}

/// An access token and a refresh token issued together.
///
/// Both tokens share `iat` but are otherwise independent; no relationship
/// between a pair and its predecessor is stored anywhere.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "7f2c9a4e-1111-2222-3333-444455556666".to_string(),
            iat: 1700000000,
            exp: 1700003600,
            kind: TokenKind::Access,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"7f2c9a4e-1111-2222-3333-444455556666""#));
        assert!(serialized.contains(r#""kind":"access""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"000000000","iat":1700000000,"exp":1700086400,"kind":"refresh"}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "000000000");
        assert_eq!(claims.kind, TokenKind::Refresh);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_kind_tag_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&TokenKind::Access).unwrap(),
            r#""access""#
        );
        assert_eq!(
            serde_json::to_string(&TokenKind::Refresh).unwrap(),
            r#""refresh""#
        );
    }

    #[test]
    fn test_claims_without_kind_rejected() {
        let json = r#"{"sub":"000000000","iat":1700000000,"exp":1700086400}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
