use chrono::Utc;

use lectern_auth::claims::{Claims, TokenKind};
use lectern_auth::{AuthError, RefreshCoordinator, TokenIssuer, TokenValidator, codec};
use lectern_config::JwtConfig;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
        clock_skew_tolerance: 60,
    }
}

fn encode_claims(sub: &str, iat: i64, exp: i64, kind: TokenKind) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        iat,
        exp,
        kind,
    };
    codec::encode(&claims, &get_test_jwt_config().secret).unwrap()
}

#[test]
fn test_access_token_validates_immediately_after_issuance() {
    let issuer = TokenIssuer::new(get_test_jwt_config());
    let validator = TokenValidator::new(get_test_jwt_config());

    for identity in ["000000000", "123456789", "ab12cd34"] {
        let token = issuer.issue_access_token(identity).unwrap();
        let claims = validator.validate(&token, Some(identity)).unwrap();

        assert_eq!(claims.sub, identity);
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(claims.exp > claims.iat);
    }
}

#[test]
fn test_expiry_within_skew_tolerance_still_valid() {
    let validator = TokenValidator::new(get_test_jwt_config());
    let now = Utc::now().timestamp();

    // Expired 5 seconds ago: well inside the 60-second grace window.
    let token = encode_claims("000000000", now - 3605, now - 5, TokenKind::Access);
    assert!(validator.validate(&token, Some("000000000")).is_ok());
}

#[test]
fn test_expiry_beyond_skew_tolerance_fails() {
    let validator = TokenValidator::new(get_test_jwt_config());
    let now = Utc::now().timestamp();

    // Expired 5 minutes ago: past any tolerance.
    let token = encode_claims("000000000", now - 4000, now - 300, TokenKind::Access);
    let result = validator.validate(&token, Some("000000000"));
    assert!(matches!(result, Err(AuthError::Expired)));
}

#[test]
fn test_tampered_signature_is_signature_error_not_malformed() {
    let issuer = TokenIssuer::new(get_test_jwt_config());
    let validator = TokenValidator::new(get_test_jwt_config());

    let token = issuer.issue_access_token("000000000").unwrap();
    let (message, signature) = token.rsplit_once('.').unwrap();

    let mid = signature.len() / 2;
    let mut tampered: Vec<u8> = signature.bytes().collect();
    tampered[mid] = if tampered[mid] == b'x' { b'y' } else { b'x' };
    let tampered = format!("{}.{}", message, String::from_utf8(tampered).unwrap());

    let result = validator.validate(&tampered, Some("000000000"));
    assert!(matches!(result, Err(AuthError::SignatureInvalid)));
}

#[test]
fn test_wrong_secret_is_signature_error() {
    let issuer = TokenIssuer::new(get_test_jwt_config());
    let token = issuer.issue_access_token("000000000").unwrap();

    let validator = TokenValidator::new(JwtConfig {
        secret: "a-completely-different-secret-key-here".to_string(),
        ..get_test_jwt_config()
    });

    let result = validator.validate(&token, Some("000000000"));
    assert!(matches!(result, Err(AuthError::SignatureInvalid)));
}

#[test]
fn test_garbage_is_malformed() {
    let validator = TokenValidator::new(get_test_jwt_config());

    for garbage in ["", "garbage", "not.enough", "a.b.c.d"] {
        let result = validator.validate(garbage, None);
        assert!(matches!(result, Err(AuthError::Malformed)));
    }
}

#[test]
fn test_subject_mismatch() {
    let issuer = TokenIssuer::new(get_test_jwt_config());
    let validator = TokenValidator::new(get_test_jwt_config());

    let token = issuer.issue_access_token("000000000").unwrap();
    let result = validator.validate(&token, Some("999999999"));
    assert!(matches!(result, Err(AuthError::SubjectMismatch)));
}

#[test]
fn test_refresh_rotates_pair_with_new_timestamps() {
    let config = get_test_jwt_config();
    let validator = TokenValidator::new(config.clone());
    let coordinator =
        RefreshCoordinator::new(validator.clone(), TokenIssuer::new(config.clone()));

    // A refresh token issued a while ago, still well within its lifetime.
    let now = Utc::now().timestamp();
    let old_refresh = encode_claims("000000000", now - 40000, now + 46400, TokenKind::Refresh);

    let rotated = coordinator.refresh(&old_refresh).unwrap();

    let access = validator
        .validate(&rotated.access_token, Some("000000000"))
        .unwrap();
    assert_eq!(access.kind, TokenKind::Access);

    let refresh = validator
        .validate(&rotated.refresh_token, Some("000000000"))
        .unwrap();
    assert_eq!(refresh.kind, TokenKind::Refresh);
    assert!(refresh.iat > now - 40000, "rotated token carries a fresh timestamp");
}

#[test]
fn test_refresh_rejects_access_token_as_wrong_kind() {
    let config = get_test_jwt_config();
    let issuer = TokenIssuer::new(config.clone());
    let coordinator = RefreshCoordinator::new(TokenValidator::new(config), issuer.clone());

    let access_token = issuer.issue_access_token("000000000").unwrap();
    let result = coordinator.refresh(&access_token);
    assert!(matches!(result, Err(AuthError::WrongKind)));
}

#[test]
fn test_expired_refresh_token_is_terminal() {
    let config = get_test_jwt_config();
    let coordinator = RefreshCoordinator::new(
        TokenValidator::new(config.clone()),
        TokenIssuer::new(config),
    );

    let now = Utc::now().timestamp();
    let expired = encode_claims("000000000", now - 90000, now - 3600, TokenKind::Refresh);

    let result = coordinator.refresh(&expired);
    assert!(matches!(result, Err(AuthError::Expired)));
}

// The full lifecycle at fixed offsets: a pair issued at t0 with access TTL
// 3600 and refresh TTL 86400, observed at t0+3700. The access token has
// aged out past the skew window, the refresh token still rotates.
#[test]
fn test_lifecycle_scenario_at_fixed_offsets() {
    let config = get_test_jwt_config();
    let validator = TokenValidator::new(config.clone());
    let coordinator = RefreshCoordinator::new(
        TokenValidator::new(config.clone()),
        TokenIssuer::new(config),
    );

    let t0 = Utc::now().timestamp() - 3700;

    let stale_access = encode_claims("000000000", t0, t0 + 3600, TokenKind::Access);
    let result = validator.validate(&stale_access, Some("000000000"));
    assert!(matches!(result, Err(AuthError::Expired)));

    // The same claims observed earlier in their life are fine: this token
    // is 3000 seconds old, 600 short of its TTL.
    let younger_access = {
        let iat = Utc::now().timestamp() - 3000;
        encode_claims("000000000", iat, iat + 3600, TokenKind::Access)
    };
    assert!(validator.validate(&younger_access, Some("000000000")).is_ok());

    let refresh = encode_claims("000000000", t0, t0 + 86400, TokenKind::Refresh);
    let rotated = coordinator.refresh(&refresh).unwrap();
    assert!(
        validator
            .validate(&rotated.access_token, Some("000000000"))
            .is_ok()
    );
}
