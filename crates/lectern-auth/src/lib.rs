//! # Lectern Auth
//!
//! Token lifecycle and request-authentication primitives for the Lectern
//! API.
//!
//! This crate provides:
//!
//! - [`claims`]: Claim structures shared by access and refresh tokens
//! - [`codec`]: Encoding/decoding of signed compact tokens
//! - [`issuer`]: Access/refresh token issuance
//! - [`validator`]: Signature, expiry, and subject validation
//! - [`refresh`]: Exchange of a refresh token for a new token pair
//! - [`error`]: The closed set of authentication failure kinds
//!
//! # Token Types
//!
//! Two kinds of token exist, distinguished by an embedded kind tag:
//!
//! - **Access token**: short-lived credential authorizing API calls
//! - **Refresh token**: longer-lived credential used solely to obtain a
//!   new token pair
//!
//! Issuance is fully stateless: nothing is persisted, and validity is
//! decided solely by signature and expiry at verification time.
//!
//! # Example
//!
//! ```ignore
//! use lectern_auth::{TokenIssuer, TokenValidator};
//! use lectern_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let issuer = TokenIssuer::new(config.clone());
//! let validator = TokenValidator::new(config);
//!
//! let pair = issuer.issue_pair("7e0a1c9e-...")?;
//! let claims = validator.validate(&pair.access_token, Some("7e0a1c9e-..."))?;
//! ```

pub mod claims;
pub mod codec;
pub mod error;
pub mod issuer;
pub mod refresh;
pub mod validator;

// Re-export commonly used types at crate root
pub use claims::{Claims, TokenKind, TokenPair};
pub use error::AuthError;
pub use issuer::TokenIssuer;
pub use refresh::RefreshCoordinator;
pub use validator::TokenValidator;
