//! Authentication module.
//!
//! Login (credentials to token pair) and token refresh (refresh token to a
//! new pair). The refresh endpoint deliberately does not pass through the
//! authentication gate: its caller, by definition, no longer holds a valid
//! access token.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
