//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::authenticate`] gate validates the token and resolves the
//!    subject through the identity directory
//! 3. On success an [`auth::AuthenticatedPrincipal`] is attached to the
//!    request; handlers read it through the [`auth::CurrentUser`] extractor
//! 4. Requests without credentials continue unauthenticated; handlers that
//!    require a principal reject them
//!
//! Requests carrying an invalid bearer token are rejected at the gate with
//! a 401 and never reach a handler.

pub mod auth;
