//! # Lectern Config
//!
//! Configuration types for the Lectern API.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`jwt`]: Token signing and lifetime configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! All `from_env()` constructors are meant to be called once at process
//! start; the resulting structs are immutable for the process lifetime.

pub mod cors;
pub mod jwt;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
