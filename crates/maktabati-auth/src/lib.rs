//! # maktabati-auth
//!
//! Bearer-token verification. Tokens are issued by the external identity
//! provider; this crate only decodes and validates them.

pub mod jwt;

pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
