//! # maktabati-core
//!
//! Core crate for the Maktabati document-library server. Contains the
//! configuration schemas, the unified error system, and the traits shared
//! by the storage layer.
//!
//! This crate has **no** internal dependencies on other Maktabati crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
