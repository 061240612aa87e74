//! JWT claims and validation.

pub mod claims;
pub mod decoder;
