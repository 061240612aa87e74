//! Traits shared across the Maktabati crates.

pub mod storage;

pub use storage::StorageProvider;
