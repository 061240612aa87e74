//! # maktabati-storage
//!
//! Blob storage for Maktabati. Implementations of the core
//! `StorageProvider` trait plus a manager that selects a provider from
//! configuration and derives public file URLs.

pub mod manager;
pub mod providers;

pub use manager::StorageManager;
