//! # maktabati-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for Maktabati. Every repository query is scoped by the
//! owning user so no operation can cross tenant boundaries.

pub mod connection;
pub mod migration;
pub mod repositories;
