//! HTTP request handlers, organized by domain.

pub mod assistant;
pub mod chat;
pub mod file;
pub mod folder;
pub mod health;
pub mod hierarchy;
pub mod indexing;
pub mod search;
pub mod section;
