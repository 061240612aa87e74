//! Repository implementations, one per entity.

pub mod conversation;
pub mod file;
pub mod folder;
pub mod index;
pub mod section;
