//! Section hierarchy materialization.
//!
//! [`builder`] holds the pure tree construction over already-fetched
//! records; [`service`] wires it to the repositories.

pub mod builder;
pub mod service;

pub use builder::materialize;
pub use service::HierarchyService;
