//! `sockforge-core`: shared building blocks.
//!
//! This crate contains **pure** primitives used by every other crate
//! (identifiers, the entity trait, the domain error model). No IO.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{PassId, UnitId};
