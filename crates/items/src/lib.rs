//! Item data model.
//!
//! Items are owned by the game; this crate only describes the snapshots the
//! engine observes (identity, type, storage location, stat list).

pub mod item;
pub mod location;
pub mod stat;

pub use item::{Item, filter_by_location};
pub use location::StorageLocation;
pub use stat::{Stat, StatId};
