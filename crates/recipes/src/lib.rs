//! Socket recipe domain: the catalog and the matching rules.
//!
//! Everything here is deterministic and side-effect free. Matchers take a
//! snapshot slice and return borrowed items; relocation and combining are the
//! engine's job.

pub mod catalog;
pub mod eligibility;
pub mod matcher;
pub mod recipe;
pub mod requirements;

pub use catalog::RecipeCatalog;
pub use eligibility::{ALLOWED_UNMODIFIED_STATS, RESIST_CAPABLE_SHIELD, is_modified};
pub use matcher::{find_base, find_inserts};
pub use recipe::Recipe;
pub use requirements::Requirements;
