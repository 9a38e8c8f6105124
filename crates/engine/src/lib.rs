//! Socketing engine: drives recipe application against a live game session.
//!
//! The game itself is reached only through the traits in [`ports`]; this
//! crate owns ordering, termination, and the stale-snapshot discipline.

pub mod applicator;
pub mod error;
pub mod pass;
pub mod ports;
pub mod report;

pub use applicator::{DEFAULT_SETTLE_DELAY, RecipeApplicator, canonical_order};
pub use error::{InteractionError, SocketingError};
pub use pass::{EnabledRecipes, SocketingOptions, SocketingPass};
pub use ports::{
    GameSession, InputDriver, InventoryQuery, MenuControl, MouseButton, Relocator, ScreenLocator,
    ScreenPosition,
};
pub use report::{AppliedRecipe, PassReport, RecipeOutcome, RecipeState};
