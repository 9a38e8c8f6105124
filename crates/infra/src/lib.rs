//! Infrastructure layer: configuration, snapshot files, simulated game session.

pub mod config;
pub mod simulated;
pub mod snapshot;

mod integration_tests;

pub use config::{CharacterConfig, Config, ConfigError, SocketRecipesConfig};
pub use simulated::{SimAction, SimulatedGame};
pub use snapshot::{SnapshotError, load_items, parse_items};
