//! Narrow interfaces to the game client.
//!
//! Implementations own inventory access, input simulation and UI layout;
//! the engine only composes them. `GameSession` is implemented for any type
//! providing all five.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use sockforge_core::UnitId;
use sockforge_items::{Item, StorageLocation};

use crate::error::InteractionError;

/// On-screen pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub x: i32,
    pub y: i32,
}

impl ScreenPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for ScreenPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

/// Read access to item snapshots.
pub trait InventoryQuery {
    /// Fresh snapshot of every item in any of `locations`.
    fn items_in(&self, locations: &[StorageLocation]) -> Vec<Item>;

    /// Current state of one item instance.
    fn find_by_id(&self, unit_id: UnitId) -> Option<Item>;
}

/// Moves items between stash-class storage and the working area.
pub trait Relocator {
    /// Move `items` from the stash into the inventory.
    fn take_from_stash(&mut self, items: &[Item]) -> Result<(), InteractionError>;

    /// Return everything left in the inventory to the stash.
    fn stash_inventory(&mut self) -> Result<(), InteractionError>;
}

pub trait ScreenLocator {
    fn screen_position(&self, item: &Item) -> ScreenPosition;
}

/// Simulated user input. `sleep` blocks; there is no cancellation.
pub trait InputDriver {
    fn click(&mut self, button: MouseButton, at: ScreenPosition) -> Result<(), InteractionError>;

    fn sleep(&mut self, duration: Duration);
}

pub trait MenuControl {
    /// Close every interaction surface left open.
    fn close_all_menus(&mut self) -> Result<(), InteractionError>;
}

/// Everything the processing loop needs from the game.
pub trait GameSession: InventoryQuery + Relocator + ScreenLocator + InputDriver + MenuControl {}

impl<T> GameSession for T where T: InventoryQuery + Relocator + ScreenLocator + InputDriver + MenuControl {}
