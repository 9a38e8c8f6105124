//! In-memory game session.
//!
//! Implements every engine port over a plain item list so passes can run
//! without a game client (tests, dry runs from the CLI). Socketing follows
//! the in-game cursor model: click an insert to pick it up, click a
//! socketable item to place it. A socketed item reports its fill level as
//! [`StatId::FilledSockets`], so it no longer reads as an unmodified base.

use std::collections::HashMap;
use std::time::Duration;

use sockforge_core::UnitId;
use sockforge_engine::{
    InputDriver, InteractionError, InventoryQuery, MenuControl, MouseButton, Relocator,
    ScreenLocator, ScreenPosition,
};
use sockforge_items::{Item, Stat, StatId, StorageLocation, filter_by_location};

const SLOT_ORIGIN: i32 = 20;
const SLOT_SIZE: i32 = 32;
const SLOTS_PER_ROW: usize = 16;

/// Everything the simulated session was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimAction {
    TakeFromStash(Vec<UnitId>),
    StashInventory,
    Click {
        button: MouseButton,
        at: ScreenPosition,
        target: Option<UnitId>,
    },
    Sleep(Duration),
    CloseMenus,
}

#[derive(Debug, Clone, Default)]
pub struct SimulatedGame {
    items: Vec<Item>,
    slots: HashMap<UnitId, ScreenPosition>,
    filled: HashMap<UnitId, u8>,
    cursor: Option<UnitId>,
    actions: Vec<SimAction>,
    clicks: usize,
    fail_click_at: Option<usize>,
}

impl SimulatedGame {
    pub fn new(items: Vec<Item>) -> Self {
        let slots = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.unit_id, slot_position(idx)))
            .collect();

        Self {
            items,
            slots,
            ..Self::default()
        }
    }

    /// Make the `n`-th click (1-based) fail without side effects.
    pub fn fail_click_at(mut self, n: usize) -> Self {
        self.fail_click_at = Some(n);
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, unit_id: UnitId) -> Option<&Item> {
        self.items.iter().find(|i| i.unit_id == unit_id)
    }

    pub fn actions(&self) -> &[SimAction] {
        &self.actions
    }

    pub fn clicks(&self) -> usize {
        self.clicks
    }

    /// Inserts placed into `unit_id` so far.
    pub fn filled_sockets(&self, unit_id: UnitId) -> u8 {
        self.filled.get(&unit_id).copied().unwrap_or(0)
    }

    pub fn cursor(&self) -> Option<UnitId> {
        self.cursor
    }

    fn item_at(&self, at: ScreenPosition) -> Option<UnitId> {
        self.slots
            .iter()
            .find(|(id, pos)| **pos == at && self.item(**id).is_some())
            .map(|(id, _)| *id)
    }

    fn click_error(at: ScreenPosition, reason: impl Into<String>) -> InteractionError {
        InteractionError::Click {
            position: at,
            reason: reason.into(),
        }
    }

    /// Drop the held insert into `base`.
    fn socket(&mut self, held: UnitId, base: UnitId, at: ScreenPosition) -> Result<(), InteractionError> {
        if held == base {
            return Err(Self::click_error(at, "cannot socket an item into itself"));
        }

        let capacity = self
            .item(base)
            .and_then(Item::socket_count)
            .unwrap_or(0)
            .max(0);
        let filled = self.filled_sockets(base);
        if i32::from(filled) >= capacity {
            return Err(Self::click_error(at, format!("item {base} has no free socket")));
        }

        let Some(idx) = self.items.iter().position(|i| i.unit_id == held) else {
            return Err(Self::click_error(at, format!("held item {held} vanished")));
        };
        let insert = self.items.remove(idx);
        self.slots.remove(&held);

        let filled = filled + 1;
        if let Some(target) = self.items.iter_mut().find(|i| i.unit_id == base) {
            target.stats.extend(insert.stats.iter().copied());
            target.stats.retain(|s| s.id != StatId::FilledSockets);
            target.stats.push(Stat::new(StatId::FilledSockets, i32::from(filled)));
        }
        self.filled.insert(base, filled);
        self.cursor = None;

        tracing::trace!("simulated socket of {} ({}) into {}", insert.name, held, base);
        Ok(())
    }
}

fn slot_position(idx: usize) -> ScreenPosition {
    let col = (idx % SLOTS_PER_ROW) as i32;
    let row = (idx / SLOTS_PER_ROW) as i32;
    ScreenPosition::new(SLOT_ORIGIN + col * SLOT_SIZE, SLOT_ORIGIN + row * SLOT_SIZE)
}

impl InventoryQuery for SimulatedGame {
    fn items_in(&self, locations: &[StorageLocation]) -> Vec<Item> {
        filter_by_location(&self.items, locations).cloned().collect()
    }

    fn find_by_id(&self, unit_id: UnitId) -> Option<Item> {
        self.item(unit_id).cloned()
    }
}

impl Relocator for SimulatedGame {
    fn take_from_stash(&mut self, items: &[Item]) -> Result<(), InteractionError> {
        // Validate the whole batch first so a bad request moves nothing.
        for wanted in items {
            match self.item(wanted.unit_id) {
                None => {
                    return Err(InteractionError::Relocation(format!(
                        "item {} does not exist",
                        wanted.unit_id
                    )));
                }
                Some(item) if !item.location.is_stash_class() => {
                    return Err(InteractionError::Relocation(format!(
                        "item {} is in {}, not the stash",
                        item.unit_id, item.location
                    )));
                }
                Some(_) => {}
            }
        }

        for item in &mut self.items {
            if items.iter().any(|w| w.unit_id == item.unit_id) {
                item.location = StorageLocation::Inventory;
            }
        }

        self.actions
            .push(SimAction::TakeFromStash(items.iter().map(|i| i.unit_id).collect()));
        Ok(())
    }

    fn stash_inventory(&mut self) -> Result<(), InteractionError> {
        for item in &mut self.items {
            if item.location == StorageLocation::Inventory {
                item.location = StorageLocation::Stash;
            }
        }
        self.actions.push(SimAction::StashInventory);
        Ok(())
    }
}

impl ScreenLocator for SimulatedGame {
    fn screen_position(&self, item: &Item) -> ScreenPosition {
        // Unknown items map to an off-grid position that no click resolves.
        self.slots
            .get(&item.unit_id)
            .copied()
            .unwrap_or(ScreenPosition::new(-1, -1))
    }
}

impl InputDriver for SimulatedGame {
    fn click(&mut self, button: MouseButton, at: ScreenPosition) -> Result<(), InteractionError> {
        self.clicks += 1;
        if self.fail_click_at == Some(self.clicks) {
            return Err(Self::click_error(at, "injected failure"));
        }

        let target = self.item_at(at);
        self.actions.push(SimAction::Click { button, at, target });

        if button != MouseButton::Left {
            return Err(Self::click_error(at, "only left clicks are simulated"));
        }

        let Some(target) = target else {
            return Err(Self::click_error(at, "nothing at position"));
        };
        if self.item(target).map(|i| i.location) != Some(StorageLocation::Inventory) {
            return Err(Self::click_error(at, format!("item {target} is not in the inventory")));
        }

        match self.cursor {
            None => {
                self.cursor = Some(target);
                Ok(())
            }
            Some(held) => self.socket(held, target, at),
        }
    }

    fn sleep(&mut self, duration: Duration) {
        self.actions.push(SimAction::Sleep(duration));
    }
}

impl MenuControl for SimulatedGame {
    fn close_all_menus(&mut self) -> Result<(), InteractionError> {
        self.actions.push(SimAction::CloseMenus);
        Ok(())
    }
}
