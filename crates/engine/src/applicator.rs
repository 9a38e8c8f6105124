//! Applies one recipe's inserts to a base already in the working area.

use std::collections::HashSet;
use std::time::Duration;

use tracing::debug;

use sockforge_core::{Entity, UnitId};
use sockforge_items::Item;
use sockforge_recipes::Recipe;

use crate::error::SocketingError;
use crate::ports::{InputDriver, MenuControl, MouseButton, ScreenLocator};

/// Pause between picking up an insert and dropping it on the base, and
/// before closing menus at the end.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Inserts from `working` in the recipe's declared order.
///
/// For each required name, takes the first not-yet-used instance with that
/// name; the base itself is never a candidate. On shortfall returns the
/// names that could not be resolved.
pub fn canonical_order<'a>(
    recipe: &Recipe,
    base: &Item,
    working: &'a [Item],
) -> Result<Vec<&'a Item>, Vec<String>> {
    let mut used: HashSet<UnitId> = HashSet::from([base.id()]);
    let mut ordered = Vec::with_capacity(recipe.inserts().len());
    let mut missing = Vec::new();

    for required in recipe.inserts() {
        let next = working
            .iter()
            .find(|item| item.name == *required && !used.contains(&item.id()));

        match next {
            Some(item) => {
                used.insert(item.id());
                ordered.push(item);
            }
            None => missing.push(required.clone()),
        }
    }

    if missing.is_empty() {
        Ok(ordered)
    } else {
        Err(missing)
    }
}

/// Drives the select-insert / combine-with-base click sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RecipeApplicator {
    settle_delay: Duration,
}

impl Default for RecipeApplicator {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY)
    }
}

impl RecipeApplicator {
    pub fn new(settle_delay: Duration) -> Self {
        Self { settle_delay }
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Socket `recipe`'s inserts into `base`, strictly one after another.
    ///
    /// `working` must be a snapshot of the working area taken after the
    /// inserts were relocated. Any collaborator error stops the sequence and
    /// is returned as-is; nothing is retried. Returns the applied insert ids
    /// in application order.
    pub fn apply<U>(
        &self,
        ui: &mut U,
        recipe: &Recipe,
        base: &Item,
        working: &[Item],
    ) -> Result<Vec<UnitId>, SocketingError>
    where
        U: ScreenLocator + InputDriver + MenuControl,
    {
        let _span = tracing::info_span!("socket_item", recipe = recipe.name(), base = %base.id()).entered();

        let ordered = canonical_order(recipe, base, working).map_err(|missing| {
            SocketingError::InsertsMissing {
                recipe: recipe.name().to_string(),
                missing,
            }
        })?;

        let base_pos = ui.screen_position(base);
        let mut applied = Vec::with_capacity(ordered.len());

        for insert in ordered {
            let insert_pos = ui.screen_position(insert);
            ui.click(MouseButton::Left, insert_pos)?;
            ui.sleep(self.settle_delay);
            ui.click(MouseButton::Left, base_pos)?;

            debug!("socketed {} ({}) into {}", insert.name, insert.id(), base.id());
            applied.push(insert.id());
        }

        ui.sleep(self.settle_delay);
        ui.close_all_menus()?;

        Ok(applied)
    }
}
