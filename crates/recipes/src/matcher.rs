//! Base and insert matching over a stash snapshot.
//!
//! Both matchers are pure: they borrow from the snapshot and never record
//! anything on failure.

use sockforge_items::Item;

use crate::eligibility::is_modified;
use crate::recipe::Recipe;
use crate::requirements::Requirements;

/// First item in snapshot order that can serve as the recipe's base.
///
/// A base qualifies when its type is accepted, its socket count equals the
/// recipe's exactly, and it is unmodified. No ranking between several
/// qualifying bases: the earliest wins.
pub fn find_base<'a>(items: &'a [Item], recipe: &Recipe) -> Option<&'a Item> {
    items.iter().find(|item| {
        recipe.accepts_base_type(&item.type_name)
            && item.socket_count() == Some(i32::from(recipe.sockets()))
            && !is_modified(item)
    })
}

/// Items covering exactly the recipe's insert multiset, or `None`.
///
/// Accepts any borrowed view of a snapshot so callers can exclude items
/// already spoken for (e.g. the chosen base). Walks it once, taking an item
/// whenever its name is still pending. The result holds exactly `recipe.inserts().len()` distinct
/// instances in discovery order, not recipe order.
pub fn find_inserts<'a, I>(items: I, recipe: &Recipe) -> Option<Vec<&'a Item>>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut pending = Requirements::from_inserts(recipe.inserts());
    let mut matched = Vec::with_capacity(pending.total());

    for item in items {
        if pending.take(&item.name) {
            matched.push(item);
            if pending.is_satisfied() {
                return Some(matched);
            }
        }
    }

    None
}
