use serde::{Deserialize, Serialize};

use sockforge_core::{Entity, UnitId};

use crate::location::StorageLocation;
use crate::stat::{Stat, StatId};

/// Observed item instance.
///
/// `name` identifies what the item is (e.g. `TirRune`), `type_name` the base
/// type family used for recipe qualification (e.g. `Helm`, `Auric Shields`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub unit_id: UnitId,
    pub name: String,
    pub type_name: String,
    pub location: StorageLocation,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl Item {
    pub fn new(
        unit_id: impl Into<UnitId>,
        name: impl Into<String>,
        type_name: impl Into<String>,
        location: StorageLocation,
    ) -> Self {
        Self {
            unit_id: unit_id.into(),
            name: name.into(),
            type_name: type_name.into(),
            location,
            stats: Vec::new(),
        }
    }

    pub fn with_stat(mut self, id: StatId, value: i32) -> Self {
        self.stats.push(Stat::new(id, value));
        self
    }

    pub fn with_stats(mut self, stats: impl IntoIterator<Item = Stat>) -> Self {
        self.stats.extend(stats);
        self
    }

    /// First stat matching `id` on `layer`.
    pub fn stat(&self, id: StatId, layer: u16) -> Option<&Stat> {
        self.stats.iter().find(|s| s.id == id && s.layer == layer)
    }

    /// Number of sockets, if the item has the socket stat at all.
    pub fn socket_count(&self) -> Option<i32> {
        self.stat(StatId::NumSockets, 0).map(|s| s.value)
    }
}

impl Entity for Item {
    type Id = UnitId;

    fn id(&self) -> UnitId {
        self.unit_id
    }
}

/// Items whose location is one of `locations`, preserving snapshot order.
pub fn filter_by_location<'a>(
    items: &'a [Item],
    locations: &'a [StorageLocation],
) -> impl Iterator<Item = &'a Item> + 'a {
    items.iter().filter(move |i| locations.contains(&i.location))
}
