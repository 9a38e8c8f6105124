use serde::{Deserialize, Serialize};

/// Container an item currently lives in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageLocation {
    Stash,
    SharedStash,
    /// Working area: items must be here to be combined.
    Inventory,
    Cube,
    Equipped,
    Belt,
    Ground,
}

impl StorageLocation {
    /// Stash-class storage, the source of bases and inserts.
    pub const STASH_CLASS: [StorageLocation; 2] = [StorageLocation::Stash, StorageLocation::SharedStash];

    pub fn is_stash_class(self) -> bool {
        matches!(self, StorageLocation::Stash | StorageLocation::SharedStash)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StorageLocation::Stash => "stash",
            StorageLocation::SharedStash => "shared_stash",
            StorageLocation::Inventory => "inventory",
            StorageLocation::Cube => "cube",
            StorageLocation::Equipped => "equipped",
            StorageLocation::Belt => "belt",
            StorageLocation::Ground => "ground",
        }
    }
}

impl core::fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
