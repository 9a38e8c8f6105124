//! Item snapshot files (JSON array of items).

use std::path::{Path, PathBuf};

use thiserror::Error;

use sockforge_items::Item;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate unit id {0} in snapshot")]
    DuplicateUnit(u32),
}

/// Parse items, rejecting snapshots that repeat a unit id.
pub fn parse_items(json: &str) -> Result<Vec<Item>, SnapshotError> {
    let items: Vec<Item> = serde_json::from_str(json)?;

    let mut seen = std::collections::HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.unit_id) {
            return Err(SnapshotError::DuplicateUnit(item.unit_id.get()));
        }
    }

    Ok(items)
}

pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<Item>, SnapshotError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_items(&content)
}
