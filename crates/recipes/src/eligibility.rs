//! Decides whether a candidate base is still unmodified.
//!
//! Snapshots carry no "already socketed" flag, so this is inferred from stat
//! composition: an unmodified base only carries stats intrinsic to its type.

use sockforge_items::{Item, StatId};

/// Stats that may legally appear on an unmodified (white) base.
pub const ALLOWED_UNMODIFIED_STATS: [StatId; 20] = [
    StatId::Defense,
    StatId::MinDamage,
    StatId::TwoHandedMinDamage,
    StatId::MaxDamage,
    StatId::TwoHandedMaxDamage,
    StatId::AttackRate,
    StatId::AttackRating,
    StatId::EnhancedDamage,
    StatId::EnhancedDamageMax,
    StatId::Durability,
    StatId::EnhancedDefense,
    StatId::MaxDurabilityPercent,
    StatId::MaxDurability,
    StatId::ChanceToBlock,
    StatId::FasterBlockRate,
    StatId::NumSockets,
    StatId::AddClassSkills,
    StatId::NonClassSkill,
    StatId::AddSkillTab,
    StatId::AllSkills,
];

/// Shield type that rolls resistances innately.
pub const RESIST_CAPABLE_SHIELD: &str = "Auric Shields";

/// `true` if the item carries any stat an unmodified base could not have.
///
/// Short-circuits on the first disallowed stat.
pub fn is_modified(item: &Item) -> bool {
    let innate_resists = item.type_name == RESIST_CAPABLE_SHIELD;

    for stat in &item.stats {
        if innate_resists && stat.id.is_resistance() {
            continue;
        }
        if !ALLOWED_UNMODIFIED_STATS.contains(&stat.id) {
            return true;
        }
    }

    false
}
