use serde::{Deserialize, Serialize};

/// Stat identifiers the engine needs to reason about.
///
/// Anything the snapshot source reports that is not listed here deserializes
/// to [`StatId::Unknown`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatId {
    // Base item properties.
    Defense,
    MinDamage,
    MaxDamage,
    TwoHandedMinDamage,
    TwoHandedMaxDamage,
    AttackRate,
    AttackRating,
    EnhancedDamage,
    EnhancedDamageMax,
    EnhancedDefense,
    Durability,
    MaxDurability,
    MaxDurabilityPercent,
    ChanceToBlock,
    FasterBlockRate,
    NumSockets,

    // Skills intrinsic to class-specific bases.
    AddClassSkills,
    NonClassSkill,
    AddSkillTab,
    AllSkills,

    // Resistances.
    ColdResist,
    FireResist,
    LightningResist,
    PoisonResist,

    // Common affixes / socket fill results.
    Strength,
    Dexterity,
    Vitality,
    Energy,
    MaxLife,
    MaxMana,
    MagicFind,
    GoldFind,
    LifeSteal,
    ManaSteal,
    IncreasedAttackSpeed,
    FasterCastRate,
    FasterHitRecovery,
    FasterRunWalk,
    LightRadius,

    /// Sockets already holding an insert.
    FilledSockets,

    #[serde(other)]
    Unknown,
}

impl StatId {
    pub fn is_resistance(self) -> bool {
        matches!(
            self,
            StatId::ColdResist | StatId::FireResist | StatId::LightningResist | StatId::PoisonResist
        )
    }
}

/// A single stat entry on an item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: StatId,
    pub value: i32,
    /// Sub-index for stats that exist per skill/class; 0 for plain stats.
    #[serde(default)]
    pub layer: u16,
}

impl Stat {
    pub fn new(id: StatId, value: i32) -> Self {
        Self { id, value, layer: 0 }
    }

    pub fn with_layer(mut self, layer: u16) -> Self {
        self.layer = layer;
        self
    }
}
