//! Item definitions - the static records the resolver reads stats from

use crate::types::{ItemId, SetKey, SlotKind, Tier, WeaponType};
use serde::{Deserialize, Serialize};

/// Raw stat bonuses carried by an item
///
/// `atk_min`/`atk_max` form a pair: both zero or both set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStats {
    #[serde(default)]
    pub atk_min: f64,
    #[serde(default)]
    pub atk_max: f64,
    #[serde(default)]
    pub magic: f64,
    #[serde(default)]
    pub crit_chance: f64,
    #[serde(default)]
    pub crit_damage: f64,
    #[serde(default)]
    pub health: f64,
    #[serde(default)]
    pub shield: f64,
}

impl ItemStats {
    /// Whether the item carries a physical attack range
    pub fn has_attack_pair(&self) -> bool {
        self.atk_min != 0.0 || self.atk_max != 0.0
    }
}

/// Special effect values carried by an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialEffects {
    #[serde(default)]
    pub burn_chance: f64,
    #[serde(default)]
    pub bleed_chance: f64,
    #[serde(default)]
    pub poison_chance: f64,
    #[serde(default)]
    pub freeze_chance: f64,
    /// Chance of a second strike; applied as a 1 + chance damage multiplier
    #[serde(default)]
    pub double_damage_chance: f64,
    /// Extra magic-damage fraction added to burn and poison pools
    #[serde(default)]
    pub dot_bonus: f64,
    /// Flat damage multiplier (presence-based, does not stack)
    #[serde(default)]
    pub damage_multiplier: f64,
    /// Flat min-damage bleed, always active while equipped
    #[serde(default)]
    pub blood_butcher: bool,
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub slot: SlotKind,
    #[serde(default)]
    pub weapon_type: Option<WeaponType>,
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub level_requirement: u32,
    #[serde(default)]
    pub stats: ItemStats,
    #[serde(default)]
    pub effects: SpecialEffects,
    #[serde(default)]
    pub set: Option<SetKey>,
}

impl ItemDefinition {
    /// Whether this item may occupy an equipment slot
    pub fn is_equipment(&self) -> bool {
        self.slot == SlotKind::Equipment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_with_defaults() {
        let toml = r#"
id = "sharpener_rock"
name = "Sharpener's Rock"
slot = "equipment"
tier = "I"
level_requirement = 1

[stats]
crit_chance = 5
crit_damage = 10
"#;
        let item: ItemDefinition = toml::from_str(toml).unwrap();
        assert_eq!(item.id.as_str(), "sharpener_rock");
        assert!(!item.stats.has_attack_pair());
        assert!((item.stats.crit_chance - 5.0).abs() < f64::EPSILON);
        assert_eq!(item.set, None);
        assert!(!item.effects.blood_butcher);
    }

    #[test]
    fn test_attack_pair_detection() {
        let stats = ItemStats {
            atk_min: 100.0,
            atk_max: 111.0,
            ..Default::default()
        };
        assert!(stats.has_attack_pair());
        assert!(!ItemStats::default().has_attack_pair());
    }
}
