//! DamageReport - the full output of a resolver call

use super::three_hit::ThreeHitBreakdown;
use crate::loadout::Potions;
use crate::types::{DamageKind, SetTally};
use serde::{Deserialize, Serialize};

/// Round to 2 decimal places (damage values)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place (percentages)
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Which set bonuses triggered for this loadout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBonusesApplied {
    pub wolf_howl: bool,
    pub crimson: bool,
    pub forest_dweller: bool,
    pub explorer: bool,
    pub flame: bool,
}

/// Defensive player stats, reported for point-derived loadouts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Health from vitality, equipment and the Explorer bonus
    pub health: f64,
    /// Shield from defense points and equipment
    pub shield: f64,
    pub total_hp: f64,
    pub min_damage: f64,
    pub max_damage: f64,
    pub magic_damage: f64,
    pub crit_rate: f64,
    pub crit_damage: f64,
}

/// Result of resolving a loadout
///
/// Every field is reproducible from the config and catalog alone. Damage
/// values are rounded to 2 decimal places, percentages to 1; anything
/// derived from these fields downstream sees the rounded values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    // === Running totals after weapon and equipment ===
    pub min_damage: f64,
    pub max_damage: f64,
    pub magic_damage: f64,
    pub avg_physical_damage: f64,

    // === Potion- and set-boosted pools ===
    pub effective_min_damage: f64,
    pub effective_max_damage: f64,
    pub effective_avg_physical_damage: f64,
    pub effective_magic_damage: f64,

    // === Resolution ===
    pub base_damage: f64,
    pub crit_multiplied_damage: f64,
    pub dot_damage: f64,
    pub final_damage: f64,
    /// final_damage / base_damage, 0 when base_damage is 0
    pub effective_multiplier: f64,

    // === Crit and DoT statistics (percentages) ===
    pub crit_rate: f64,
    pub crit_damage: f64,
    pub burn_chance: f64,
    pub bleed_chance: f64,
    pub poison_chance: f64,

    // === Context ===
    pub flame_set_count: u32,
    pub damage_type: DamageKind,
    pub set_counts: SetTally,
    pub set_bonuses_applied: SetBonusesApplied,
    pub potion_effects: Potions,
    pub three_hit: ThreeHitBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_stats: Option<PlayerStats>,
}

impl DamageReport {
    /// Short human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{:?} {:.2} base -> {:.2} final ({:.2} dot, {:.1}% crit)",
            self.damage_type, self.base_damage, self.final_damage, self.dot_damage, self.crit_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert!((round2(1.239) - 1.24).abs() < f64::EPSILON);
        assert!((round2(262.499) - 262.5).abs() < f64::EPSILON);
        assert!((round2(0.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round1() {
        assert!((round1(52.04) - 52.0).abs() < f64::EPSILON);
        assert!((round1(52.06) - 52.1).abs() < f64::EPSILON);
    }
}
