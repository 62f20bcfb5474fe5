//! Three-hit attack sequence, dependent on weapon class

use crate::types::WeaponType;
use serde::{Deserialize, Serialize};

/// Sword and blade hit multipliers, in hit order
const SWORD_MULTIPLIERS: [f64; 3] = [1.0, 3.0, 6.0];
/// Scythe: 25% chance of a 4x strike, folded to expectation
const SCYTHE_CRIT_MULTIPLIER: f64 = 4.0;
const SCYTHE_CRIT_CHANCE: f64 = 0.25;
/// Staff finisher after the third hit, in units of total damage
const STAFF_FINISHER: f64 = 3.0;

/// Damage of a full three-hit sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreeHitBreakdown {
    pub weapon_type: Option<WeaponType>,
    pub hits: [f64; 3],
    pub finisher_bonus: f64,
    pub total: f64,
}

/// Expand total damage + DoT into the weapon's three-hit sequence
pub fn three_hit_sequence(
    weapon_type: Option<WeaponType>,
    total_damage: f64,
    dot: f64,
) -> ThreeHitBreakdown {
    let (hits, finisher_bonus) = match weapon_type {
        Some(WeaponType::Staff) => {
            let hit = total_damage + dot;
            ([hit, hit, hit], total_damage * STAFF_FINISHER)
        }
        Some(WeaponType::Bow) => {
            let hit = 2.0 * total_damage + dot;
            ([hit, hit, hit], 0.0)
        }
        Some(WeaponType::Sword) | Some(WeaponType::Blade) => {
            let mut hits = [0.0; 3];
            for (hit, mult) in hits.iter_mut().zip(SWORD_MULTIPLIERS) {
                *hit = total_damage * mult + dot;
            }
            (hits, 0.0)
        }
        Some(WeaponType::Scythe) => {
            let hit = total_damage * SCYTHE_CRIT_MULTIPLIER * SCYTHE_CRIT_CHANCE
                + total_damage * (1.0 - SCYTHE_CRIT_CHANCE)
                + dot;
            ([hit, hit, hit], 0.0)
        }
        None => {
            let hit = total_damage + dot;
            ([hit, hit, hit], 0.0)
        }
    };

    let total = hits.iter().sum::<f64>() + finisher_bonus;
    ThreeHitBreakdown {
        weapon_type,
        hits,
        finisher_bonus,
        total,
    }
}

impl ThreeHitBreakdown {
    /// First hit of the sequence
    pub fn first_hit(&self) -> f64 {
        self.hits[0]
    }

    /// Copy with all values rounded to 2 decimal places
    pub(crate) fn rounded(&self) -> ThreeHitBreakdown {
        ThreeHitBreakdown {
            weapon_type: self.weapon_type,
            hits: self.hits.map(super::report::round2),
            finisher_bonus: super::report::round2(self.finisher_bonus),
            total: super::report::round2(self.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_sequence() {
        let seq = three_hit_sequence(Some(WeaponType::Staff), 100.0, 0.0);
        assert_eq!(seq.hits, [100.0, 100.0, 100.0]);
        assert!((seq.finisher_bonus - 300.0).abs() < f64::EPSILON);
        assert!((seq.total - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bow_sequence() {
        let seq = three_hit_sequence(Some(WeaponType::Bow), 100.0, 0.0);
        assert_eq!(seq.hits, [200.0, 200.0, 200.0]);
        assert!((seq.total - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sword_sequence() {
        let seq = three_hit_sequence(Some(WeaponType::Sword), 100.0, 0.0);
        assert_eq!(seq.hits, [100.0, 300.0, 600.0]);
        assert!((seq.total - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blade_matches_sword() {
        let sword = three_hit_sequence(Some(WeaponType::Sword), 123.0, 4.5);
        let blade = three_hit_sequence(Some(WeaponType::Blade), 123.0, 4.5);
        assert_eq!(sword.hits, blade.hits);
        assert!((sword.total - blade.total).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scythe_expectation() {
        // 100 * 4 * 0.25 + 100 * 0.75 = 175 per hit
        let seq = three_hit_sequence(Some(WeaponType::Scythe), 100.0, 0.0);
        assert!((seq.hits[0] - 175.0).abs() < f64::EPSILON);
        assert!((seq.total - 525.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unarmed_sequence() {
        let seq = three_hit_sequence(None, 100.0, 10.0);
        assert_eq!(seq.hits, [110.0, 110.0, 110.0]);
        assert!((seq.finisher_bonus - 0.0).abs() < f64::EPSILON);
        assert!((seq.total - 330.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dot_added_per_hit() {
        let seq = three_hit_sequence(Some(WeaponType::Sword), 100.0, 50.0);
        assert_eq!(seq.hits, [150.0, 350.0, 650.0]);
    }
}
