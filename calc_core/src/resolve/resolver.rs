//! Damage resolution - folding a loadout through the modifier pipeline

use super::dot::{compute_dot, DotInputs};
use super::report::{round1, round2, DamageReport, PlayerStats, SetBonusesApplied};
use super::three_hit::three_hit_sequence;
use crate::catalog::{ItemCatalog, ItemDefinition};
use crate::config::{CalcConstants, CritModel};
use crate::error::CalcError;
use crate::loadout::{LoadoutConfig, StatInput};
use crate::types::{DamageKind, SetKey, SetTally, WeaponType};
use tracing::debug;

/// Equipment drop ranges collapse to an expected range around the midpoint
const DROP_RANGE_MIN_FACTOR: f64 = 0.85;
const DROP_RANGE_MAX_FACTOR: f64 = 1.25;

/// Stateless damage resolver over a borrowed catalog
///
/// Holds no mutable state; identical inputs produce identical reports, so
/// a single resolver can serve arbitrarily many concurrent calls.
pub struct DamageResolver<'a> {
    catalog: &'a ItemCatalog,
    constants: CalcConstants,
}

impl<'a> DamageResolver<'a> {
    /// Create a resolver with default constants
    pub fn new(catalog: &'a ItemCatalog) -> Self {
        DamageResolver {
            catalog,
            constants: CalcConstants::default(),
        }
    }

    /// Create a resolver with custom constants
    pub fn with_constants(catalog: &'a ItemCatalog, constants: CalcConstants) -> Self {
        DamageResolver { catalog, constants }
    }

    /// The catalog this resolver reads from
    pub fn catalog(&self) -> &ItemCatalog {
        self.catalog
    }

    /// The constants in effect
    pub fn constants(&self) -> &CalcConstants {
        &self.constants
    }

    /// Resolve a loadout into a damage report
    ///
    /// Fails only on malformed numeric input. Item ids absent from the
    /// catalog contribute nothing.
    pub fn resolve(&self, loadout: &LoadoutConfig) -> Result<DamageReport, CalcError> {
        loadout.validate()?;
        let c = &self.constants;
        let sp = &c.stat_points;

        // Step 1: base stats, derived from points or supplied directly
        let mut min_damage;
        let mut max_damage;
        let mut magic_damage;
        let mut crit_rate;
        let mut crit_damage;
        let mut point_input = None;
        match loadout.stats {
            StatInput::FromPoints {
                strength,
                vitality,
                intelligence,
                dexterity,
                defense,
                ..
            } => {
                let effective_dex = dexterity.min(sp.dex_crit_cap) as f64;
                min_damage = strength as f64 * sp.str_dmg_min + sp.base_atk_min;
                max_damage = strength as f64 * sp.str_dmg_max + sp.base_atk_max;
                magic_damage = intelligence as f64 * sp.int_magic + sp.base_magic;
                crit_rate = sp.base_crit_rate + effective_dex * sp.dex_crit;
                crit_damage = sp.base_crit_damage;
                point_input = Some((vitality, defense));
            }
            StatInput::Manual {
                min_damage: min,
                max_damage: max,
                magic_damage: magic,
                crit_rate_percent,
                crit_damage_percent,
            } => {
                min_damage = min;
                max_damage = max;
                magic_damage = magic;
                crit_rate = if crit_rate_percent > 0.0 {
                    crit_rate_percent
                } else {
                    sp.base_crit_rate
                };
                crit_damage = if crit_damage_percent > 0.0 {
                    crit_damage_percent
                } else {
                    sp.base_crit_damage
                };
            }
        }

        // Step 2: damage type follows the selected weapon
        let weapon = loadout.weapon.as_ref().and_then(|id| self.catalog.get(id));
        let weapon_type = weapon.and_then(|w| w.weapon_type);
        let damage_type = if weapon_type == Some(WeaponType::Staff) {
            DamageKind::Magic
        } else {
            DamageKind::Attack
        };

        let mut tally = SetTally::default();
        let mut bonus_health = 0.0;
        let mut bonus_shield = 0.0;

        // Step 3: weapon stats add raw, no drop-range transform
        if let Some(weapon) = weapon {
            min_damage += weapon.stats.atk_min;
            max_damage += weapon.stats.atk_max;
            magic_damage += weapon.stats.magic;
            crit_rate += weapon.stats.crit_chance;
            crit_damage += weapon.stats.crit_damage;
            bonus_health += weapon.stats.health;
            bonus_shield += weapon.stats.shield;
            if let Some(set) = weapon.set {
                tally.add(set);
            }
        }

        // Step 4: equipment, per occurrence; unknown ids are skipped
        let equipment: Vec<&ItemDefinition> = loadout
            .equipment
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect();
        for item in &equipment {
            if item.stats.has_attack_pair() {
                let mid = (item.stats.atk_min + item.stats.atk_max) / 2.0;
                min_damage += mid * DROP_RANGE_MIN_FACTOR;
                max_damage += mid * DROP_RANGE_MAX_FACTOR;
            }
            magic_damage += item.stats.magic;
            crit_rate += item.stats.crit_chance;
            crit_damage += item.stats.crit_damage;
            bonus_health += item.stats.health;
            bonus_shield += item.stats.shield;
            if let Some(set) = item.set {
                tally.add(set);
            }
        }

        let avg_physical_damage = (min_damage + max_damage) / 2.0;

        // Step 5: potions compound on the running totals,
        // attack -> golden apple -> magic
        let mut effective_min = min_damage;
        let mut effective_max = max_damage;
        let mut effective_avg = avg_physical_damage;
        let mut effective_magic = magic_damage;
        if loadout.potions.attack_potion {
            effective_min *= c.potions.attack_potion;
            effective_max *= c.potions.attack_potion;
            effective_avg *= c.potions.attack_potion;
        }
        if loadout.potions.golden_apple {
            effective_min *= c.potions.golden_apple;
            effective_max *= c.potions.golden_apple;
            effective_avg *= c.potions.golden_apple;
        }
        if loadout.potions.magic_potion {
            effective_magic *= c.potions.magic_potion;
        }

        // Step 6: set bonuses at the piece threshold, each independent
        let threshold = c.sets.piece_threshold;
        let mut applied = SetBonusesApplied::default();
        if tally.count(SetKey::WolfHowl) >= threshold {
            crit_rate += c.sets.wolf_howl_crit;
            applied.wolf_howl = true;
            debug!(pieces = tally.wolf_howl, "wolf howl set bonus applied");
        }
        if tally.count(SetKey::Crimson) >= threshold {
            effective_magic *= c.sets.crimson_magic;
            applied.crimson = true;
            debug!(pieces = tally.crimson, "crimson set bonus applied");
        }
        if tally.count(SetKey::ForestDweller) >= threshold && damage_type == DamageKind::Attack {
            effective_min *= c.sets.forest_dweller_attack;
            effective_max *= c.sets.forest_dweller_attack;
            effective_avg *= c.sets.forest_dweller_attack;
            applied.forest_dweller = true;
            debug!(pieces = tally.forest_dweller, "forest dweller set bonus applied");
        }
        if tally.count(SetKey::Explorer) >= threshold {
            // Health bonus lands in player stats, no damage effect
            applied.explorer = true;
            debug!(pieces = tally.explorer, "explorer set bonus applied");
        }
        if tally.count(SetKey::Flame) >= threshold {
            // Burn chance bonus is combined into the DoT pools below
            applied.flame = true;
            debug!(pieces = tally.flame, "flame set bonus applied");
        }

        // Step 7: crit resolution
        let crit_fraction = (crit_rate / 100.0).min(1.0);
        let crit_multiplier = 1.0 + crit_damage / 100.0;
        let base_damage = match damage_type {
            DamageKind::Magic => effective_magic,
            DamageKind::Attack => effective_avg,
        };
        let mut total_damage = match c.crit.model {
            CritModel::ExpectedSplit => {
                // Crits read from the max-damage pool for attacks
                let crit_pool = match damage_type {
                    DamageKind::Magic => effective_magic,
                    DamageKind::Attack => effective_max,
                };
                base_damage * (1.0 - crit_fraction) + crit_pool * crit_multiplier * crit_fraction
            }
            CritModel::Blended => base_damage * (1.0 + crit_fraction * (crit_multiplier - 1.0)),
        };

        // Step 8: flat equipment multipliers, presence-based, non-stacking
        let damage_multiplier = equipment
            .iter()
            .map(|i| i.effects.damage_multiplier)
            .fold(0.0, f64::max);
        if damage_multiplier > 0.0 {
            total_damage *= damage_multiplier;
        }
        let double_chance = equipment
            .iter()
            .map(|i| i.effects.double_damage_chance)
            .fold(0.0, f64::max);
        if double_chance > 0.0 {
            total_damage *= 1.0 + double_chance;
        }

        // Step 9: DoT pools read the potion-boosted values
        let flame_set_burn = if applied.flame { c.sets.flame_burn } else { 0.0 };
        let dot = compute_dot(
            &equipment,
            DotInputs {
                effective_min_damage: effective_min,
                effective_avg_physical_damage: effective_avg,
                effective_magic_damage: effective_magic,
                flame_set_burn,
            },
            &c.dot,
        );

        // Step 10: final damage
        let final_damage = total_damage + dot.total;
        let effective_multiplier = if base_damage > 0.0 {
            final_damage / base_damage
        } else {
            0.0
        };

        // Step 11: three-hit sequence
        let three_hit = three_hit_sequence(weapon_type, total_damage, dot.total);

        let player_stats = point_input.map(|(vitality, defense)| {
            let explorer_bonus = if applied.explorer {
                c.sets.explorer_health
            } else {
                0.0
            };
            let health = vitality as f64 * sp.vit_hp + bonus_health + explorer_bonus;
            let shield = defense as f64 * sp.def_shield + bonus_shield;
            PlayerStats {
                health: round2(health),
                shield: round2(shield),
                total_hp: round2(health + shield),
                min_damage: round2(min_damage),
                max_damage: round2(max_damage),
                magic_damage: round2(magic_damage),
                crit_rate: round1(crit_rate),
                crit_damage: round1(crit_damage),
            }
        });

        Ok(DamageReport {
            min_damage: round2(min_damage),
            max_damage: round2(max_damage),
            magic_damage: round2(magic_damage),
            avg_physical_damage: round2(avg_physical_damage),
            effective_min_damage: round2(effective_min),
            effective_max_damage: round2(effective_max),
            effective_avg_physical_damage: round2(effective_avg),
            effective_magic_damage: round2(effective_magic),
            base_damage: round2(base_damage),
            crit_multiplied_damage: round2(total_damage),
            dot_damage: round2(dot.total),
            final_damage: round2(final_damage),
            effective_multiplier: round2(effective_multiplier),
            crit_rate: round1(crit_rate),
            crit_damage: round1(crit_damage),
            burn_chance: round1(dot.burn_chance * 100.0),
            bleed_chance: round1(dot.bleed_chance * 100.0),
            poison_chance: round1(dot.poison_chance * 100.0),
            flame_set_count: tally.flame,
            damage_type,
            set_counts: tally,
            set_bonuses_applied: applied,
            potion_effects: loadout.potions,
            three_hit: three_hit.rounded(),
            player_stats,
        })
    }
}
