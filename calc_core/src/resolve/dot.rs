//! Damage-over-time pools
//!
//! DoT contributions are additive on top of crit-resolved damage and are
//! never scaled by crit or flat equipment multipliers. All pools read the
//! potion-boosted damage values.

use crate::catalog::ItemDefinition;
use crate::config::DotConstants;

/// Expected DoT contribution and the chances behind it
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct DotBreakdown {
    /// Accumulated proc chances, uncapped (capping happens at damage time)
    pub burn_chance: f64,
    pub bleed_chance: f64,
    pub poison_chance: f64,
    /// Total expected DoT damage
    pub total: f64,
}

/// Potion-boosted damage pools the DoT formulas read from
#[derive(Debug, Clone, Copy)]
pub(crate) struct DotInputs {
    pub effective_min_damage: f64,
    pub effective_avg_physical_damage: f64,
    pub effective_magic_damage: f64,
    /// Flame set bonus burn chance, zero when the set is not triggered
    pub flame_set_burn: f64,
}

/// Accumulate DoT chances and expected damage from the equipped items
///
/// Proc chances add up per item occurrence; the dot-bonus fraction is
/// presence-based and does not stack (strongest wins).
pub(crate) fn compute_dot(
    equipment: &[&ItemDefinition],
    inputs: DotInputs,
    constants: &DotConstants,
) -> DotBreakdown {
    let mut burn_chance = inputs.flame_set_burn;
    let mut bleed_chance = 0.0;
    let mut poison_chance = 0.0;
    let mut dot_bonus: f64 = 0.0;
    let mut blood_butcher = false;

    for item in equipment {
        burn_chance += item.effects.burn_chance;
        bleed_chance += item.effects.bleed_chance;
        poison_chance += item.effects.poison_chance;
        dot_bonus = dot_bonus.max(item.effects.dot_bonus);
        blood_butcher |= item.effects.blood_butcher;
    }

    let mut total = 0.0;

    if burn_chance > 0.0 {
        let burn_damage = inputs.effective_magic_damage * constants.burn_percent * constants.burn_ticks
            + inputs.effective_magic_damage * dot_bonus;
        total += burn_damage * burn_chance.min(1.0);
    }

    if bleed_chance > 0.0 {
        let bleed_damage =
            inputs.effective_avg_physical_damage * constants.bleed_percent * constants.bleed_ticks;
        total += bleed_damage * bleed_chance.min(1.0);
    }

    if poison_chance > 0.0 {
        let poison_damage = inputs.effective_magic_damage
            * constants.poison_percent
            * constants.poison_ticks
            + inputs.effective_magic_damage * dot_bonus;
        total += poison_damage * poison_chance.min(1.0);
    }

    // Blood Butcher bleeds a fixed fraction of min damage, no proc roll
    if blood_butcher {
        total += inputs.effective_min_damage
            * constants.blood_butcher_percent
            * constants.blood_butcher_ticks;
    }

    DotBreakdown {
        burn_chance,
        bleed_chance,
        poison_chance,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemCatalog;
    use crate::types::ItemId;

    fn inputs(min: f64, avg: f64, magic: f64) -> DotInputs {
        DotInputs {
            effective_min_damage: min,
            effective_avg_physical_damage: avg,
            effective_magic_damage: magic,
            flame_set_burn: 0.0,
        }
    }

    fn items<'a>(catalog: &'a ItemCatalog, ids: &[&str]) -> Vec<&'a ItemDefinition> {
        ids.iter()
            .map(|id| catalog.get(&ItemId::from(*id)).unwrap())
            .collect()
    }

    #[test]
    fn test_no_items_no_dot() {
        let dot = compute_dot(&[], inputs(100.0, 100.0, 100.0), &DotConstants::default());
        assert_eq!(dot, DotBreakdown::default());
    }

    #[test]
    fn test_burn_from_daybreak() {
        let catalog = ItemCatalog::with_defaults();
        let equipment = items(&catalog, &["daybreak"]);
        let dot = compute_dot(&equipment, inputs(0.0, 0.0, 100.0), &DotConstants::default());

        assert!((dot.burn_chance - 0.52).abs() < f64::EPSILON);
        // 100 * 0.33 * 5 = 165 expected burn pool, scaled by 0.52
        assert!((dot.total - 165.0 * 0.52).abs() < 1e-9);
    }

    #[test]
    fn test_burn_chance_accumulates_and_caps() {
        let catalog = ItemCatalog::with_defaults();
        // 0.52 + 0.40 + 0.11 = 1.03, capped to 1.0 at damage time
        let equipment = items(&catalog, &["daybreak", "evernight", "volatile_gem"]);
        let dot = compute_dot(&equipment, inputs(0.0, 0.0, 100.0), &DotConstants::default());

        assert!((dot.burn_chance - 1.03).abs() < 1e-9);
        let burn_pool = 100.0 * 0.33 * 5.0 + 100.0 * 0.20; // volatile gem dot bonus
        let poison_pool = 100.0 * 0.40 * 5.0 + 100.0 * 0.20;
        let expected = burn_pool * 1.0 + poison_pool * 0.11;
        assert!((dot.total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_bleed_from_queenbee_crown() {
        let catalog = ItemCatalog::with_defaults();
        let equipment = items(&catalog, &["queenbee_crown"]);
        let dot = compute_dot(&equipment, inputs(0.0, 200.0, 0.0), &DotConstants::default());

        assert!((dot.bleed_chance - 0.26).abs() < f64::EPSILON);
        // 200 * 0.25 * 5 = 250, scaled by 0.26
        assert!((dot.total - 250.0 * 0.26).abs() < 1e-9);
    }

    #[test]
    fn test_blood_butcher_flat_contribution() {
        let catalog = ItemCatalog::with_defaults();
        let equipment = items(&catalog, &["blood_butcher"]);
        let dot = compute_dot(&equipment, inputs(100.0, 0.0, 0.0), &DotConstants::default());

        // 100 * 0.05 * 9 = 45, not scaled by any chance
        assert!((dot.total - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_flame_set_bonus_feeds_burn() {
        let catalog = ItemCatalog::with_defaults();
        let equipment = items(&catalog, &["daybreak"]);
        let mut with_bonus = inputs(0.0, 0.0, 100.0);
        with_bonus.flame_set_burn = 0.10;
        let dot = compute_dot(&equipment, with_bonus, &DotConstants::default());

        assert!((dot.burn_chance - 0.62).abs() < 1e-9);
    }

    #[test]
    fn test_dot_bonus_does_not_stack() {
        let catalog = ItemCatalog::with_defaults();
        let equipment = items(&catalog, &["volatile_gem", "volatile_gem"]);
        let dot = compute_dot(&equipment, inputs(0.0, 0.0, 100.0), &DotConstants::default());

        // Two gems double the chances but the 0.20 bonus applies once
        assert!((dot.burn_chance - 0.22).abs() < 1e-9);
        assert!((dot.poison_chance - 0.22).abs() < 1e-9);
        let burn_pool = 100.0 * 0.33 * 5.0 + 100.0 * 0.20;
        let poison_pool = 100.0 * 0.40 * 5.0 + 100.0 * 0.20;
        let expected = burn_pool * 0.22 + poison_pool * 0.22;
        assert!((dot.total - expected).abs() < 1e-9);
    }
}
