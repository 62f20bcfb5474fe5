//! Builtin item table

use super::item::{ItemDefinition, ItemStats, SpecialEffects};
use crate::types::{ItemId, SetKey, SlotKind, Tier, WeaponType};

fn weapon(id: &str, name: &str, weapon_type: WeaponType, level: u32) -> ItemDefinition {
    ItemDefinition {
        id: ItemId::from(id),
        name: name.to_string(),
        slot: SlotKind::Weapon,
        weapon_type: Some(weapon_type),
        tier: None,
        level_requirement: level,
        stats: ItemStats::default(),
        effects: SpecialEffects::default(),
        set: None,
    }
}

fn equipment(id: &str, name: &str, tier: Tier) -> ItemDefinition {
    ItemDefinition {
        id: ItemId::from(id),
        name: name.to_string(),
        slot: SlotKind::Equipment,
        weapon_type: None,
        tier: Some(tier),
        level_requirement: tier.level_requirement(),
        stats: ItemStats::default(),
        effects: SpecialEffects::default(),
        set: None,
    }
}

fn atk(min: f64, max: f64) -> ItemStats {
    ItemStats {
        atk_min: min,
        atk_max: max,
        ..Default::default()
    }
}

fn magic(value: f64) -> ItemStats {
    ItemStats {
        magic: value,
        ..Default::default()
    }
}

/// The full builtin item table: 10 weapons and 24 equipment pieces
pub(super) fn builtin_items() -> Vec<ItemDefinition> {
    vec![
        // === Weapons ===
        ItemDefinition {
            stats: atk(5.0, 5.0),
            set: Some(SetKey::Blessing),
            ..weapon("wooden_sword", "Wooden Sword", WeaponType::Sword, 1)
        },
        ItemDefinition {
            stats: magic(4.0),
            set: Some(SetKey::Blessing),
            ..weapon("wooden_staff", "Wooden Staff", WeaponType::Staff, 1)
        },
        ItemDefinition {
            stats: atk(5.0, 5.0),
            set: Some(SetKey::Blessing),
            ..weapon("wooden_bow", "Wooden Bow", WeaponType::Bow, 1)
        },
        ItemDefinition {
            stats: atk(75.0, 83.0),
            set: Some(SetKey::Explorer),
            ..weapon("divine_blade", "Divine Blade", WeaponType::Sword, 20)
        },
        ItemDefinition {
            stats: magic(60.0),
            set: Some(SetKey::Explorer),
            ..weapon(
                "forest_dweller_staff",
                "Forest Dweller's Staff",
                WeaponType::Staff,
                20,
            )
        },
        ItemDefinition {
            stats: atk(75.0, 83.0),
            set: Some(SetKey::Explorer),
            ..weapon(
                "forest_dweller_bow",
                "Forest Dweller's Bow",
                WeaponType::Bow,
                20,
            )
        },
        ItemDefinition {
            stats: atk(75.0, 75.0),
            set: Some(SetKey::LibraryRuina),
            ..weapon("crescendo_scythe", "Crescendo Scythe", WeaponType::Scythe, 25)
        },
        ItemDefinition {
            stats: magic(500.0),
            ..weapon("emerald_staff", "Emerald Staff", WeaponType::Staff, 35)
        },
        ItemDefinition {
            stats: atk(325.0, 360.0),
            set: Some(SetKey::WolfHowl),
            ..weapon("winter_howl", "Winter Howl", WeaponType::Sword, 40)
        },
        ItemDefinition {
            stats: atk(325.0, 360.0),
            set: Some(SetKey::QueenBee),
            ..weapon("eventide", "Eventide", WeaponType::Bow, 40)
        },
        // === Tier I equipment ===
        ItemDefinition {
            stats: atk(5.0, 5.0),
            set: Some(SetKey::Explorer),
            ..equipment("hunting_dagger", "Hunting Dagger", Tier::I)
        },
        ItemDefinition {
            stats: ItemStats {
                crit_chance: 5.0,
                crit_damage: 10.0,
                ..Default::default()
            },
            ..equipment("sharpener_rock", "Sharpener's Rock", Tier::I)
        },
        // === Tier II equipment ===
        ItemDefinition {
            stats: atk(50.0, 50.0),
            ..equipment("ancient_hammer", "Ancient Hammer", Tier::II)
        },
        ItemDefinition {
            stats: ItemStats {
                atk_min: 40.0,
                atk_max: 40.0,
                crit_chance: 5.0,
                ..Default::default()
            },
            effects: SpecialEffects {
                bleed_chance: 0.02,
                ..Default::default()
            },
            set: Some(SetKey::ForestDweller),
            ..equipment("forest_dweller_axe", "Forest Dweller's Axe", Tier::II)
        },
        ItemDefinition {
            stats: magic(45.0),
            ..equipment("volatile_crystal", "Volatile Crystal", Tier::II)
        },
        // === Tier III equipment ===
        ItemDefinition {
            stats: ItemStats {
                atk_min: 175.0,
                atk_max: 194.0,
                magic: 140.0,
                crit_chance: 5.0,
                ..Default::default()
            },
            ..equipment("alderite_axe", "Alderite Axe", Tier::III)
        },
        ItemDefinition {
            stats: magic(110.0),
            ..equipment("aqua_crystal", "Aqua Crystal", Tier::III)
        },
        ItemDefinition {
            stats: magic(100.0),
            ..equipment("arcane_spellbook", "Arcane Spellbook", Tier::III)
        },
        ItemDefinition {
            stats: ItemStats {
                atk_min: 35.0,
                atk_max: 35.0,
                magic: 130.0,
                ..Default::default()
            },
            ..equipment("corrupted_fang", "Corrupted Fang", Tier::III)
        },
        ItemDefinition {
            stats: atk(100.0, 111.0),
            effects: SpecialEffects {
                burn_chance: 0.52,
                ..Default::default()
            },
            set: Some(SetKey::Flame),
            ..equipment("daybreak", "Daybreak", Tier::III)
        },
        ItemDefinition {
            stats: ItemStats {
                atk_min: 125.0,
                atk_max: 125.0,
                magic: 100.0,
                ..Default::default()
            },
            ..equipment("enchanted_blade", "Enchanted Blade", Tier::III)
        },
        // === Tier IV equipment ===
        ItemDefinition {
            stats: ItemStats {
                health: 75.0,
                shield: 10.0,
                ..Default::default()
            },
            ..equipment("atlantis_armor", "Atlantis Armor", Tier::IV)
        },
        ItemDefinition {
            stats: ItemStats {
                health: 460.0,
                shield: 40.0,
                ..Default::default()
            },
            set: Some(SetKey::QueenBee),
            ..equipment("bee_breastplate", "Bee Breastplate", Tier::IV)
        },
        ItemDefinition {
            stats: ItemStats {
                atk_min: 225.0,
                atk_max: 249.0,
                crit_chance: 15.0,
                crit_damage: 22.0,
                ..Default::default()
            },
            set: Some(SetKey::WolfHowl),
            ..equipment("black_wolf_necklace", "Black Wolf Necklace", Tier::IV)
        },
        ItemDefinition {
            stats: ItemStats {
                atk_min: 250.0,
                atk_max: 277.0,
                crit_chance: 16.0,
                ..Default::default()
            },
            effects: SpecialEffects {
                blood_butcher: true,
                ..Default::default()
            },
            set: Some(SetKey::Crimson),
            ..equipment("blood_butcher", "Blood Butcher", Tier::IV)
        },
        ItemDefinition {
            stats: ItemStats {
                magic: 220.0,
                crit_damage: 27.0,
                ..Default::default()
            },
            set: Some(SetKey::Crimson),
            ..equipment("crimson_slime_fang", "Crimson Slime Fang", Tier::IV)
        },
        ItemDefinition {
            stats: magic(400.0),
            effects: SpecialEffects {
                damage_multiplier: 1.3,
                ..Default::default()
            },
            set: Some(SetKey::Crimson),
            ..equipment("cursed_spellbook", "Cursed Spellbook", Tier::IV)
        },
        ItemDefinition {
            stats: atk(135.0, 149.0),
            effects: SpecialEffects {
                double_damage_chance: 0.15,
                ..Default::default()
            },
            ..equipment("dual_sword", "Dual Sword", Tier::IV)
        },
        ItemDefinition {
            stats: atk(450.0, 450.0),
            effects: SpecialEffects {
                burn_chance: 0.40,
                ..Default::default()
            },
            set: Some(SetKey::Flame),
            ..equipment("evernight", "Evernight", Tier::IV)
        },
        ItemDefinition {
            stats: ItemStats {
                health: 775.0,
                shield: 275.0,
                ..Default::default()
            },
            ..equipment("forest_crown", "Forest Crown", Tier::IV)
        },
        ItemDefinition {
            stats: atk(280.0, 280.0),
            effects: SpecialEffects {
                burn_chance: 0.05,
                ..Default::default()
            },
            set: Some(SetKey::WolfHowl),
            ..equipment("volcanic_axe", "Volcanic Axe", Tier::IV)
        },
        ItemDefinition {
            stats: ItemStats {
                atk_min: 200.0,
                atk_max: 200.0,
                health: 50.0,
                ..Default::default()
            },
            effects: SpecialEffects {
                freeze_chance: 0.02,
                ..Default::default()
            },
            ..equipment("winter_spirit", "Winter Spirit", Tier::IV)
        },
        // === Tier V equipment ===
        ItemDefinition {
            stats: ItemStats {
                atk_min: 800.0,
                atk_max: 888.0,
                crit_chance: 20.0,
                crit_damage: 80.0,
                ..Default::default()
            },
            effects: SpecialEffects {
                bleed_chance: 0.26,
                ..Default::default()
            },
            set: Some(SetKey::QueenBee),
            ..equipment("queenbee_crown", "Queen Bee's Crown", Tier::V)
        },
        ItemDefinition {
            stats: magic(315.0),
            effects: SpecialEffects {
                burn_chance: 0.11,
                poison_chance: 0.11,
                dot_bonus: 0.20,
                ..Default::default()
            },
            set: Some(SetKey::Flame),
            ..equipment("volatile_gem", "Volatile Gem", Tier::V)
        },
    ]
}
