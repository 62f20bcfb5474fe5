//! Item catalog - static, immutable lookup table for weapons and equipment

mod builtin;
mod item;

pub use item::{ItemDefinition, ItemStats, SpecialEffects};

use crate::config::{self, ConfigError};
use crate::types::{ItemId, SlotKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Immutable item catalog
///
/// Items keep their insertion order so that subset enumeration in the
/// optimizer is reproducible for a fixed catalog.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
    index: HashMap<ItemId, usize>,
}

/// On-disk catalog format: a list of `[[item]]` tables
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(rename = "item")]
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        ItemCatalog::default()
    }

    /// Build a catalog from item definitions, validating invariants
    pub fn from_items(items: Vec<ItemDefinition>) -> Result<Self, ConfigError> {
        let mut catalog = ItemCatalog::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file: CatalogFile = config::load_toml(path)?;
        Self::from_items(file.items)
    }

    /// Parse a catalog from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = config::parse_toml(content)?;
        Self::from_items(file.items)
    }

    /// The full builtin item table (weapons and equipment)
    pub fn with_defaults() -> Self {
        // The builtin table upholds every invariant; from_items only
        // fails on duplicate ids or malformed entries.
        Self::from_items(builtin::builtin_items())
            .unwrap_or_else(|_| unreachable!("builtin catalog is validated by tests"))
    }

    fn insert(&mut self, item: ItemDefinition) -> Result<(), ConfigError> {
        if self.index.contains_key(&item.id) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate item id: {}",
                item.id
            )));
        }
        if (item.stats.atk_min == 0.0) != (item.stats.atk_max == 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "item {} has a dangling atk_min/atk_max pair",
                item.id
            )));
        }
        if item.slot == SlotKind::Weapon && item.weapon_type.is_none() {
            return Err(ConfigError::ValidationError(format!(
                "weapon {} is missing a weapon type",
                item.id
            )));
        }
        self.index.insert(item.id.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Look up an item by id
    pub fn get(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// All items in insertion order
    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    /// Equipment items in insertion order
    pub fn equipment(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter().filter(|i| i.is_equipment())
    }

    /// Weapon items in insertion order
    pub fn weapons(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter().filter(|i| i.slot == SlotKind::Weapon)
    }

    /// Number of items in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SetKey, WeaponType};

    #[test]
    fn test_builtin_catalog_integrity() {
        let catalog = ItemCatalog::with_defaults();
        assert_eq!(catalog.len(), 34);
        assert_eq!(catalog.weapons().count(), 10);
        assert_eq!(catalog.equipment().count(), 24);

        // Every weapon has a type; every atk pair is complete
        for item in catalog.items() {
            if item.slot == SlotKind::Weapon {
                assert!(item.weapon_type.is_some(), "weapon {} missing type", item.id);
            }
            assert_eq!(
                item.stats.atk_min == 0.0,
                item.stats.atk_max == 0.0,
                "item {} has a dangling atk pair",
                item.id
            );
        }
    }

    #[test]
    fn test_builtin_lookup() {
        let catalog = ItemCatalog::with_defaults();

        let daybreak = catalog.get(&ItemId::from("daybreak")).unwrap();
        assert_eq!(daybreak.set, Some(SetKey::Flame));
        assert!((daybreak.effects.burn_chance - 0.52).abs() < f64::EPSILON);

        let staff = catalog.get(&ItemId::from("emerald_staff")).unwrap();
        assert_eq!(staff.weapon_type, Some(WeaponType::Staff));
        assert!((staff.stats.magic - 500.0).abs() < f64::EPSILON);

        assert!(catalog.get(&ItemId::from("no_such_item")).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let items = vec![
            ItemDefinition {
                id: ItemId::from("dup"),
                name: "A".to_string(),
                slot: SlotKind::Equipment,
                weapon_type: None,
                tier: None,
                level_requirement: 0,
                stats: ItemStats::default(),
                effects: SpecialEffects::default(),
                set: None,
            },
            ItemDefinition {
                id: ItemId::from("dup"),
                name: "B".to_string(),
                slot: SlotKind::Equipment,
                weapon_type: None,
                tier: None,
                level_requirement: 0,
                stats: ItemStats::default(),
                effects: SpecialEffects::default(),
                set: None,
            },
        ];
        assert!(matches!(
            ItemCatalog::from_items(items),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_dangling_atk_pair_rejected() {
        let items = vec![ItemDefinition {
            id: ItemId::from("broken"),
            name: "Broken".to_string(),
            slot: SlotKind::Equipment,
            weapon_type: None,
            tier: None,
            level_requirement: 0,
            stats: ItemStats {
                atk_min: 10.0,
                ..Default::default()
            },
            effects: SpecialEffects::default(),
            set: None,
        }];
        assert!(ItemCatalog::from_items(items).is_err());
    }

    #[test]
    fn test_parse_toml_catalog() {
        let toml = r#"
[[item]]
id = "test_blade"
name = "Test Blade"
slot = "weapon"
weapon_type = "blade"
level_requirement = 5
set = "blessing"

[item.stats]
atk_min = 10
atk_max = 12
"#;
        let catalog = ItemCatalog::parse(toml).unwrap();
        assert_eq!(catalog.len(), 1);
        let blade = catalog.get(&ItemId::from("test_blade")).unwrap();
        assert_eq!(blade.weapon_type, Some(WeaponType::Blade));
        assert_eq!(blade.set, Some(SetKey::Blessing));
    }

    #[test]
    fn test_unknown_set_key_rejected_at_load() {
        let toml = r#"
[[item]]
id = "typo"
name = "Typo"
slot = "equipment"
set = "wolf_howll"
"#;
        assert!(ItemCatalog::parse(toml).is_err());
    }
}
