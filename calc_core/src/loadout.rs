//! LoadoutConfig - the per-call input to the resolver

use crate::error::CalcError;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};

/// Where the base stats come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StatInput {
    /// Derive base stats from attribute points
    FromPoints {
        #[serde(default)]
        strength: u32,
        #[serde(default)]
        vitality: u32,
        #[serde(default)]
        intelligence: u32,
        #[serde(default)]
        dexterity: u32,
        #[serde(default)]
        defense: u32,
        #[serde(default)]
        player_level: u32,
    },
    /// Use supplied numbers directly
    ///
    /// Zero or absent crit fields fall back to the base 1% rate / 100%
    /// damage defaults during resolution.
    Manual {
        #[serde(default)]
        min_damage: f64,
        #[serde(default)]
        max_damage: f64,
        #[serde(default)]
        magic_damage: f64,
        #[serde(default)]
        crit_rate_percent: f64,
        #[serde(default)]
        crit_damage_percent: f64,
    },
}

impl Default for StatInput {
    fn default() -> Self {
        StatInput::Manual {
            min_damage: 0.0,
            max_damage: 0.0,
            magic_damage: 0.0,
            crit_rate_percent: 0.0,
            crit_damage_percent: 0.0,
        }
    }
}

/// Active consumables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potions {
    #[serde(default)]
    pub attack_potion: bool,
    #[serde(default)]
    pub magic_potion: bool,
    #[serde(default)]
    pub golden_apple: bool,
}

/// A full loadout: stats, weapon, equipment and consumables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadoutConfig {
    #[serde(default)]
    pub stats: StatInput,
    /// Selected weapon id; ids absent from the catalog contribute nothing
    #[serde(default)]
    pub weapon: Option<ItemId>,
    /// Equipped item ids; duplicates are tallied per occurrence
    #[serde(default)]
    pub equipment: Vec<ItemId>,
    #[serde(default)]
    pub potions: Potions,
}

impl LoadoutConfig {
    /// Check numeric fields: manual stats must be finite and non-negative
    pub fn validate(&self) -> Result<(), CalcError> {
        if let StatInput::Manual {
            min_damage,
            max_damage,
            magic_damage,
            crit_rate_percent,
            crit_damage_percent,
        } = &self.stats
        {
            let fields = [
                ("min_damage", *min_damage),
                ("max_damage", *max_damage),
                ("magic_damage", *magic_damage),
                ("crit_rate_percent", *crit_rate_percent),
                ("crit_damage_percent", *crit_damage_percent),
            ];
            for (name, value) in fields {
                if !value.is_finite() || value < 0.0 {
                    return Err(CalcError::InvalidInput(format!(
                        "{name} must be a non-negative number, got {value}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Level used for optimizer filtering when no explicit filter is given
    pub fn player_level(&self) -> Option<u32> {
        match self.stats {
            StatInput::FromPoints { player_level, .. } if player_level > 0 => Some(player_level),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_points() {
        let json = r#"{
            "stats": {"mode": "from_points", "strength": 100, "dexterity": 30, "player_level": 42},
            "weapon": "winter_howl",
            "equipment": ["daybreak", "daybreak"],
            "potions": {"attack_potion": true}
        }"#;
        let config: LoadoutConfig = serde_json::from_str(json).unwrap();
        match config.stats {
            StatInput::FromPoints {
                strength,
                vitality,
                dexterity,
                player_level,
                ..
            } => {
                assert_eq!(strength, 100);
                assert_eq!(vitality, 0);
                assert_eq!(dexterity, 30);
                assert_eq!(player_level, 42);
            }
            _ => panic!("expected from_points"),
        }
        assert_eq!(config.equipment.len(), 2);
        assert!(config.potions.attack_potion);
        assert!(!config.potions.golden_apple);
    }

    #[test]
    fn test_deserialize_defaults_to_empty_manual() {
        let config: LoadoutConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.stats, StatInput::default());
        assert!(config.weapon.is_none());
        assert!(config.equipment.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_manual_fields() {
        let config = LoadoutConfig {
            stats: StatInput::Manual {
                min_damage: -1.0,
                max_damage: 0.0,
                magic_damage: 0.0,
                crit_rate_percent: 0.0,
                crit_damage_percent: 0.0,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let config = LoadoutConfig {
            stats: StatInput::Manual {
                min_damage: 0.0,
                max_damage: f64::NAN,
                magic_damage: 0.0,
                crit_rate_percent: 0.0,
                crit_damage_percent: 0.0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_player_level_only_from_points() {
        let manual = LoadoutConfig::default();
        assert_eq!(manual.player_level(), None);

        let points = LoadoutConfig {
            stats: StatInput::FromPoints {
                strength: 0,
                vitality: 0,
                intelligence: 0,
                dexterity: 0,
                defense: 0,
                player_level: 30,
            },
            ..Default::default()
        };
        assert_eq!(points.player_level(), Some(30));
    }
}
