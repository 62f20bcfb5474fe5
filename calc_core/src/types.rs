//! Core types shared across the calculator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which slot family an item occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Weapon,
    Equipment,
}

/// Weapon class, drives damage type and the three-hit sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Sword,
    Bow,
    Staff,
    Scythe,
    Blade,
}

/// Which damage pool is treated as base damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageKind {
    Attack,
    Magic,
}

/// Item tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    I,
    II,
    III,
    IV,
    V,
}

impl Tier {
    /// Default level requirement for items of this tier
    pub fn level_requirement(self) -> u32 {
        match self {
            Tier::I => 1,
            Tier::II => 10,
            Tier::III => 20,
            Tier::IV => 30,
            Tier::V => 40,
        }
    }
}

/// Closed enumeration of set-bonus grouping keys
///
/// The catalog rejects unknown keys at load time, so a typo in item data
/// can never create a dead bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKey {
    Flame,
    WolfHowl,
    Crimson,
    QueenBee,
    Explorer,
    ForestDweller,
    LibraryRuina,
    Blessing,
}

impl SetKey {
    /// Get all set keys
    pub fn all() -> &'static [SetKey] {
        &[
            SetKey::Flame,
            SetKey::WolfHowl,
            SetKey::Crimson,
            SetKey::QueenBee,
            SetKey::Explorer,
            SetKey::ForestDweller,
            SetKey::LibraryRuina,
            SetKey::Blessing,
        ]
    }
}

/// Fixed-size piece tally, one counter per known set key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTally {
    pub flame: u32,
    pub wolf_howl: u32,
    pub crimson: u32,
    pub queen_bee: u32,
    pub explorer: u32,
    pub forest_dweller: u32,
    pub library_ruina: u32,
    pub blessing: u32,
}

impl SetTally {
    /// Count one equipped piece of the given set
    pub fn add(&mut self, key: SetKey) {
        *self.slot_mut(key) += 1;
    }

    /// Pieces counted for the given set
    pub fn count(&self, key: SetKey) -> u32 {
        match key {
            SetKey::Flame => self.flame,
            SetKey::WolfHowl => self.wolf_howl,
            SetKey::Crimson => self.crimson,
            SetKey::QueenBee => self.queen_bee,
            SetKey::Explorer => self.explorer,
            SetKey::ForestDweller => self.forest_dweller,
            SetKey::LibraryRuina => self.library_ruina,
            SetKey::Blessing => self.blessing,
        }
    }

    fn slot_mut(&mut self, key: SetKey) -> &mut u32 {
        match key {
            SetKey::Flame => &mut self.flame,
            SetKey::WolfHowl => &mut self.wolf_howl,
            SetKey::Crimson => &mut self.crimson,
            SetKey::QueenBee => &mut self.queen_bee,
            SetKey::Explorer => &mut self.explorer,
            SetKey::ForestDweller => &mut self.forest_dweller,
            SetKey::LibraryRuina => &mut self.library_ruina,
            SetKey::Blessing => &mut self.blessing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_tally_counts_per_key() {
        let mut tally = SetTally::default();
        tally.add(SetKey::Flame);
        tally.add(SetKey::Flame);
        tally.add(SetKey::WolfHowl);

        assert_eq!(tally.count(SetKey::Flame), 2);
        assert_eq!(tally.count(SetKey::WolfHowl), 1);
        assert_eq!(tally.count(SetKey::Crimson), 0);
    }

    #[test]
    fn test_set_key_round_trip() {
        for key in SetKey::all() {
            let json = serde_json::to_string(key).unwrap();
            let back: SetKey = serde_json::from_str(&json).unwrap();
            assert_eq!(*key, back);
        }
        assert_eq!(
            serde_json::to_string(&SetKey::ForestDweller).unwrap(),
            "\"forest_dweller\""
        );
    }

    #[test]
    fn test_unknown_set_key_rejected() {
        let result: Result<SetKey, _> = serde_json::from_str("\"wolf_howll\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_tier_level_requirements_ascend() {
        let levels: Vec<u32> = [Tier::I, Tier::II, Tier::III, Tier::IV, Tier::V]
            .iter()
            .map(|t| t.level_requirement())
            .collect();
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }
}
