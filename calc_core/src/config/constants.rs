//! Tunable calculation constants

use serde::{Deserialize, Serialize};

/// Crit resolution formula variant
///
/// `ExpectedSplit` values the crit and non-crit branches from different
/// damage pools (max damage crits, average damage otherwise). `Blended`
/// is the superseded single-pool formula, kept as an explicit alternate
/// mode rather than reconciled into the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CritModel {
    #[default]
    ExpectedSplit,
    Blended,
}

/// Tunable calculation constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalcConstants {
    #[serde(default)]
    pub stat_points: StatPointConstants,
    #[serde(default)]
    pub potions: PotionConstants,
    #[serde(default)]
    pub sets: SetBonusConstants,
    #[serde(default)]
    pub crit: CritConstants,
    #[serde(default)]
    pub dot: DotConstants,
}

/// Scaling from attribute points to base stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatPointConstants {
    /// Min damage per strength point
    #[serde(default = "default_str_dmg_min")]
    pub str_dmg_min: f64,
    /// Max damage per strength point
    #[serde(default = "default_str_dmg_max")]
    pub str_dmg_max: f64,
    /// Magic damage per intelligence point
    #[serde(default = "default_int_magic")]
    pub int_magic: f64,
    /// Health per vitality point
    #[serde(default = "default_vit_hp")]
    pub vit_hp: f64,
    /// Shield per defense point
    #[serde(default = "default_def_shield")]
    pub def_shield: f64,
    /// Crit rate percentage points per dexterity point
    #[serde(default = "default_dex_crit")]
    pub dex_crit: f64,
    /// Dexterity points counted toward crit rate (50 points = 40%)
    #[serde(default = "default_dex_crit_cap")]
    pub dex_crit_cap: u32,
    /// Base 1% crit rate
    #[serde(default = "default_base_crit_rate")]
    pub base_crit_rate: f64,
    /// Base 100% crit damage
    #[serde(default = "default_base_crit_damage")]
    pub base_crit_damage: f64,
    /// Level-0 floor min damage
    #[serde(default)]
    pub base_atk_min: f64,
    /// Level-0 floor max damage
    #[serde(default)]
    pub base_atk_max: f64,
    /// Level-0 floor magic damage
    #[serde(default)]
    pub base_magic: f64,
}

impl Default for StatPointConstants {
    fn default() -> Self {
        StatPointConstants {
            str_dmg_min: 2.96,
            str_dmg_max: 6.45,
            int_magic: 6.0,
            vit_hp: 35.0,
            def_shield: 17.0,
            dex_crit: 0.8,
            dex_crit_cap: 50,
            base_crit_rate: 1.0,
            base_crit_damage: 100.0,
            base_atk_min: 0.0,
            base_atk_max: 0.0,
            base_magic: 0.0,
        }
    }
}

fn default_str_dmg_min() -> f64 {
    2.96
}
fn default_str_dmg_max() -> f64 {
    6.45
}
fn default_int_magic() -> f64 {
    6.0
}
fn default_vit_hp() -> f64 {
    35.0
}
fn default_def_shield() -> f64 {
    17.0
}
fn default_dex_crit() -> f64 {
    0.8
}
fn default_dex_crit_cap() -> u32 {
    50
}
fn default_base_crit_rate() -> f64 {
    1.0
}
fn default_base_crit_damage() -> f64 {
    100.0
}

/// Potion multipliers, compounding in attack -> golden apple -> magic order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotionConstants {
    /// Attack potion multiplier on physical damage
    #[serde(default = "default_attack_potion")]
    pub attack_potion: f64,
    /// Golden apple multiplier on physical damage
    #[serde(default = "default_golden_apple")]
    pub golden_apple: f64,
    /// Magic potion multiplier on magic damage
    #[serde(default = "default_magic_potion")]
    pub magic_potion: f64,
}

impl Default for PotionConstants {
    fn default() -> Self {
        PotionConstants {
            attack_potion: 1.75,
            golden_apple: 1.5,
            magic_potion: 1.75,
        }
    }
}

fn default_attack_potion() -> f64 {
    1.75
}
fn default_golden_apple() -> f64 {
    1.5
}
fn default_magic_potion() -> f64 {
    1.75
}

/// Set bonus values, each triggered at the piece threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetBonusConstants {
    /// Pieces required to trigger any set bonus
    #[serde(default = "default_piece_threshold")]
    pub piece_threshold: u32,
    /// Wolf Howl: crit rate percentage points added
    #[serde(default = "default_wolf_howl_crit")]
    pub wolf_howl_crit: f64,
    /// Crimson: magic damage multiplier
    #[serde(default = "default_crimson_magic")]
    pub crimson_magic: f64,
    /// Forest Dweller: physical damage multiplier (attack type only)
    #[serde(default = "default_forest_dweller_attack")]
    pub forest_dweller_attack: f64,
    /// Explorer: flat health added to player stats
    #[serde(default = "default_explorer_health")]
    pub explorer_health: f64,
    /// Flame: burn chance added
    #[serde(default = "default_flame_burn")]
    pub flame_burn: f64,
}

impl Default for SetBonusConstants {
    fn default() -> Self {
        SetBonusConstants {
            piece_threshold: 2,
            wolf_howl_crit: 12.0,
            crimson_magic: 1.18,
            forest_dweller_attack: 1.18,
            explorer_health: 200.0,
            flame_burn: 0.10,
        }
    }
}

fn default_piece_threshold() -> u32 {
    2
}
fn default_wolf_howl_crit() -> f64 {
    12.0
}
fn default_crimson_magic() -> f64 {
    1.18
}
fn default_forest_dweller_attack() -> f64 {
    1.18
}
fn default_explorer_health() -> f64 {
    200.0
}
fn default_flame_burn() -> f64 {
    0.10
}

/// Crit resolution settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CritConstants {
    /// Which crit formula to use
    #[serde(default)]
    pub model: CritModel,
}

/// Damage-over-time coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DotConstants {
    /// Burn: fraction of magic damage per tick
    #[serde(default = "default_burn_percent")]
    pub burn_percent: f64,
    /// Burn tick count
    #[serde(default = "default_five_ticks")]
    pub burn_ticks: f64,
    /// Bleed: fraction of average physical damage per tick
    #[serde(default = "default_bleed_percent")]
    pub bleed_percent: f64,
    /// Bleed tick count
    #[serde(default = "default_five_ticks")]
    pub bleed_ticks: f64,
    /// Poison: fraction of magic damage per tick
    #[serde(default = "default_poison_percent")]
    pub poison_percent: f64,
    /// Poison tick count
    #[serde(default = "default_five_ticks")]
    pub poison_ticks: f64,
    /// Blood Butcher: fraction of min damage per tick
    #[serde(default = "default_blood_butcher_percent")]
    pub blood_butcher_percent: f64,
    /// Blood Butcher tick count
    #[serde(default = "default_blood_butcher_ticks")]
    pub blood_butcher_ticks: f64,
}

impl Default for DotConstants {
    fn default() -> Self {
        DotConstants {
            burn_percent: 0.33,
            burn_ticks: 5.0,
            bleed_percent: 0.25,
            bleed_ticks: 5.0,
            poison_percent: 0.40,
            poison_ticks: 5.0,
            blood_butcher_percent: 0.05,
            blood_butcher_ticks: 9.0,
        }
    }
}

fn default_burn_percent() -> f64 {
    0.33
}
fn default_bleed_percent() -> f64 {
    0.25
}
fn default_poison_percent() -> f64 {
    0.40
}
fn default_blood_butcher_percent() -> f64 {
    0.05
}
fn default_five_ticks() -> f64 {
    5.0
}
fn default_blood_butcher_ticks() -> f64 {
    9.0
}
