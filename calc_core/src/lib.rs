//! calc_core - Damage resolution and loadout optimization library
//!
//! This library provides:
//! - ItemCatalog: static weapon/equipment lookup table
//! - LoadoutConfig: per-call stat, equipment and potion selection
//! - DamageResolver: pure pipeline from loadout to DamageReport
//! - Loadout optimizer: top-K search over equipment subsets

pub mod catalog;
pub mod config;
pub mod error;
pub mod loadout;
pub mod optimize;
pub mod prelude;
pub mod resolve;
pub mod types;

// Re-export core types for convenience
pub use catalog::{ItemCatalog, ItemDefinition, ItemStats, SpecialEffects};
pub use config::{CalcConstants, ConfigError, CritModel};
pub use error::CalcError;
pub use loadout::{LoadoutConfig, Potions, StatInput};
pub use optimize::{
    Objective, OptimizeOutcome, OptimizeRequest, ScoredCombination, SearchControl,
    MAX_COMBINATIONS,
};
pub use resolve::{DamageReport, DamageResolver, PlayerStats, SetBonusesApplied, ThreeHitBreakdown};
pub use types::{DamageKind, ItemId, SetKey, SetTally, SlotKind, Tier, WeaponType};
