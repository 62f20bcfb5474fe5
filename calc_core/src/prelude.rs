//! Prelude module for convenient imports
//!
//! ```rust
//! use calc_core::prelude::*;
//! ```

// Core types
pub use crate::types::{DamageKind, ItemId, SetKey, SetTally, SlotKind, Tier, WeaponType};

// Catalog
pub use crate::catalog::{ItemCatalog, ItemDefinition, ItemStats, SpecialEffects};

// Loadout and resolution
pub use crate::loadout::{LoadoutConfig, Potions, StatInput};
pub use crate::resolve::{DamageReport, DamageResolver, ThreeHitBreakdown};

// Optimizer
pub use crate::optimize::{Objective, OptimizeOutcome, OptimizeRequest, SearchControl};

// Config and errors
pub use crate::config::{CalcConstants, CritModel};
pub use crate::error::CalcError;
